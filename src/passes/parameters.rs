//! Parameter reclassification, reordering, and attribute synthesis.
//!
//! Per parameter: the baseline binding is name-only when a default literal
//! exists and position-or-name otherwise. The first of {Attribute,
//! Constant, Optional, Required} in annotation-list order then overrides
//! both the binding and the default literal; that annotation is consumed
//! and every other annotation is carried forward. Implicit-self parameters
//! are never reclassified.
//!
//! Per function: parameters are reordered into implicit-self,
//! position-or-name, name-only, constant, attribute-bound groups, stable
//! within each group. Position-only never survives the baseline; one
//! showing up later is an internal-consistency defect that the generators
//! detect.
//!
//! If the function is its class's constructor, every attribute-bound
//! parameter additionally synthesizes a class-level attribute, which the
//! class rewrite step appends to the class's attribute list.

use crate::model::{
    Annotation, AnnotationKind, Attribute, Class, Function, Parameter, ParameterBinding,
};
use crate::traverse::Rewriter;

#[derive(Default)]
pub struct ParameterPass {
    /// Set while rewriting a class's methods.
    in_class: bool,
    /// Attributes synthesized from the current class's constructor.
    pending_attributes: Vec<Attribute>,
}

impl Rewriter for ParameterPass {
    fn enter_class(&mut self, _class: &Class) {
        self.in_class = true;
        self.pending_attributes.clear();
    }

    fn rewrite_parameter(&mut self, parameter: Parameter) -> Option<Parameter> {
        Some(reclassify(parameter))
    }

    fn rewrite_function(&mut self, mut function: Function) -> Option<Function> {
        function.parameters = reorder(function.parameters);

        if self.in_class && function.is_constructor() {
            self.pending_attributes = function
                .parameters
                .iter()
                .filter(|p| p.binding == ParameterBinding::AttributeBound)
                .map(synthesize_attribute)
                .collect();
        }
        Some(function)
    }

    fn rewrite_class(&mut self, mut class: Class) -> Option<Class> {
        self.in_class = false;
        class.attributes.append(&mut self.pending_attributes);
        Some(class)
    }
}

/// Apply the baseline and the first binding annotation, consuming it.
fn reclassify(mut parameter: Parameter) -> Parameter {
    if parameter.binding == ParameterBinding::ImplicitSelf {
        return parameter;
    }

    parameter.binding = if parameter.default_value.is_some() {
        ParameterBinding::NameOnly
    } else {
        ParameterBinding::PositionOrName
    };

    let mut binding = parameter.binding;
    let mut default = parameter.default_value.take();
    let mut applied = false;
    let at = parameter.qualified_name.clone();

    parameter.annotations.retain(|annotation| {
        let (new_binding, new_default) = match annotation {
            Annotation::Attribute { default } => {
                (ParameterBinding::AttributeBound, Some(default.clone()))
            }
            Annotation::Constant { default } => (ParameterBinding::Constant, Some(default.clone())),
            Annotation::Optional { default } => (ParameterBinding::NameOnly, Some(default.clone())),
            Annotation::Required => (ParameterBinding::PositionOrName, None),
            _ => return true,
        };
        if applied {
            tracing::warn!(
                target = %at,
                ignored = %annotation.kind(),
                "duplicate binding annotation, first wins"
            );
        } else {
            applied = true;
            binding = new_binding;
            default = new_default;
        }
        false
    });

    parameter.binding = binding;
    parameter.default_value = default;
    parameter
}

/// Stable partition into the post-classification group order.
fn reorder(parameters: Vec<Parameter>) -> Vec<Parameter> {
    let mut groups: [Vec<Parameter>; 6] = Default::default();
    for parameter in parameters {
        let slot = match parameter.binding {
            ParameterBinding::ImplicitSelf => 0,
            ParameterBinding::PositionOnly => 1,
            ParameterBinding::PositionOrName => 2,
            ParameterBinding::NameOnly => 3,
            ParameterBinding::Constant => 4,
            ParameterBinding::AttributeBound => 5,
        };
        groups[slot].push(parameter);
    }
    groups.into_iter().flatten().collect()
}

/// Build the class attribute for an attribute-bound constructor parameter.
/// Annotations meaningful only at parameter scope are not carried over.
fn synthesize_attribute(parameter: &Parameter) -> Attribute {
    Attribute {
        name: parameter.name.clone(),
        // Re-rooted under the class by the requalify sweep.
        qualified_name: parameter.qualified_name.clone(),
        default_value: parameter.default_value.clone(),
        is_public: parameter.is_public,
        type_hint: parameter.type_hint.clone(),
        description: parameter.description.clone(),
        annotations: parameter
            .annotations
            .iter()
            .filter(|a| {
                matches!(
                    a.kind(),
                    AnnotationKind::Boundary | AnnotationKind::EnumMapping | AnnotationKind::Rename
                )
            })
            .cloned()
            .collect(),
        boundary: parameter.boundary,
    }
}
