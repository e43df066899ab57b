//! Annotation validator.
//!
//! A pure semantic check over the (typically pre-transformation) tree:
//! every annotation must be legal for the node kind it decorates, and no
//! two annotations on one node may conflict. Errors are collected, never
//! thrown; validation is advisory and fully decoupled from the rewrite
//! pipeline — callers are expected to validate first by convention.

mod tables;

pub use tables::{GROUP_SAFE, allowed_targets, compatible, compatible_with};

use std::fmt;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::base::{Name, is_identifier};
use crate::model::{Annotation, AnnotationKind, Class, Function, Package, Parameter};
use crate::traverse::{Visitor, walk};

/// Node kinds distinguished by the legality tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Package,
    Class,
    Method,
    GlobalFunction,
    ConstructorParameter,
    FunctionParameter,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeclarationKind::Package => "package",
            DeclarationKind::Class => "class",
            DeclarationKind::Method => "method",
            DeclarationKind::GlobalFunction => "global function",
            DeclarationKind::ConstructorParameter => "constructor parameter",
            DeclarationKind::FunctionParameter => "function parameter",
        };
        write!(f, "{name}")
    }
}

/// One validation finding. Pure data with a rendered message; the HTTP/UI
/// boundary decides how to surface it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("annotation {annotation} cannot be attached to {node} '{target}'")]
    Target {
        target: String,
        annotation: AnnotationKind,
        node: DeclarationKind,
    },

    #[error("annotations {first} and {second} cannot be combined on '{target}'")]
    Combination {
        target: String,
        first: AnnotationKind,
        second: AnnotationKind,
    },

    #[error("parameter '{target}' of group '{group}' cannot carry annotation {annotation}")]
    GroupCombination {
        target: String,
        group: Name,
        annotation: AnnotationKind,
    },

    #[error("Rename on '{target}' names '{new_name}', which is not a valid identifier")]
    InvalidName { target: String, new_name: Name },
}

/// Validate every annotation in the package. Never mutates, never halts
/// the pipeline; returns all findings in traversal order.
pub fn validate_package(package: &Package) -> Vec<ValidationError> {
    let mut visitor = ValidationVisitor::default();
    walk(package, &mut visitor);
    tracing::debug!(
        package = %package.name,
        errors = visitor.errors.len(),
        "validation finished"
    );
    visitor.errors
}

#[derive(Default)]
struct ValidationVisitor {
    errors: Vec<ValidationError>,
    in_class: bool,
    in_constructor: bool,
    /// Member name → group name, for the current function's Group
    /// annotations.
    grouped: FxHashMap<Name, Name>,
}

impl Visitor for ValidationVisitor {
    fn enter_package(&mut self, package: &Package) -> bool {
        self.check_node(&package.name, DeclarationKind::Package, &package.annotations);
        true
    }

    fn enter_class(&mut self, class: &Class) -> bool {
        self.check_node(&class.qualified_name, DeclarationKind::Class, &class.annotations);
        self.in_class = true;
        true
    }

    fn leave_class(&mut self, _class: &Class) {
        self.in_class = false;
    }

    fn enter_function(&mut self, function: &Function) -> bool {
        let kind = if self.in_class {
            DeclarationKind::Method
        } else {
            DeclarationKind::GlobalFunction
        };
        self.check_node(&function.qualified_name, kind, &function.annotations);

        self.in_constructor = self.in_class && function.is_constructor();
        self.grouped.clear();
        for annotation in &function.annotations {
            if let Annotation::Group { name, members } = annotation {
                for member in members {
                    self.grouped.insert(member.clone(), name.clone());
                }
            }
        }
        true
    }

    fn leave_function(&mut self, _function: &Function) {
        self.in_constructor = false;
        self.grouped.clear();
    }

    fn enter_parameter(&mut self, parameter: &Parameter) -> bool {
        let kind = if self.in_constructor {
            DeclarationKind::ConstructorParameter
        } else {
            DeclarationKind::FunctionParameter
        };
        self.check_node(&parameter.qualified_name, kind, &parameter.annotations);

        if let Some(group) = self.grouped.get(&parameter.name) {
            for annotation in &parameter.annotations {
                if !GROUP_SAFE.contains(&annotation.kind()) {
                    self.errors.push(ValidationError::GroupCombination {
                        target: parameter.qualified_name.clone(),
                        group: group.clone(),
                        annotation: annotation.kind(),
                    });
                }
            }
        }
        true
    }
}

impl ValidationVisitor {
    /// Target legality, pairwise combination legality, and rename-name
    /// checks for one node.
    fn check_node(&mut self, target: &str, node: DeclarationKind, annotations: &[Annotation]) {
        for annotation in annotations {
            if !allowed_targets(annotation.kind()).contains(&node) {
                self.errors.push(ValidationError::Target {
                    target: target.to_string(),
                    annotation: annotation.kind(),
                    node,
                });
            }
            if let Annotation::Rename { new_name } = annotation {
                if !is_identifier(new_name) {
                    self.errors.push(ValidationError::InvalidName {
                        target: target.to_string(),
                        new_name: new_name.clone(),
                    });
                }
            }
        }

        for (i, first) in annotations.iter().enumerate() {
            for second in &annotations[i + 1..] {
                if !compatible(first.kind(), second.kind()) {
                    self.errors.push(ValidationError::Combination {
                        target: target.to_string(),
                        first: first.kind(),
                        second: second.kind(),
                    });
                }
            }
        }
    }
}
