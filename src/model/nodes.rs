//! Tree node definitions.
//!
//! Every declaration node carries a local `name`, a dot-separated
//! `qualified_name` rooted at its module, and an annotation list. Classes,
//! functions, and parameters additionally carry an original-declaration
//! snapshot: a write-once record of the node's pre-rewrite identity, stamped
//! by the snapshot pass and consulted by the code generators to know which
//! underlying symbol to call.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::base::Name;

use super::annotations::Annotation;

/// Name that marks a method as the class constructor.
pub const CONSTRUCTOR_NAME: &str = "__init__";

// ============================================================================
// PACKAGE / MODULE
// ============================================================================

/// Root of the API tree: one distribution of one library.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub name: Name,
    pub distribution: Name,
    pub version: Name,
    pub modules: Vec<Module>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// One source module. The module's qualified name is its own (possibly
/// dotted) `name`; qualified names of its members are rooted there.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub name: Name,
    #[serde(default)]
    pub imports: Vec<Import>,
    #[serde(default)]
    pub from_imports: Vec<FromImport>,
    pub classes: Vec<Class>,
    pub functions: Vec<Function>,
}

impl Module {
    /// A module synthesized as a move destination starts empty.
    pub fn empty(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            imports: Vec::new(),
            from_imports: Vec::new(),
            classes: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Whether the module declares nothing (candidate for cleanup).
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.functions.is_empty()
    }
}

/// A plain `import module` statement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Import {
    pub module: Name,
    #[serde(default)]
    pub alias: Option<Name>,
}

/// A `from module import declaration` statement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FromImport {
    pub module: Name,
    pub declaration: Name,
    #[serde(default)]
    pub alias: Option<Name>,
}

// ============================================================================
// CLASS / FUNCTION
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub name: Name,
    pub qualified_name: String,
    #[serde(default)]
    pub decorators: Vec<String>,
    #[serde(default)]
    pub superclasses: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    pub methods: Vec<Function>,
    pub is_public: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub docstring: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Write-once snapshot of the pre-rewrite declaration.
    #[serde(skip)]
    pub original: Option<Arc<OriginalDecl>>,
}

impl Class {
    /// The constructor method, if the class declares one. At most one
    /// method may carry the constructor name.
    pub fn constructor(&self) -> Option<&Function> {
        self.methods.iter().find(|m| m.is_constructor())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: Name,
    pub qualified_name: String,
    #[serde(default)]
    pub decorators: Vec<String>,
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub results: Vec<FunctionResult>,
    pub is_public: bool,
    #[serde(default)]
    pub is_pure: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub docstring: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(skip)]
    pub original: Option<Arc<OriginalDecl>>,
}

impl Function {
    /// Whether this function is its class's constructor.
    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME
    }
}

// ============================================================================
// PARAMETER / ATTRIBUTE / RESULT
// ============================================================================

/// How a parameter is supplied at a call site in generated code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterBinding {
    PositionOnly,
    PositionOrName,
    NameOnly,
    Constant,
    AttributeBound,
    ImplicitSelf,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: Name,
    pub qualified_name: String,
    /// Default value as source text, e.g. `'auto'` or `42`.
    #[serde(default)]
    pub default_value: Option<String>,
    pub binding: ParameterBinding,
    pub is_public: bool,
    /// Documented type, verbatim from the docstring.
    #[serde(default)]
    pub type_hint: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Structural range constraint, attached by the boundary pass.
    #[serde(default)]
    pub boundary: Option<Boundary>,
    #[serde(skip)]
    pub original: Option<Arc<OriginalParameter>>,
}

/// A class-level field, synthesized from an attribute-bound constructor
/// parameter. Same shape as [`Parameter`] minus the binding category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: Name,
    pub qualified_name: String,
    #[serde(default)]
    pub default_value: Option<String>,
    pub is_public: bool,
    #[serde(default)]
    pub type_hint: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub boundary: Option<Boundary>,
}

/// A declared or documented function result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionResult {
    pub name: Name,
    #[serde(default)]
    pub type_hint: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

// ============================================================================
// BOUNDARY
// ============================================================================

/// Comparison operator on one end of a boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    LessThan,
    LessThanOrEqual,
    /// This end of the range is unbounded and omitted from guards.
    Unrestricted,
}

/// One end of a boundary: a limit value plus its comparison operator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub value: f64,
    pub comparison: Comparison,
}

impl Limit {
    pub fn unrestricted() -> Self {
        Self {
            value: 0.0,
            comparison: Comparison::Unrestricted,
        }
    }
}

/// A numeric validity range, compiled into a runtime guard by the adapter
/// generator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    /// Discrete boundaries additionally assert integer-valued input.
    pub is_discrete: bool,
    pub lower: Limit,
    pub upper: Limit,
}

impl Boundary {
    /// Interval notation for error messages, e.g. `(2, 10]`.
    /// Unrestricted ends render as infinities.
    pub fn interval(&self) -> String {
        let open = match self.lower.comparison {
            Comparison::LessThanOrEqual => format!("[{}", fmt_limit(self.lower.value)),
            Comparison::LessThan => format!("({}", fmt_limit(self.lower.value)),
            Comparison::Unrestricted => "(-∞".to_string(),
        };
        let close = match self.upper.comparison {
            Comparison::LessThanOrEqual => format!("{}]", fmt_limit(self.upper.value)),
            Comparison::LessThan => format!("{})", fmt_limit(self.upper.value)),
            Comparison::Unrestricted => "∞)".to_string(),
        };
        format!("{open}, {close}")
    }
}

/// Render a limit without a trailing `.0` for whole numbers.
fn fmt_limit(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

// ============================================================================
// ORIGINAL DECLARATION SNAPSHOTS
// ============================================================================

/// Frozen pre-rewrite identity of a class or function.
///
/// Set exactly once by the snapshot pass and never rewritten afterwards;
/// generators use it to address the real underlying symbol regardless of
/// how many renames and moves the live node has seen since.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OriginalDecl {
    pub name: Name,
    pub qualified_name: String,
    /// Enclosing module path at snapshot time, used for adapter imports.
    pub module: String,
}

/// Frozen pre-rewrite identity of a parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OriginalParameter {
    pub name: Name,
    pub qualified_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(value: f64, comparison: Comparison) -> Limit {
        Limit { value, comparison }
    }

    #[test]
    fn boundary_interval_notation() {
        let b = Boundary {
            is_discrete: true,
            lower: limit(2.0, Comparison::LessThan),
            upper: limit(10.0, Comparison::LessThanOrEqual),
        };
        assert_eq!(b.interval(), "(2, 10]");
    }

    #[test]
    fn boundary_interval_unrestricted_ends() {
        let b = Boundary {
            is_discrete: false,
            lower: Limit::unrestricted(),
            upper: limit(0.5, Comparison::LessThan),
        };
        assert_eq!(b.interval(), "(-∞, 0.5)");
    }

    #[test]
    fn synthesized_module_starts_empty() {
        let module = Module::empty("m");
        assert!(module.is_empty());
    }
}
