//! Code generation backends.
//!
//! Both backends consume the fully-transformed tree: the adapter generator
//! emits forwarding Python source, the stub generator emits a
//! declaration-only view in the stub DSL. They share the
//! parameter-partitioning algorithm and the default-literal canonicalizer
//! defined here.

mod adapter;
mod stub;

pub use adapter::generate_adapter_module;
pub use stub::generate_stub_module;

use std::path::PathBuf;

use thiserror::Error;

use crate::base::SEPARATOR;
use crate::model::{Function, Parameter, ParameterBinding};

/// File extension of generated adapter modules.
pub const ADAPTER_EXTENSION: &str = "py";
/// File extension of generated stub modules.
pub const STUB_EXTENSION: &str = "stub.sds";

/// Errors produced while generating text for one module.
///
/// Generation failures are scoped: the packaging boundary logs them and
/// proceeds with sibling modules.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A position-only parameter survived past reclassification. This is
    /// a pass-ordering defect, not a user error; emitting code for the
    /// function would produce a wrong call, so its module is aborted.
    #[error("position-only parameter survived reclassification in '{function}'")]
    InternalConsistency { function: String },
}

/// A function's parameters split by binding category, in the
/// post-classification group order.
#[derive(Debug, Default)]
pub struct ParameterPartition<'a> {
    pub implicit_self: Vec<&'a Parameter>,
    pub position_or_name: Vec<&'a Parameter>,
    pub name_only: Vec<&'a Parameter>,
    pub constant: Vec<&'a Parameter>,
    pub attribute_bound: Vec<&'a Parameter>,
}

impl<'a> ParameterPartition<'a> {
    /// Parameters that appear in a generated signature, in order.
    pub fn visible(&self) -> impl Iterator<Item = &'a Parameter> + '_ {
        self.position_or_name
            .iter()
            .copied()
            .chain(self.name_only.iter().copied())
    }
}

/// Split a function's parameters by binding category.
pub fn partition_parameters(function: &Function) -> Result<ParameterPartition<'_>, GenerationError> {
    let mut partition = ParameterPartition::default();
    for parameter in &function.parameters {
        match parameter.binding {
            ParameterBinding::ImplicitSelf => partition.implicit_self.push(parameter),
            ParameterBinding::PositionOrName => partition.position_or_name.push(parameter),
            ParameterBinding::NameOnly => partition.name_only.push(parameter),
            ParameterBinding::Constant => partition.constant.push(parameter),
            ParameterBinding::AttributeBound => partition.attribute_bound.push(parameter),
            ParameterBinding::PositionOnly => {
                return Err(GenerationError::InternalConsistency {
                    function: function.qualified_name.clone(),
                });
            }
        }
    }
    Ok(partition)
}

/// Canonicalize a default-value literal for the stub DSL.
///
/// Single-quoted strings without an embedded quote become double-quoted,
/// `True`/`False`/`None` become `true`/`false`/`null`, numeric literals
/// are normalized (integral values render without a fraction), and
/// anything else becomes a visible invalid-literal sentinel embedding the
/// original text rather than being dropped.
pub fn canonical_default(literal: &str) -> String {
    if literal.len() >= 2
        && literal.starts_with('\'')
        && literal.ends_with('\'')
        && !literal[1..literal.len() - 1].contains(['\'', '"'])
    {
        return format!("\"{}\"", &literal[1..literal.len() - 1]);
    }

    match literal {
        "True" => return "true".to_string(),
        "False" => return "false".to_string(),
        "None" => return "null".to_string(),
        _ => {}
    }

    if let Ok(value) = literal.parse::<f64>() {
        // f64 keeps integers exact up to 2^53.
        if value.is_finite() {
            if value.fract() == 0.0 && value.abs() < 9.007_199_254_740_992e15 {
                return format!("{}", value as i64);
            }
            return format!("{value}");
        }
    }

    format!("###invalid###{}###", literal.replace('#', "\\#"))
}

/// Path of a generated module file: dots become directory separators and
/// the final segment gets the backend's extension.
pub fn module_file_path(module_name: &str, extension: &str) -> PathBuf {
    let mut path = PathBuf::new();
    let mut segments = module_name.split(SEPARATOR).peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_some() {
            path.push(segment);
        } else {
            path.push(format!("{segment}.{extension}"));
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("'abc'", "\"abc\"")]
    #[case("True", "true")]
    #[case("False", "false")]
    #[case("None", "null")]
    #[case("42", "42")]
    #[case("-7", "-7")]
    #[case("1.31e+1", "13.1")]
    #[case("0.5", "0.5")]
    #[case("'13'x", "###invalid###'13'x###")]
    #[case("inf", "###invalid###inf###")]
    fn canonical_default_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(canonical_default(input), expected);
    }

    #[test]
    fn single_quoted_string_with_embedded_quote_is_invalid() {
        assert_eq!(
            canonical_default("'it''s'"),
            "###invalid###'it''s'###"
        );
    }

    #[test]
    fn module_path_derivation() {
        assert_eq!(
            module_file_path("sklearn.linear_model", ADAPTER_EXTENSION),
            PathBuf::from("sklearn/linear_model.py")
        );
        assert_eq!(
            module_file_path("test_module", STUB_EXTENSION),
            PathBuf::from("test_module.stub.sds")
        );
    }
}
