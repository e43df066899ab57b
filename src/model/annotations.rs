//! The closed set of user annotations.
//!
//! Annotations are declarative edit directives attached to single nodes.
//! They arrive from the editing boundary as JSON (tagged by `kind`) and are
//! consumed one by one as the rewrite passes fold them into the tree.
//! Exhaustive matching over [`Annotation`] keeps every pass and the
//! validator's tables honest when a new variant is added.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base::Name;

use super::nodes::Limit;

/// A user-supplied declarative edit directive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Annotation {
    /// Give the node a new public name.
    Rename { new_name: Name },
    /// Relocate a module-level class or function to another module.
    Move { destination: Name },
    /// Drop the node from the public surface entirely.
    Unused,
    /// Bind the parameter to a fixed value and hide it.
    Constant { default: String },
    /// Make the parameter optional with the given default.
    Optional { default: String },
    /// Make the parameter required (clears any default).
    Required,
    /// Turn the constructor parameter into a class attribute.
    Attribute { default: String },
    /// Constrain the parameter to a numeric range.
    Boundary {
        is_discrete: bool,
        lower: Limit,
        upper: Limit,
    },
    /// Bundle several parameters of one function into a named group.
    Group { name: Name, members: Vec<Name> },
    /// Declare that this function may only run after another.
    CalledAfter { function: Name },
    /// Replace a string parameter with a generated enum.
    EnumMapping { name: Name, pairs: Vec<EnumPair> },
}

/// One string-value-to-instance mapping of an enum annotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnumPair {
    pub string_value: String,
    pub instance_name: Name,
}

/// Discriminant of [`Annotation`], used by the validator's tables and in
/// error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnnotationKind {
    Rename,
    Move,
    Unused,
    Constant,
    Optional,
    Required,
    Attribute,
    Boundary,
    Group,
    CalledAfter,
    EnumMapping,
}

impl AnnotationKind {
    /// All kinds, in table order.
    pub const ALL: [AnnotationKind; 11] = [
        AnnotationKind::Rename,
        AnnotationKind::Move,
        AnnotationKind::Unused,
        AnnotationKind::Constant,
        AnnotationKind::Optional,
        AnnotationKind::Required,
        AnnotationKind::Attribute,
        AnnotationKind::Boundary,
        AnnotationKind::Group,
        AnnotationKind::CalledAfter,
        AnnotationKind::EnumMapping,
    ];
}

impl Annotation {
    pub fn kind(&self) -> AnnotationKind {
        match self {
            Annotation::Rename { .. } => AnnotationKind::Rename,
            Annotation::Move { .. } => AnnotationKind::Move,
            Annotation::Unused => AnnotationKind::Unused,
            Annotation::Constant { .. } => AnnotationKind::Constant,
            Annotation::Optional { .. } => AnnotationKind::Optional,
            Annotation::Required => AnnotationKind::Required,
            Annotation::Attribute { .. } => AnnotationKind::Attribute,
            Annotation::Boundary { .. } => AnnotationKind::Boundary,
            Annotation::Group { .. } => AnnotationKind::Group,
            Annotation::CalledAfter { .. } => AnnotationKind::CalledAfter,
            Annotation::EnumMapping { .. } => AnnotationKind::EnumMapping,
        }
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnnotationKind::Rename => "Rename",
            AnnotationKind::Move => "Move",
            AnnotationKind::Unused => "Unused",
            AnnotationKind::Constant => "Constant",
            AnnotationKind::Optional => "Optional",
            AnnotationKind::Required => "Required",
            AnnotationKind::Attribute => "Attribute",
            AnnotationKind::Boundary => "Boundary",
            AnnotationKind::Group => "Group",
            AnnotationKind::CalledAfter => "CalledAfter",
            AnnotationKind::EnumMapping => "Enum",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_are_distinct() {
        let mut kinds: Vec<_> = AnnotationKind::ALL.to_vec();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), AnnotationKind::ALL.len());
    }

    #[test]
    fn annotations_deserialize_from_tagged_json() {
        let rename: Annotation =
            serde_json::from_str(r#"{ "kind": "Rename", "new_name": "fit" }"#).unwrap();
        assert_eq!(
            rename,
            Annotation::Rename {
                new_name: "fit".into()
            }
        );

        let unused: Annotation = serde_json::from_str(r#"{ "kind": "Unused" }"#).unwrap();
        assert_eq!(unused.kind(), AnnotationKind::Unused);
    }
}
