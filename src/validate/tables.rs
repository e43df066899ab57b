//! Fixed legality tables for the annotation validator.
//!
//! The combination table is authored symmetric: `a` listing `b` implies
//! `b` listing `a`. A unit test asserts this so an edit to one side
//! cannot silently skew pair checks.

use crate::model::AnnotationKind;

use super::DeclarationKind;

/// Node kinds an annotation may legally decorate.
pub fn allowed_targets(kind: AnnotationKind) -> &'static [DeclarationKind] {
    use DeclarationKind::*;
    match kind {
        AnnotationKind::Rename => &[
            Class,
            Method,
            GlobalFunction,
            FunctionParameter,
            ConstructorParameter,
        ],
        AnnotationKind::Unused => &[
            Package,
            Class,
            Method,
            GlobalFunction,
            FunctionParameter,
            ConstructorParameter,
        ],
        AnnotationKind::Move => &[Class, GlobalFunction],
        AnnotationKind::Constant
        | AnnotationKind::Optional
        | AnnotationKind::Required
        | AnnotationKind::Boundary
        | AnnotationKind::EnumMapping => &[FunctionParameter, ConstructorParameter],
        AnnotationKind::Attribute => &[ConstructorParameter],
        AnnotationKind::Group | AnnotationKind::CalledAfter => &[Method, GlobalFunction],
    }
}

/// Annotation kinds that may co-occur with `kind` on one node.
///
/// A kind absent from its own set (everything except CalledAfter and
/// Group) makes duplicates of that kind a combination error.
pub fn compatible_with(kind: AnnotationKind) -> &'static [AnnotationKind] {
    use AnnotationKind::*;
    match kind {
        Rename => &[
            Attribute,
            Boundary,
            CalledAfter,
            EnumMapping,
            Group,
            Move,
            Optional,
            Required,
        ],
        Move => &[CalledAfter, Group, Rename],
        Unused => &[],
        Constant => &[],
        Optional => &[Boundary, Group, Rename],
        Required => &[Boundary, EnumMapping, Group, Rename],
        Attribute => &[Boundary, EnumMapping, Rename],
        Boundary => &[Attribute, Group, Optional, Rename, Required],
        Group => &[
            Boundary,
            CalledAfter,
            EnumMapping,
            Group,
            Move,
            Optional,
            Rename,
            Required,
        ],
        CalledAfter => &[CalledAfter, Group, Move, Rename],
        EnumMapping => &[Attribute, Group, Rename, Required],
    }
}

/// Whether the unordered pair may co-occur on one node.
pub fn compatible(a: AnnotationKind, b: AnnotationKind) -> bool {
    compatible_with(a).contains(&b)
}

/// Annotation kinds a parameter referenced by a Group annotation may carry.
pub const GROUP_SAFE: [AnnotationKind; 6] = [
    AnnotationKind::Rename,
    AnnotationKind::CalledAfter,
    AnnotationKind::Group,
    AnnotationKind::Boundary,
    AnnotationKind::Optional,
    AnnotationKind::Required,
];
