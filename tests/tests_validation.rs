//! Validator scenarios: target legality, pairwise combinations, and the
//! grouped-parameter rule.

mod common;

use common::*;

use refit::model::{Annotation, AnnotationKind, Comparison, Limit};
use refit::validate::{ValidationError, validate_package};

fn boundary_annotation() -> Annotation {
    Annotation::Boundary {
        is_discrete: false,
        lower: Limit {
            value: 0.0,
            comparison: Comparison::LessThan,
        },
        upper: Limit {
            value: 1.0,
            comparison: Comparison::LessThanOrEqual,
        },
    }
}

#[test]
fn optional_twice_is_a_combination_error() {
    let p = annotated(
        annotated(
            parameter("m.f", "x", None),
            Annotation::Optional {
                default: "1".into(),
            },
        ),
        Annotation::Optional {
            default: "2".into(),
        },
    );
    let pkg = package(vec![module("m", vec![], vec![function("m", "f", vec![p])])]);

    let errors = validate_package(&pkg);
    assert_eq!(
        errors,
        vec![ValidationError::Combination {
            target: "m.f.x".into(),
            first: AnnotationKind::Optional,
            second: AnnotationKind::Optional,
        }]
    );
}

#[test]
fn optional_plus_constant_is_a_combination_error() {
    let p = annotated(
        annotated(
            parameter("m.f", "x", None),
            Annotation::Optional {
                default: "1".into(),
            },
        ),
        Annotation::Constant {
            default: "2".into(),
        },
    );
    let pkg = package(vec![module("m", vec![], vec![function("m", "f", vec![p])])]);

    let errors = validate_package(&pkg);
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        ValidationError::Combination { first, second, .. }
            if *first == AnnotationKind::Optional && *second == AnnotationKind::Constant
    ));
}

#[test]
fn attribute_boundary_rename_on_constructor_parameter_is_clean() {
    let ctor_path = "m.TestClass.__init__";
    let p = annotated(
        annotated(
            annotated(
                parameter(ctor_path, "x", None),
                Annotation::Attribute {
                    default: "1".into(),
                },
            ),
            boundary_annotation(),
        ),
        Annotation::Rename {
            new_name: "y".into(),
        },
    );
    let ctor = function("m.TestClass", "__init__", vec![p]);
    let pkg = package(vec![module(
        "m",
        vec![class("m", "TestClass", vec![ctor])],
        vec![],
    )]);

    assert!(validate_package(&pkg).is_empty());
}

#[test]
fn attribute_on_plain_function_parameter_is_a_target_error() {
    let p = annotated(
        parameter("m.f", "x", None),
        Annotation::Attribute {
            default: "1".into(),
        },
    );
    let pkg = package(vec![module("m", vec![], vec![function("m", "f", vec![p])])]);

    let errors = validate_package(&pkg);
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        ValidationError::Target { annotation, .. } if *annotation == AnnotationKind::Attribute
    ));
}

#[test]
fn move_on_method_is_a_target_error() {
    let mut method = function("m.C", "method", vec![]);
    method.annotations.push(Annotation::Move {
        destination: "elsewhere".into(),
    });
    let pkg = package(vec![module(
        "m",
        vec![class("m", "C", vec![method])],
        vec![],
    )]);

    let errors = validate_package(&pkg);
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        ValidationError::Target { annotation, .. } if *annotation == AnnotationKind::Move
    ));
}

#[test]
fn grouped_parameter_may_not_carry_constant() {
    let p = annotated(
        parameter("m.f", "x", None),
        Annotation::Constant {
            default: "1".into(),
        },
    );
    let mut f = function("m", "f", vec![p]);
    f.annotations.push(Annotation::Group {
        name: "options".into(),
        members: vec!["x".into()],
    });
    let pkg = package(vec![module("m", vec![], vec![f])]);

    let errors = validate_package(&pkg);
    assert!(errors.contains(&ValidationError::GroupCombination {
        target: "m.f.x".into(),
        group: "options".into(),
        annotation: AnnotationKind::Constant,
    }));
}

#[test]
fn grouped_parameter_with_safe_annotations_is_clean() {
    let p = annotated(
        annotated(parameter("m.f", "x", None), boundary_annotation()),
        Annotation::Optional {
            default: "1".into(),
        },
    );
    let mut f = function("m", "f", vec![p]);
    f.annotations.push(Annotation::Group {
        name: "options".into(),
        members: vec!["x".into()],
    });
    let pkg = package(vec![module("m", vec![], vec![f])]);

    assert!(validate_package(&pkg).is_empty());
}

#[test]
fn unused_is_legal_on_the_package_but_rename_is_not() {
    let mut pkg = package(vec![module("m", vec![], vec![function("m", "f", vec![])])]);
    pkg.annotations.push(Annotation::Unused);
    assert!(validate_package(&pkg).is_empty());

    let mut pkg = package(vec![module("m", vec![], vec![function("m", "f", vec![])])]);
    pkg.annotations.push(Annotation::Rename {
        new_name: "better_package".into(),
    });
    let errors = validate_package(&pkg);
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        ValidationError::Target { annotation, .. } if *annotation == AnnotationKind::Rename
    ));
}

#[test]
fn validation_does_not_mutate_the_tree() {
    let p = annotated(
        parameter("m.f", "x", None),
        Annotation::Attribute {
            default: "1".into(),
        },
    );
    let pkg = package(vec![module("m", vec![], vec![function("m", "f", vec![p])])]);
    let before = pkg.clone();
    let _ = validate_package(&pkg);
    assert_eq!(pkg, before);
}
