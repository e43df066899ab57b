//! Stub generator scenarios: declaration-only view with canonicalized
//! default literals.

mod common;

use common::*;

use refit::codegen::generate_stub_module;
use refit::model::Annotation;
use refit::passes::run_pipeline;

#[test]
fn class_stub_lists_constructor_parameters_attributes_and_methods() {
    let ctor_path = "test_module.TestClass.__init__";
    let ctor = function(
        "test_module.TestClass",
        "__init__",
        vec![
            self_parameter(ctor_path),
            parameter(ctor_path, "p", Some("'abc'")),
        ],
    );
    let method_path = "test_module.TestClass";
    let mut method = function(method_path, "test_method", vec![
        self_parameter("test_module.TestClass.test_method"),
        parameter("test_module.TestClass.test_method", "x", None),
    ]);
    method.results.push(result("res", "str"));

    let pkg = run_pipeline(&package(vec![module(
        "test_module",
        vec![class("test_module", "TestClass", vec![ctor, method])],
        vec![],
    )]));

    let text = generate_stub_module(&pkg.modules[0]).unwrap();

    assert!(text.starts_with("package test_module\n"), "{text}");
    assert!(text.contains("class TestClass(p: Any? or \"abc\") {"), "{text}");
    assert!(text.contains("attr p: Any?"), "{text}");
    assert!(text.contains("fun test_method(x: Any?) -> res: str"), "{text}");
}

#[test]
fn multiple_results_render_bracketed() {
    let mut f = function("m", "split", vec![parameter("m.split", "data", None)]);
    f.results.push(result("train", "DataFrame"));
    f.results.push(result("test", "DataFrame"));
    let pkg = run_pipeline(&package(vec![module("m", vec![], vec![f])]));

    let text = generate_stub_module(&pkg.modules[0]).unwrap();

    assert!(
        text.contains("fun split(data: Any?) -> [train: DataFrame, test: DataFrame]"),
        "{text}"
    );
}

#[test]
fn defaults_are_canonicalized_in_stub_output() {
    let f = function(
        "m",
        "f",
        vec![
            parameter("m.f", "flag", Some("True")),
            parameter("m.f", "missing", Some("None")),
            parameter("m.f", "rate", Some("1.31e+1")),
            parameter("m.f", "broken", Some("'13'x")),
        ],
    );
    let pkg = run_pipeline(&package(vec![module("m", vec![], vec![f])]));

    let text = generate_stub_module(&pkg.modules[0]).unwrap();

    assert!(text.contains("flag: Any? or true"), "{text}");
    assert!(text.contains("missing: Any? or null"), "{text}");
    assert!(text.contains("rate: Any? or 13.1"), "{text}");
    assert!(text.contains("broken: Any? or ###invalid###'13'x###"), "{text}");
}

#[test]
fn constant_parameters_disappear_from_the_stub_surface() {
    let hidden = annotated(
        parameter("m.f", "mode", None),
        Annotation::Constant {
            default: "'auto'".into(),
        },
    );
    let f = function("m", "f", vec![parameter("m.f", "data", None), hidden]);
    let pkg = run_pipeline(&package(vec![module("m", vec![], vec![f])]));

    let text = generate_stub_module(&pkg.modules[0]).unwrap();

    assert!(text.contains("fun f(data: Any?)"), "{text}");
    assert!(!text.contains("mode"), "{text}");
}

#[test]
fn synthesized_attributes_appear_as_attr_lines() {
    let ctor_path = "m.C.__init__";
    let bound = annotated(
        parameter(ctor_path, "penalty", None),
        Annotation::Attribute {
            default: "'l2'".into(),
        },
    );
    let ctor = function("m.C", "__init__", vec![self_parameter(ctor_path), bound]);
    let pkg = run_pipeline(&package(vec![module(
        "m",
        vec![class("m", "C", vec![ctor])],
        vec![],
    )]));

    let text = generate_stub_module(&pkg.modules[0]).unwrap();

    assert!(text.contains("class C()"), "{text}");
    assert!(text.contains("attr penalty: Any?"), "{text}");
}

#[test]
fn class_without_members_renders_headline_only() {
    let pkg = run_pipeline(&package(vec![module(
        "m",
        vec![class("m", "Empty", vec![])],
        vec![],
    )]));

    let text = generate_stub_module(&pkg.modules[0]).unwrap();

    assert!(text.contains("class Empty()\n"), "{text}");
    assert!(!text.contains('{'), "{text}");
}
