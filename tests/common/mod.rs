//! Fixture builders shared by the integration tests.
//!
//! Builders produce minimal consistent trees; qualified names follow the
//! parent-prefix rule so tests can assert against exact paths.

#![allow(dead_code)]

use refit::model::{
    Annotation, Class, Function, FunctionResult, Module, Package, Parameter, ParameterBinding,
};

pub fn package(modules: Vec<Module>) -> Package {
    Package {
        name: "test_package".into(),
        distribution: "test-package".into(),
        version: "1.0.0".into(),
        modules,
        annotations: vec![],
    }
}

pub fn module(name: &str, classes: Vec<Class>, functions: Vec<Function>) -> Module {
    Module {
        name: name.into(),
        imports: vec![],
        from_imports: vec![],
        classes,
        functions,
    }
}

pub fn class(module_name: &str, name: &str, methods: Vec<Function>) -> Class {
    Class {
        name: name.into(),
        qualified_name: format!("{module_name}.{name}"),
        decorators: vec![],
        superclasses: vec![],
        attributes: vec![],
        methods,
        is_public: true,
        description: String::new(),
        docstring: String::new(),
        annotations: vec![],
        original: None,
    }
}

pub fn function(parent_path: &str, name: &str, parameters: Vec<Parameter>) -> Function {
    Function {
        name: name.into(),
        qualified_name: format!("{parent_path}.{name}"),
        decorators: vec![],
        parameters,
        results: vec![],
        is_public: true,
        is_pure: false,
        description: String::new(),
        docstring: String::new(),
        annotations: vec![],
        original: None,
    }
}

pub fn parameter(function_path: &str, name: &str, default: Option<&str>) -> Parameter {
    Parameter {
        name: name.into(),
        qualified_name: format!("{function_path}.{name}"),
        default_value: default.map(str::to_string),
        binding: ParameterBinding::PositionOrName,
        is_public: true,
        type_hint: String::new(),
        description: String::new(),
        annotations: vec![],
        boundary: None,
        original: None,
    }
}

pub fn self_parameter(function_path: &str) -> Parameter {
    let mut p = parameter(function_path, "self", None);
    p.binding = ParameterBinding::ImplicitSelf;
    p
}

pub fn result(name: &str, type_hint: &str) -> FunctionResult {
    FunctionResult {
        name: name.into(),
        type_hint: type_hint.into(),
        description: String::new(),
        annotations: vec![],
    }
}

pub fn annotated(mut p: Parameter, annotation: Annotation) -> Parameter {
    p.annotations.push(annotation);
    p
}
