//! Read-only observation of the tree.

use crate::model::{
    Attribute, Class, Function, FunctionResult, Module, Package, Parameter,
};

/// Enter/leave hooks for a read-only depth-first walk.
///
/// Every `enter_*` hook returns whether to descend into the node's
/// children; `leave_*` runs regardless.
#[allow(unused_variables)]
pub trait Visitor {
    fn enter_package(&mut self, package: &Package) -> bool {
        true
    }
    fn leave_package(&mut self, package: &Package) {}

    fn enter_module(&mut self, module: &Module) -> bool {
        true
    }
    fn leave_module(&mut self, module: &Module) {}

    fn enter_class(&mut self, class: &Class) -> bool {
        true
    }
    fn leave_class(&mut self, class: &Class) {}

    fn enter_attribute(&mut self, attribute: &Attribute) -> bool {
        true
    }
    fn leave_attribute(&mut self, attribute: &Attribute) {}

    fn enter_function(&mut self, function: &Function) -> bool {
        true
    }
    fn leave_function(&mut self, function: &Function) {}

    fn enter_parameter(&mut self, parameter: &Parameter) -> bool {
        true
    }
    fn leave_parameter(&mut self, parameter: &Parameter) {}

    fn enter_result(&mut self, result: &FunctionResult) -> bool {
        true
    }
    fn leave_result(&mut self, result: &FunctionResult) {}
}

/// Drive a [`Visitor`] over a package, depth first.
pub fn walk<V: Visitor>(package: &Package, visitor: &mut V) {
    if visitor.enter_package(package) {
        for module in &package.modules {
            walk_module(module, visitor);
        }
    }
    visitor.leave_package(package);
}

fn walk_module<V: Visitor>(module: &Module, visitor: &mut V) {
    if visitor.enter_module(module) {
        for class in &module.classes {
            walk_class(class, visitor);
        }
        for function in &module.functions {
            walk_function(function, visitor);
        }
    }
    visitor.leave_module(module);
}

fn walk_class<V: Visitor>(class: &Class, visitor: &mut V) {
    if visitor.enter_class(class) {
        for attribute in &class.attributes {
            let _ = visitor.enter_attribute(attribute);
            visitor.leave_attribute(attribute);
        }
        for method in &class.methods {
            walk_function(method, visitor);
        }
    }
    visitor.leave_class(class);
}

fn walk_function<V: Visitor>(function: &Function, visitor: &mut V) {
    if visitor.enter_function(function) {
        for parameter in &function.parameters {
            let _ = visitor.enter_parameter(parameter);
            visitor.leave_parameter(parameter);
        }
        for result in &function.results {
            let _ = visitor.enter_result(result);
            visitor.leave_result(result);
        }
    }
    visitor.leave_function(function);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParameterBinding;

    fn sample_package() -> Package {
        Package {
            name: "test_package".into(),
            distribution: "test-package".into(),
            version: "1.0.0".into(),
            modules: vec![Module {
                name: "test_module".into(),
                imports: vec![],
                from_imports: vec![],
                classes: vec![Class {
                    name: "TestClass".into(),
                    qualified_name: "test_module.TestClass".into(),
                    decorators: vec![],
                    superclasses: vec![],
                    attributes: vec![],
                    methods: vec![Function {
                        name: "test_method".into(),
                        qualified_name: "test_module.TestClass.test_method".into(),
                        decorators: vec![],
                        parameters: vec![Parameter {
                            name: "x".into(),
                            qualified_name: "test_module.TestClass.test_method.x".into(),
                            default_value: None,
                            binding: ParameterBinding::PositionOrName,
                            is_public: true,
                            type_hint: String::new(),
                            description: String::new(),
                            annotations: vec![],
                            boundary: None,
                            original: None,
                        }],
                        results: vec![],
                        is_public: true,
                        is_pure: false,
                        description: String::new(),
                        docstring: String::new(),
                        annotations: vec![],
                        original: None,
                    }],
                    is_public: true,
                    description: String::new(),
                    docstring: String::new(),
                    annotations: vec![],
                    original: None,
                }],
                functions: vec![],
            }],
            annotations: vec![],
        }
    }

    #[derive(Default)]
    struct Recorder {
        entered: Vec<String>,
    }

    impl Visitor for Recorder {
        fn enter_class(&mut self, class: &Class) -> bool {
            self.entered.push(class.qualified_name.clone());
            true
        }
        fn enter_parameter(&mut self, parameter: &Parameter) -> bool {
            self.entered.push(parameter.qualified_name.clone());
            true
        }
    }

    struct ClassSkipper {
        parameters_seen: usize,
    }

    impl Visitor for ClassSkipper {
        fn enter_class(&mut self, _class: &Class) -> bool {
            false
        }
        fn enter_parameter(&mut self, _parameter: &Parameter) -> bool {
            self.parameters_seen += 1;
            true
        }
    }

    #[test]
    fn walk_visits_depth_first() {
        let mut recorder = Recorder::default();
        walk(&sample_package(), &mut recorder);
        assert_eq!(
            recorder.entered,
            vec![
                "test_module.TestClass".to_string(),
                "test_module.TestClass.test_method.x".to_string(),
            ]
        );
    }

    #[test]
    fn false_from_enter_skips_children() {
        let mut skipper = ClassSkipper { parameters_seen: 0 };
        walk(&sample_package(), &mut skipper);
        assert_eq!(skipper.parameters_seen, 0);
    }
}
