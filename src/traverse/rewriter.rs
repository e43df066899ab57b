//! Copy-producing rewriting of the tree.
//!
//! The driver builds the new tree bottom-up: parameters and results before
//! functions, attributes and methods before classes, classes and functions
//! before modules, modules before the package. Each `rewrite_*` callback
//! therefore receives a node whose child lists are already rewritten.
//!
//! `enter_*` hooks run pre-order, before any child is rewritten. Passes use
//! them to capture context (the current module, the enclosing class) that
//! the bottom-up callbacks cannot see.

use crate::base::PathContext;
use crate::model::{
    Attribute, Class, Function, FunctionResult, Module, Package, Parameter,
};

/// One rewrite pass over the tree.
///
/// Returning `None` from a `rewrite_*` callback drops the node from its
/// parent's child list. `rewrite_package` runs last and doubles as the
/// finalize hook for passes that stage nodes on the side (moves).
#[allow(unused_variables)]
pub trait Rewriter {
    fn enter_module(&mut self, module: &Module) {}
    fn enter_class(&mut self, class: &Class) {}
    fn enter_function(&mut self, function: &Function) {}

    fn rewrite_parameter(&mut self, parameter: Parameter) -> Option<Parameter> {
        Some(parameter)
    }
    fn rewrite_result(&mut self, result: FunctionResult) -> Option<FunctionResult> {
        Some(result)
    }
    fn rewrite_function(&mut self, function: Function) -> Option<Function> {
        Some(function)
    }
    fn rewrite_attribute(&mut self, attribute: Attribute) -> Option<Attribute> {
        Some(attribute)
    }
    fn rewrite_class(&mut self, class: Class) -> Option<Class> {
        Some(class)
    }
    fn rewrite_module(&mut self, module: Module) -> Option<Module> {
        Some(module)
    }
    fn rewrite_package(&mut self, package: Package) -> Package {
        package
    }
}

/// Apply one rewrite pass and return the new tree.
///
/// After the pass runs, every qualified name is re-derived from the root,
/// so a pass only has to change local names (or relocate nodes) and the
/// parent-prefix invariant is restored mechanically.
pub fn rewrite<R: Rewriter>(package: &Package, pass: &mut R) -> Package {
    let mut modules = Vec::with_capacity(package.modules.len());
    for module in &package.modules {
        pass.enter_module(module);
        if let Some(rewritten) = rewrite_module(module, pass) {
            modules.push(rewritten);
        }
    }

    let candidate = Package {
        name: package.name.clone(),
        distribution: package.distribution.clone(),
        version: package.version.clone(),
        modules,
        annotations: package.annotations.clone(),
    };
    let mut result = pass.rewrite_package(candidate);
    requalify(&mut result);
    result
}

fn rewrite_module<R: Rewriter>(module: &Module, pass: &mut R) -> Option<Module> {
    let mut classes = Vec::with_capacity(module.classes.len());
    for class in &module.classes {
        pass.enter_class(class);
        if let Some(rewritten) = rewrite_class(class, pass) {
            classes.push(rewritten);
        }
    }

    let mut functions = Vec::with_capacity(module.functions.len());
    for function in &module.functions {
        pass.enter_function(function);
        if let Some(rewritten) = rewrite_function(function, pass) {
            functions.push(rewritten);
        }
    }

    pass.rewrite_module(Module {
        name: module.name.clone(),
        imports: module.imports.clone(),
        from_imports: module.from_imports.clone(),
        classes,
        functions,
    })
}

fn rewrite_class<R: Rewriter>(class: &Class, pass: &mut R) -> Option<Class> {
    let mut attributes = Vec::with_capacity(class.attributes.len());
    for attribute in &class.attributes {
        if let Some(rewritten) = pass.rewrite_attribute(attribute.clone()) {
            attributes.push(rewritten);
        }
    }

    let mut methods = Vec::with_capacity(class.methods.len());
    for method in &class.methods {
        pass.enter_function(method);
        if let Some(rewritten) = rewrite_function(method, pass) {
            methods.push(rewritten);
        }
    }

    pass.rewrite_class(Class {
        name: class.name.clone(),
        qualified_name: class.qualified_name.clone(),
        decorators: class.decorators.clone(),
        superclasses: class.superclasses.clone(),
        attributes,
        methods,
        is_public: class.is_public,
        description: class.description.clone(),
        docstring: class.docstring.clone(),
        annotations: class.annotations.clone(),
        original: class.original.clone(),
    })
}

fn rewrite_function<R: Rewriter>(function: &Function, pass: &mut R) -> Option<Function> {
    let mut parameters = Vec::with_capacity(function.parameters.len());
    for parameter in &function.parameters {
        if let Some(rewritten) = pass.rewrite_parameter(parameter.clone()) {
            parameters.push(rewritten);
        }
    }

    let mut results = Vec::with_capacity(function.results.len());
    for result in &function.results {
        if let Some(rewritten) = pass.rewrite_result(result.clone()) {
            results.push(rewritten);
        }
    }

    pass.rewrite_function(Function {
        name: function.name.clone(),
        qualified_name: function.qualified_name.clone(),
        decorators: function.decorators.clone(),
        parameters,
        results,
        is_public: function.is_public,
        is_pure: function.is_pure,
        description: function.description.clone(),
        docstring: function.docstring.clone(),
        annotations: function.annotations.clone(),
        original: function.original.clone(),
    })
}

/// Re-derive every qualified name from the root.
///
/// Original-declaration snapshots are separate values and are never
/// touched here.
pub fn requalify(package: &mut Package) {
    for module in &mut package.modules {
        let ctx = PathContext::for_module(&module.name);
        for class in &mut module.classes {
            requalify_class(class, &ctx);
        }
        for function in &mut module.functions {
            requalify_function(function, &ctx);
        }
    }
}

fn requalify_class(class: &mut Class, ctx: &PathContext) {
    class.qualified_name = ctx.qualify(&class.name);
    let class_ctx = ctx.child(&class.name);
    for attribute in &mut class.attributes {
        attribute.qualified_name = class_ctx.qualify(&attribute.name);
    }
    for method in &mut class.methods {
        requalify_function(method, &class_ctx);
    }
}

fn requalify_function(function: &mut Function, ctx: &PathContext) {
    function.qualified_name = ctx.qualify(&function.name);
    let function_ctx = ctx.child(&function.name);
    for parameter in &mut function.parameters {
        parameter.qualified_name = function_ctx.qualify(&parameter.name);
    }
}
