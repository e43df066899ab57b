//! Unused filtering and module cleanup.
//!
//! [`UnusedPass`] drops any class, function, or parameter that carries an
//! Unused annotation; siblings are unaffected. Unused on the package
//! itself retires the whole public surface: every module is dropped and
//! the annotation is consumed. [`CleanupPass`] then drops modules left
//! with neither classes nor functions. Cleanup is idempotent: running it
//! twice yields the same tree as running it once.

use crate::model::{Annotation, Class, Function, Module, Package, Parameter};
use crate::traverse::Rewriter;

pub struct UnusedPass;

impl Rewriter for UnusedPass {
    fn rewrite_parameter(&mut self, parameter: Parameter) -> Option<Parameter> {
        if is_unused(&parameter.annotations) {
            tracing::trace!(parameter = %parameter.qualified_name, "dropping unused parameter");
            return None;
        }
        Some(parameter)
    }

    fn rewrite_function(&mut self, function: Function) -> Option<Function> {
        if is_unused(&function.annotations) {
            tracing::trace!(function = %function.qualified_name, "dropping unused function");
            return None;
        }
        Some(function)
    }

    fn rewrite_class(&mut self, class: Class) -> Option<Class> {
        if is_unused(&class.annotations) {
            tracing::trace!(class = %class.qualified_name, "dropping unused class");
            return None;
        }
        Some(class)
    }

    fn rewrite_package(&mut self, mut package: Package) -> Package {
        if is_unused(&package.annotations) {
            tracing::debug!(package = %package.name, "package marked unused, dropping all modules");
            package.modules.clear();
            package
                .annotations
                .retain(|a| !matches!(a, Annotation::Unused));
        }
        package
    }
}

fn is_unused(annotations: &[Annotation]) -> bool {
    annotations.iter().any(|a| matches!(a, Annotation::Unused))
}

pub struct CleanupPass;

impl Rewriter for CleanupPass {
    fn rewrite_module(&mut self, module: Module) -> Option<Module> {
        if module.is_empty() {
            tracing::trace!(module = %module.name, "dropping empty module");
            return None;
        }
        Some(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unused_detection() {
        assert!(is_unused(&[Annotation::Unused]));
        assert!(is_unused(&[
            Annotation::Rename {
                new_name: "x".into()
            },
            Annotation::Unused,
        ]));
        assert!(!is_unused(&[Annotation::Required]));
        assert!(!is_unused(&[]));
    }
}
