//! Original-declaration snapshot pass.
//!
//! Runs once, before any rewriting. Every class, function, and parameter
//! receives a frozen copy of its pre-rewrite identity. The reference is
//! write-once: a node that already carries a snapshot is left untouched,
//! so reapplying the pass is a no-op.

use std::sync::Arc;

use crate::model::{Class, Function, Module, OriginalDecl, OriginalParameter, Parameter};
use crate::traverse::Rewriter;

#[derive(Default)]
pub struct SnapshotPass {
    /// Name of the module currently being rewritten, captured pre-order.
    module: String,
}

impl Rewriter for SnapshotPass {
    fn enter_module(&mut self, module: &Module) {
        self.module = module.name.to_string();
    }

    fn rewrite_parameter(&mut self, mut parameter: Parameter) -> Option<Parameter> {
        if parameter.original.is_none() {
            parameter.original = Some(Arc::new(OriginalParameter {
                name: parameter.name.clone(),
                qualified_name: parameter.qualified_name.clone(),
            }));
        }
        Some(parameter)
    }

    fn rewrite_function(&mut self, mut function: Function) -> Option<Function> {
        if function.original.is_none() {
            function.original = Some(Arc::new(OriginalDecl {
                name: function.name.clone(),
                qualified_name: function.qualified_name.clone(),
                module: self.module.clone(),
            }));
        }
        Some(function)
    }

    fn rewrite_class(&mut self, mut class: Class) -> Option<Class> {
        if class.original.is_none() {
            class.original = Some(Arc::new(OriginalDecl {
                name: class.name.clone(),
                qualified_name: class.qualified_name.clone(),
                module: self.module.clone(),
            }));
        }
        Some(class)
    }
}
