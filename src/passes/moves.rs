//! Move pass.
//!
//! Module-level classes and functions carrying a Move annotation are taken
//! out of their source module and staged into per-destination buffers;
//! the destination module may not have been visited yet, or may not exist
//! at all. The `rewrite_package` finalize hook merges the buffers: staged
//! nodes are appended to an existing module of the destination name, or a
//! new empty module is synthesized.
//!
//! Methods are not movable on their own; a moved class takes its methods
//! with it atomically. Move annotations on methods are left in place for
//! the validator to report.

use indexmap::IndexMap;

use crate::base::Name;
use crate::model::{Annotation, Class, Function, Module, Package};
use crate::traverse::Rewriter;

#[derive(Default)]
pub struct MovePass {
    /// Set while rewriting a class's methods; module-level functions are
    /// rewritten after `rewrite_class` has cleared it.
    in_class: bool,
    staged_classes: IndexMap<Name, Vec<Class>>,
    staged_functions: IndexMap<Name, Vec<Function>>,
}

impl Rewriter for MovePass {
    fn enter_class(&mut self, _class: &Class) {
        self.in_class = true;
    }

    fn rewrite_class(&mut self, mut class: Class) -> Option<Class> {
        self.in_class = false;
        match take_move(&mut class.annotations, &class.qualified_name) {
            Some(destination) => {
                tracing::trace!(class = %class.qualified_name, to = %destination, "staging moved class");
                self.staged_classes.entry(destination).or_default().push(class);
                None
            }
            None => Some(class),
        }
    }

    fn rewrite_function(&mut self, mut function: Function) -> Option<Function> {
        if self.in_class {
            return Some(function);
        }
        match take_move(&mut function.annotations, &function.qualified_name) {
            Some(destination) => {
                tracing::trace!(function = %function.qualified_name, to = %destination, "staging moved function");
                self.staged_functions
                    .entry(destination)
                    .or_default()
                    .push(function);
                None
            }
            None => Some(function),
        }
    }

    fn rewrite_package(&mut self, mut package: Package) -> Package {
        for (destination, classes) in self.staged_classes.drain(..) {
            destination_module(&mut package, &destination)
                .classes
                .extend(classes);
        }
        for (destination, functions) in self.staged_functions.drain(..) {
            destination_module(&mut package, &destination)
                .functions
                .extend(functions);
        }
        package
    }
}

/// Consume all Move annotations on a module-level node, keeping the first
/// destination.
fn take_move(annotations: &mut Vec<Annotation>, at: &str) -> Option<Name> {
    let mut destination: Option<Name> = None;
    annotations.retain(|annotation| match annotation {
        Annotation::Move { destination: to } => {
            if destination.is_none() {
                destination = Some(to.clone());
            } else {
                tracing::warn!(target = at, ignored = %to, "duplicate Move, first wins");
            }
            false
        }
        _ => true,
    });
    destination
}

/// The module named `name`, synthesized empty if the package has none.
fn destination_module<'a>(package: &'a mut Package, name: &Name) -> &'a mut Module {
    let index = match package.modules.iter().position(|m| m.name == *name) {
        Some(index) => index,
        None => {
            tracing::debug!(module = %name, "synthesizing move destination module");
            package.modules.push(Module::empty(name.clone()));
            package.modules.len() - 1
        }
    };
    &mut package.modules[index]
}
