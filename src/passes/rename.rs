//! Rename pass.
//!
//! A class, function, or parameter carrying a Rename annotation adopts the
//! annotation's new name; the annotation is consumed. Qualified names of
//! the node and all its descendants are re-derived by the rewrite driver.
//!
//! When several Rename annotations sit on one node, the first in list
//! order wins deterministically; the validator reports the duplication
//! separately. A new name that is not a valid identifier is ignored.

use crate::base::{Name, is_identifier};
use crate::model::{Annotation, Class, Function, Parameter};
use crate::traverse::Rewriter;

pub struct RenamePass;

impl Rewriter for RenamePass {
    fn rewrite_parameter(&mut self, mut parameter: Parameter) -> Option<Parameter> {
        apply_rename(
            &mut parameter.name,
            &mut parameter.annotations,
            &parameter.qualified_name,
        );
        Some(parameter)
    }

    fn rewrite_function(&mut self, mut function: Function) -> Option<Function> {
        apply_rename(
            &mut function.name,
            &mut function.annotations,
            &function.qualified_name,
        );
        Some(function)
    }

    fn rewrite_class(&mut self, mut class: Class) -> Option<Class> {
        apply_rename(&mut class.name, &mut class.annotations, &class.qualified_name);
        Some(class)
    }
}

/// Consume all Rename annotations on one node, applying the first.
fn apply_rename(name: &mut Name, annotations: &mut Vec<Annotation>, at: &str) {
    let mut chosen: Option<Name> = None;
    annotations.retain(|annotation| match annotation {
        Annotation::Rename { new_name } => {
            if chosen.is_none() {
                chosen = Some(new_name.clone());
            } else {
                tracing::warn!(target = at, ignored = %new_name, "duplicate Rename, first wins");
            }
            false
        }
        _ => true,
    });

    if let Some(new_name) = chosen {
        if is_identifier(&new_name) {
            tracing::trace!(target = at, %new_name, "renamed");
            *name = new_name;
        } else {
            tracing::warn!(target = at, %new_name, "Rename target is not an identifier, kept original name");
        }
    }
}
