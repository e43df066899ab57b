//! Boundary attachment pass.
//!
//! A Boundary annotation on a parameter or attribute becomes the node's
//! structural `boundary` field, replacing any previous value; from here on
//! the range is part of the declaration, not an annotation. All Boundary
//! annotations are consumed; with several on one node the first in list
//! order wins.

use crate::model::{Annotation, Attribute, Boundary, Parameter};
use crate::traverse::Rewriter;

pub struct BoundaryPass;

impl Rewriter for BoundaryPass {
    fn rewrite_parameter(&mut self, mut parameter: Parameter) -> Option<Parameter> {
        if let Some(boundary) = take_boundary(&mut parameter.annotations, &parameter.qualified_name)
        {
            parameter.boundary = Some(boundary);
        }
        Some(parameter)
    }

    fn rewrite_attribute(&mut self, mut attribute: Attribute) -> Option<Attribute> {
        if let Some(boundary) = take_boundary(&mut attribute.annotations, &attribute.qualified_name)
        {
            attribute.boundary = Some(boundary);
        }
        Some(attribute)
    }
}

fn take_boundary(annotations: &mut Vec<Annotation>, at: &str) -> Option<Boundary> {
    let mut found: Option<Boundary> = None;
    annotations.retain(|annotation| match annotation {
        Annotation::Boundary {
            is_discrete,
            lower,
            upper,
        } => {
            if found.is_none() {
                found = Some(Boundary {
                    is_discrete: *is_discrete,
                    lower: *lower,
                    upper: *upper,
                });
            } else {
                tracing::warn!(target = at, "duplicate Boundary, first wins");
            }
            false
        }
        _ => true,
    });
    found
}
