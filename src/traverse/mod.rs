//! Generic depth-first traversal over the API tree.
//!
//! Two contracts, both pre-order enter / post-order leave over
//! Package → Module → {Class → {Attribute, Function → Parameter → Result},
//! Function → Parameter → Result}:
//!
//! - [`Visitor`] observes without producing anything; returning `false` from
//!   an `enter_*` hook skips that node's children.
//! - [`Rewriter`] produces a new tree bottom-up: each `rewrite_*` callback
//!   receives a node whose children are already rewritten and returns the
//!   replacement (or `None` to drop the node from its parent).
//!
//! After a rewriter runs, [`rewrite`] re-derives every qualified name from
//! the root so the parent-prefix invariant holds mechanically after every
//! pass.

mod observer;
mod rewriter;

pub use observer::{Visitor, walk};
pub use rewriter::{Rewriter, requalify, rewrite};
