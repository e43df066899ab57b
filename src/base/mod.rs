//! Foundation types shared by every layer.
//!
//! The path separator and [`PathContext`] implement the qualified-name
//! invariant: a node's qualified name is always its parent's qualified name
//! joined with its local name.

use smol_str::SmolStr;

/// Separator between qualified-name segments.
pub const SEPARATOR: char = '.';

/// An immutable qualified-name prefix, threaded through traversals as a
/// value instead of mutable per-pass scope state.
///
/// `child` extends the path without touching the parent context, so a
/// rewrite step can hand each child its own context while keeping its own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathContext {
    prefix: String,
}

impl PathContext {
    /// The empty context, used above module level.
    pub fn root() -> Self {
        Self::default()
    }

    /// Context rooted at a module. A module's qualified name is its own
    /// (possibly dotted) name, so the prefix is taken verbatim.
    pub fn for_module(module_name: &str) -> Self {
        Self {
            prefix: module_name.to_string(),
        }
    }

    /// Extend the context by one segment.
    pub fn child(&self, name: &str) -> Self {
        Self {
            prefix: self.qualify(name),
        }
    }

    /// Qualified name of a child with local name `name` under this context.
    pub fn qualify(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            let mut qn = String::with_capacity(self.prefix.len() + 1 + name.len());
            qn.push_str(&self.prefix);
            qn.push(SEPARATOR);
            qn.push_str(name);
            qn
        }
    }

    /// The current prefix (the qualified name of the enclosing node).
    pub fn as_str(&self) -> &str {
        &self.prefix
    }
}

/// Whether `name` is a valid identifier (XID start + continue, or an
/// underscore-led name). Used to reject unusable Rename targets.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if first != '_' && !unicode_ident::is_xid_start(first) {
        return false;
    }
    chars.all(unicode_ident::is_xid_continue)
}

/// Local name type used throughout the model.
pub type Name = SmolStr;
