//! # refit-base
//!
//! Core library for annotation-driven API reshaping: a semantic model of a
//! third-party library's public API, an ordered pipeline of tree rewrites
//! driven by user annotations, an annotation validator, and two code
//! generation backends (forwarding adapters and declaration stubs).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! packaging → file + archive output boundary (feature "packaging")
//!   ↓
//! codegen   → adapter generator, stub generator, shared partitioning
//!   ↓
//! validate  → annotation target/combination validator (pure, advisory)
//!   ↓
//! passes    → ordered rewrite pipeline (snapshot … boundary)
//!   ↓
//! traverse  → visitor (observe) and rewriter (copy) framework
//!   ↓
//! model     → tree nodes, annotation sum type, original snapshots
//!   ↓
//! base      → primitives (path separator, PathContext, identifiers)
//! ```

// ============================================================================
// MODULES (dependency order: base → model → traverse → passes → validate →
// codegen → packaging)
// ============================================================================

/// Foundation types: path separator, PathContext, identifier checks
pub mod base;

/// API tree model: nodes, annotations, original-declaration snapshots
pub mod model;

/// Traversal framework: observer visitors and copy-producing rewriters
pub mod traverse;

/// Transformation passes: the ordered annotation-processing pipeline
pub mod passes;

/// Annotation validator: target, combination, and group checks
pub mod validate;

/// Code generators: adapter source and stub declarations
pub mod codegen;

/// Packaging boundary: per-module file output and zip archives
#[cfg(feature = "packaging")]
pub mod packaging;

// Re-export commonly needed items
pub use base::{PathContext, SEPARATOR};
pub use model::{Annotation, AnnotationKind, Package};
pub use passes::run_pipeline;
pub use validate::{ValidationError, validate_package};
