//! The ordered annotation-processing pipeline.
//!
//! Each pass is a [`Rewriter`](crate::traverse::Rewriter) that consumes the
//! previous pass's output tree and yields a fresh snapshot. Passes fold
//! annotations into the tree one concern at a time:
//!
//! 1. [`SnapshotPass`] — stamp original-declaration snapshots
//! 2. [`RenamePass`] — adopt new names, drop Rename annotations
//! 3. [`MovePass`] — relocate module-level classes/functions
//! 4. [`UnusedPass`] — drop nodes marked unused
//! 5. [`CleanupPass`] — drop modules left empty
//! 6. [`ParameterPass`] — reclassify bindings, reorder, synthesize attributes
//! 7. [`BoundaryPass`] — turn Boundary annotations into structural fields
//!
//! Validation (see [`crate::validate`]) is advisory and runs separately;
//! the pipeline itself never fails. The one fatal internal-consistency
//! condition (a position-only parameter surviving reclassification) is
//! detected at generation time.

mod boundary;
mod moves;
mod parameters;
mod rename;
mod snapshot;
mod unused;

pub use boundary::BoundaryPass;
pub use moves::MovePass;
pub use parameters::ParameterPass;
pub use rename::RenamePass;
pub use snapshot::SnapshotPass;
pub use unused::{CleanupPass, UnusedPass};

use crate::model::Package;
use crate::traverse::rewrite;

/// Run the full pipeline in its fixed order and return the final tree.
pub fn run_pipeline(package: &Package) -> Package {
    tracing::debug!(package = %package.name, "running annotation pipeline");

    let package = rewrite(package, &mut SnapshotPass::default());
    let package = rewrite(&package, &mut RenamePass);
    let package = rewrite(&package, &mut MovePass::default());
    let package = rewrite(&package, &mut UnusedPass);
    let package = rewrite(&package, &mut CleanupPass);
    let package = rewrite(&package, &mut ParameterPass::default());
    let package = rewrite(&package, &mut BoundaryPass);

    tracing::debug!(
        package = %package.name,
        modules = package.modules.len(),
        "annotation pipeline finished"
    );
    package
}
