//! Packaging boundary: file and archive output.
//!
//! The generators are pure functions of a module; this module owns
//! writing their output to disk and bundling it into a delivered archive:
//!
//! ```text
//! package.zip
//! ├── adapter/
//! │   └── <module path>.py
//! └── stub/
//!     └── <module path>.stub.sds
//! ```
//!
//! A generation or write failure for one module is logged and collected;
//! sibling modules always proceed. The archive path generates into a
//! scoped temporary directory that is removed on all exit paths.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::codegen::{
    ADAPTER_EXTENSION, STUB_EXTENSION, generate_adapter_module, generate_stub_module,
    module_file_path,
};
use crate::model::{Module, Package};

/// Directory holding adapter modules inside the output tree.
pub const ADAPTER_DIR: &str = "adapter";
/// Directory holding stub modules inside the output tree.
pub const STUB_DIR: &str = "stub";

/// Errors that abort packaging as a whole (not per-module failures).
#[derive(Debug, Error)]
pub enum PackagingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Archive(String),

    #[error("package '{0}' has no modules to package")]
    Empty(String),
}

/// One module that failed to generate or write.
#[derive(Debug)]
pub struct ModuleFailure {
    pub module: String,
    pub reason: String,
}

/// Outcome of writing a package: which files landed, which modules
/// failed. Overall success means no failures.
#[derive(Debug, Default)]
pub struct PackagingReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<ModuleFailure>,
}

impl PackagingReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Write adapter and stub files for every module under `out_dir`.
pub fn write_package(package: &Package, out_dir: &Path) -> Result<PackagingReport, PackagingError> {
    if package.modules.is_empty() {
        return Err(PackagingError::Empty(package.name.to_string()));
    }

    let mut report = PackagingReport::default();
    for module in &package.modules {
        write_module(module, out_dir, &mut report);
    }

    tracing::debug!(
        package = %package.name,
        written = report.written.len(),
        failures = report.failures.len(),
        "package written"
    );
    Ok(report)
}

fn write_module(module: &Module, out_dir: &Path, report: &mut PackagingReport) {
    let adapter_path = out_dir
        .join(ADAPTER_DIR)
        .join(module_file_path(&module.name, ADAPTER_EXTENSION));
    let stub_path = out_dir
        .join(STUB_DIR)
        .join(module_file_path(&module.name, STUB_EXTENSION));

    let texts = generate_adapter_module(module)
        .map_err(|e| e.to_string())
        .and_then(|adapter| {
            generate_stub_module(module)
                .map(|stub| (adapter, stub))
                .map_err(|e| e.to_string())
        });

    let (adapter_text, stub_text) = match texts {
        Ok(texts) => texts,
        Err(reason) => {
            tracing::warn!(module = %module.name, %reason, "module generation failed");
            report.failures.push(ModuleFailure {
                module: module.name.to_string(),
                reason,
            });
            return;
        }
    };

    if let Err(error) = write_text(&adapter_path, &adapter_text)
        .and_then(|()| write_text(&stub_path, &stub_text))
    {
        tracing::warn!(module = %module.name, %error, "module write failed");
        report.failures.push(ModuleFailure {
            module: module.name.to_string(),
            reason: error.to_string(),
        });
        return;
    }

    report.written.push(adapter_path);
    report.written.push(stub_path);
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)
}

/// Generate the package into a temporary directory and zip it to
/// `archive_path`. The temporary tree is cleaned up on every exit path.
pub fn archive_package(
    package: &Package,
    archive_path: &Path,
) -> Result<PackagingReport, PackagingError> {
    let staging = tempfile::tempdir()?;
    let report = write_package(package, staging.path())?;

    let file = fs::File::create(archive_path)?;
    let mut archive = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    for path in &report.written {
        let relative = path
            .strip_prefix(staging.path())
            .map_err(|e| PackagingError::Archive(e.to_string()))?;
        let entry_name = relative.to_string_lossy().replace('\\', "/");
        archive
            .start_file(entry_name, options)
            .map_err(|e| PackagingError::Archive(e.to_string()))?;
        archive.write_all(fs::read_to_string(path)?.as_bytes())?;
    }

    archive
        .finish()
        .map_err(|e| PackagingError::Archive(e.to_string()))?;

    tracing::info!(
        package = %package.name,
        archive = %archive_path.display(),
        success = report.is_success(),
        "archive written"
    );
    Ok(report)
}
