//! Archive validation and extraction.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use slz_model::{ExtractError, Result};

/// Check that `path` points at a readable, well-formed zip container.
///
/// A missing or unreadable file and a malformed container are distinct
/// failures; both surface their own contract message. Validation is done by
/// parsing the container directory, not by looking at the file extension.
pub fn validate_zip(path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|_| ExtractError::NotZip)?;
    zip::ZipArchive::new(file).map_err(|_| ExtractError::WrongFormat)?;
    debug!(input = %path.display(), "input archive validated");
    Ok(())
}

/// Extract the archive into a fresh uniquely-named scratch directory and
/// return its path.
///
/// The scratch directory deliberately outlives the run; removing it is the
/// hosting service's responsibility.
pub fn extract_archive(path: &Path) -> Result<PathBuf> {
    let file = File::open(path).map_err(|_| ExtractError::NotZip)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|_| ExtractError::WrongFormat)?;

    let scratch = tempfile::Builder::new()
        .prefix("slz-extract-")
        .tempdir()
        .map_err(|e| ExtractError::Archive(format!("failed to create scratch dir: {e}")))?;
    archive
        .extract(scratch.path())
        .map_err(|e| ExtractError::Archive(e.to_string()))?;

    let root = scratch.keep();
    info!(entries = archive.len(), scratch = %root.display(), "archive extracted");
    Ok(root)
}
