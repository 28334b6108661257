//! Idempotent file writer
//!
//! Write-if-absent-or-forced with parent directory creation. Intermediate
//! states are not observable by the caller: either the file existed and was
//! left alone, or the full content was written.

use std::path::Path;

use anyhow::Context;

/// Outcome of one write attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Content was persisted at the path
    Written,
    /// The file already existed and `force` was off; nothing was touched
    Skipped,
}

/// Write `content` to `path`, creating missing parent directories
///
/// An existing file is left untouched unless `force` is set. A skip is a
/// normal outcome, not an error.
///
/// # Errors
///
/// Returns an error if directory creation or the write itself fails.
pub fn write_file(path: &Path, content: &str, force: bool) -> anyhow::Result<WriteOutcome> {
    if path.exists() && !force {
        return Ok(WriteOutcome::Skipped);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory for {}", path.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(WriteOutcome::Written)
}
