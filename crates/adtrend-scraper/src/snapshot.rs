//! Raw response snapshots kept on disk for manual selector debugging.
//! Nothing in the pipeline reads them back.

use std::path::{Path, PathBuf};

use adtrend_core::Category;

use crate::error::ScraperError;

#[must_use]
pub fn snapshot_path(dir: &Path, category: Category) -> PathBuf {
    dir.join(format!("fb_ads_{category}_raw.html"))
}

/// Writes `body` to the category's snapshot file, replacing any earlier run.
///
/// # Errors
///
/// Returns [`ScraperError::Snapshot`] if the file cannot be written.
pub async fn write_snapshot(
    dir: &Path,
    category: Category,
    body: &str,
) -> Result<PathBuf, ScraperError> {
    let path = snapshot_path(dir, category);
    tokio::fs::write(&path, body)
        .await
        .map_err(|e| ScraperError::Snapshot {
            path: path.display().to_string(),
            source: e,
        })?;
    Ok(path)
}
