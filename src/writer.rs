use crate::errors::{AppError, AppResult};
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Writes the rendered document to `path` and reports the retained-item
/// count to the operator log.
///
/// The file is overwritten on every run, UTF-8 encoded. There is no
/// temp-file or rename step: a crash mid-write can leave a partial file,
/// which the next scheduled run replaces.
///
/// # Errors
///
/// Returns `IoError` if the write fails; the previously written sitemap
/// is then left in whatever state the filesystem produced.
pub async fn write_sitemap(path: &Path, document: &str, item_count: usize) -> AppResult<()> {
    fs::write(path, document).await.map_err(|e| {
        AppError::IoError(format!("Failed to write sitemap {}: {}", path.display(), e))
    })?;

    info!(
        items = item_count,
        path = %path.display(),
        "Sitemap generated with recent items"
    );

    Ok(())
}
