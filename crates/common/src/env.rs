//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the database is opened.

use std::path::Path;

use tracing::info;

/// Ensure the data directory exists (SQLite files live there by default).
pub async fn ensure_data_dir(data_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(data_dir).await.is_ok() {
        return Ok(());
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    info!(%data_dir, "created data directory");
    Ok(())
}

/// Directory holding the database file for a file-backed SQLite URL.
///
/// Returns `None` for in-memory SQLite and for non-SQLite URLs.
pub fn sqlite_parent_dir(url: &str) -> Option<String> {
    let rest = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    let parent = Path::new(path).parent()?;
    let parent = parent.to_str()?;
    (!parent.is_empty()).then(|| parent.to_string())
}
