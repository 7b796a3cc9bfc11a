use std::path::Path;

use tokio::fs;

use crate::error::{CoreError, CoreResult};

/// Replace `path` with `contents` via a temp file in the same directory.
///
/// Readers see either the old file or the new one, never a truncated mix.
pub async fn write_atomic(path: &Path, contents: &[u8]) -> CoreResult<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if !fs::try_exists(dir).await.unwrap_or(false) {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::storage(&format!("create {}", dir.display()), &e))?;
        }
    }

    let temp_path = path.with_extension(format!("{}.tmp", uuid::Uuid::new_v4().simple()));
    fs::write(&temp_path, contents)
        .await
        .map_err(|e| CoreError::storage(&format!("write {}", temp_path.display()), &e))?;

    if let Err(e) = fs::rename(&temp_path, path).await {
        if let Err(cleanup) = fs::remove_file(&temp_path).await {
            log::warn!("Failed to remove temp file {}: {cleanup}", temp_path.display());
        }
        return Err(CoreError::storage(
            &format!("replace {}", path.display()),
            &e,
        ));
    }

    Ok(())
}
