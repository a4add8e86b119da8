// Local filesystem adapter - Storage roots and file moves on the host filesystem

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Application directory name under the platform roots
const APP_DIR: &str = "webclip";

/// Local filesystem storage adapter
pub struct LocalStorageAdapter {
    roots: StorageRoots,
}

impl LocalStorageAdapter {
    /// Resolve the storage roots for `platform` and make sure both exist.
    ///
    /// Explicit directories take precedence over the platform defaults.
    pub async fn ready(
        platform: Platform,
        files_dir: Option<&str>,
        temp_dir: Option<&str>,
    ) -> Result<Self, DomainError> {
        let files_dir = match files_dir {
            Some(dir) => PathBuf::from(dir),
            None => Self::default_files_dir()?,
        };
        let temp_dir = match temp_dir {
            Some(dir) => PathBuf::from(dir),
            None => Self::default_temp_dir(platform),
        };

        for dir in [&files_dir, &temp_dir] {
            fs::create_dir_all(dir).await.map_err(|e| {
                DomainError::FsFail(format!("Failed to create directory {}: {}", dir.display(), e))
            })?;
        }

        let roots = StorageRoots::new(
            files_dir.to_string_lossy().to_string(),
            temp_dir.to_string_lossy().to_string(),
        )?;
        tracing::debug!(
            "Storage ready for {}: files={}, temp={}",
            platform,
            roots.files_dir,
            roots.temp_dir
        );
        Ok(Self { roots })
    }

    /// Persistent files live under `<data dir>/webclip/files/`
    fn default_files_dir() -> Result<PathBuf, DomainError> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            DomainError::FsFail("Platform does not provide a data directory".to_string())
        })?;
        Ok(data_dir.join(APP_DIR).join("files"))
    }

    /// iOS gets a dedicated temp directory; every other platform uses the cache directory
    fn default_temp_dir(platform: Platform) -> PathBuf {
        match platform {
            Platform::Ios => std::env::temp_dir().join(APP_DIR),
            Platform::Android | Platform::Other => dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR),
        }
    }
}

#[async_trait]
impl StoragePort for LocalStorageAdapter {
    fn roots(&self) -> &StorageRoots {
        &self.roots
    }

    async fn move_file(
        &self,
        from_dir: &str,
        from_name: &str,
        to_dir: &str,
        to_name: &str,
    ) -> Result<(), DomainError> {
        let from = Path::new(from_dir).join(from_name);
        let to = Path::new(to_dir).join(to_name);

        if !self.file_exists(&from.to_string_lossy()).await? {
            return Err(DomainError::FileNotFound(from.display().to_string()));
        }

        fs::create_dir_all(to_dir)
            .await
            .map_err(|e| DomainError::FsFail(format!("Failed to create directory {}: {}", to_dir, e)))?;

        if let Err(rename_error) = fs::rename(&from, &to).await {
            // Fall back to copy + remove when the rename crosses filesystems.
            tracing::debug!("Rename failed ({}), copying instead", rename_error);
            fs::copy(&from, &to).await.map_err(|e| {
                DomainError::FsFail(format!(
                    "Failed to move file from {} to {}: {}",
                    from.display(),
                    to.display(),
                    e
                ))
            })?;
            fs::remove_file(&from).await.map_err(|e| {
                DomainError::FsFail(format!("Failed to remove {}: {}", from.display(), e))
            })?;
        }

        Ok(())
    }

    async fn file_exists(&self, file_path: &str) -> Result<bool, DomainError> {
        match fs::metadata(file_path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::FsFail(format!("Failed to stat {}: {}", file_path, e))),
        }
    }
}
