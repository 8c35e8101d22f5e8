use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::domain::{
    common::{UploadConfig, entities::app_errors::CoreError, generate_uuid_v7},
    recipe::{entities::UploadedImage, ports::UploadStoragePort},
};

/// Keeps uploaded images in a directory on local disk.
#[derive(Debug, Clone)]
pub struct LocalUploadStorage {
    directory: PathBuf,
}

impl LocalUploadStorage {
    pub async fn new(config: &UploadConfig) -> Result<Self, CoreError> {
        tokio::fs::create_dir_all(&config.directory)
            .await
            .map_err(|e| {
                error!(
                    "Failed to create upload directory {}: {}",
                    config.directory.display(),
                    e
                );
                CoreError::StorageError(e.to_string())
            })?;

        Ok(Self {
            directory: config.directory.clone(),
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

/// File name safe to join onto the upload directory, unique per upload.
fn stored_file_name(original: &str) -> String {
    let base = Path::new(original)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    let sanitized: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    let sanitized = sanitized.trim_start_matches('.');

    if sanitized.is_empty() {
        generate_uuid_v7().to_string()
    } else {
        format!("{}-{}", generate_uuid_v7(), sanitized)
    }
}

impl UploadStoragePort for LocalUploadStorage {
    async fn store(&self, image: UploadedImage) -> Result<PathBuf, CoreError> {
        let path = self.directory.join(stored_file_name(&image.file_name));

        tokio::fs::write(&path, &image.data).await.map_err(|e| {
            error!("Failed to write upload {}: {}", path.display(), e);
            CoreError::StorageError(e.to_string())
        })?;

        debug!(path = %path.display(), "Stored upload");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    #[test]
    fn test_stored_file_name_drops_directories() {
        let name = stored_file_name("../../etc/pass wd.jpg");
        assert!(name.ends_with("-passwd.jpg"));
        assert!(!name.contains('/'));

        let name = stored_file_name("..");
        assert!(!name.contains('.'));
    }

    #[tokio::test]
    async fn test_store_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalUploadStorage::new(&UploadConfig {
            directory: dir.path().join("uploads"),
        })
        .await
        .unwrap();

        let path = storage
            .store(UploadedImage::new(
                "plate.jpg".to_string(),
                None,
                Bytes::from_static(b"jpeg"),
            ))
            .await
            .unwrap();

        assert!(path.starts_with(storage.directory()));
        assert_eq!(std::fs::read(&path).unwrap(), b"jpeg");
    }
}
