//! Filesystem image store
//!
//! Stores uploaded images under a configured directory. Object names are a
//! fresh UUID plus the sanitized original extension, so submitted file names
//! never reach the filesystem.

use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::{ImageStorePort, ImageUpload};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Image store writing to a local directory
#[derive(Debug, Clone)]
pub struct FsImageStore {
    directory: PathBuf,
}

impl FsImageStore {
    /// Create a store rooted at the given directory
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Generate the stored object name for an upload
    fn object_name(original: &str) -> String {
        format!("{}.{}", Uuid::new_v4(), Self::sanitize_extension(original))
    }

    /// Lowercased alphanumeric extension of the original name, or "bin"
    fn sanitize_extension(original: &str) -> String {
        let ext: String = Path::new(original)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .take(8)
            .collect();
        if ext.is_empty() { "bin".to_string() } else { ext }
    }

    /// Stored names never contain path separators; anything else is not ours
    fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && !name.contains('/')
            && !name.contains('\\')
            && !name.contains("..")
    }
}

#[async_trait]
impl ImageStorePort for FsImageStore {
    #[instrument(skip(self, upload), fields(file_name = %upload.file_name))]
    async fn store(&self, upload: ImageUpload) -> Result<String, ApplicationError> {
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| ApplicationError::Internal(format!("Cannot create media dir: {e}")))?;

        let name = Self::object_name(&upload.file_name);
        let path = self.directory.join(&name);
        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(|e| ApplicationError::Internal(format!("Cannot write image: {e}")))?;

        debug!(name = %name, bytes = upload.bytes.len(), "Image stored");
        Ok(name)
    }

    #[instrument(skip(self))]
    async fn retrieve(&self, name: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
        if !Self::is_valid_name(name) {
            warn!(%name, "Rejected image name");
            return Ok(None);
        }

        match tokio::fs::read(self.directory.join(name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ApplicationError::Internal(format!(
                "Cannot read image: {e}"
            ))),
        }
    }
}
