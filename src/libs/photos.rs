//! Object storage for work-log photos.
//!
//! Photos are stored under a caller-chosen key and addressed afterwards by
//! the URL the store returns. Failures collapse into a single
//! [`PhotoError::UploadFailed`]; there is no retry.

use crate::libs::data_storage::DataStorage;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PHOTO_DIR_NAME: &str = "photos";

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("photo upload failed for '{key}'")]
    UploadFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

pub trait PhotoStore {
    /// Stores `bytes` under `key` and returns a URL to retrieve them.
    fn upload(&self, key: &str, bytes: &[u8]) -> Result<String, PhotoError>;
}

/// Key for a newly attached work-log photo: `work_logs/<millis>_<file name>`.
pub fn work_log_photo_key(file_name: &str) -> String {
    format!("work_logs/{}_{}", Utc::now().timestamp_millis(), file_name)
}

/// Photo store backed by a local directory; URLs are `file://` URLs.
pub struct LocalPhotoStore {
    root: PathBuf,
}

impl LocalPhotoStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted in the application data directory.
    pub fn in_data_dir() -> anyhow::Result<Self> {
        let root = DataStorage::new().get_path(PHOTO_DIR_NAME)?;
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PhotoStore for LocalPhotoStore {
    fn upload(&self, key: &str, bytes: &[u8]) -> Result<String, PhotoError> {
        let failed = |source| PhotoError::UploadFailed { key: key.to_string(), source };

        // Keys are relative; reject anything that would escape the root.
        let relative = Path::new(key);
        if relative.is_absolute() || relative.components().any(|c| matches!(c, std::path::Component::ParentDir)) {
            return Err(failed(std::io::Error::new(std::io::ErrorKind::InvalidInput, "key must be relative")));
        }

        let target = self.root.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(failed)?;
        }
        fs::write(&target, bytes).map_err(failed)?;

        let absolute = target.canonicalize().map_err(failed)?;
        Ok(format!("file://{}", absolute.display()))
    }
}

/// Reads a local file and uploads it under a fresh work-log key.
pub fn upload_file(store: &dyn PhotoStore, path: &Path) -> Result<String, PhotoError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "photo".to_string());
    let key = work_log_photo_key(&file_name);
    let bytes = fs::read(path).map_err(|source| PhotoError::UploadFailed { key: key.clone(), source })?;
    store.upload(&key, &bytes)
}
