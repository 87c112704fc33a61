//! API handlers for the learnhub Web API.

pub mod course;
pub mod material;
pub mod reference;

pub use course::*;
pub use material::*;
pub use reference::*;

use std::sync::Arc;
use std::time::Duration;

use crate::config::FilesConfig;
use crate::file::FileStorage;
use crate::{Database, Result};

/// Shared database handle.
pub type SharedDatabase = Arc<Database>;

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: SharedDatabase,
    /// Upload storage.
    pub storage: FileStorage,
    /// Maximum size of a single uploaded file in bytes.
    pub max_upload_size: usize,
    /// Bound on a single file write.
    pub write_timeout: Duration,
}

impl AppState {
    /// Create a new application state with default upload limits.
    pub fn new(db: SharedDatabase, storage: FileStorage) -> Self {
        let defaults = FilesConfig::default();
        Self {
            db,
            storage,
            max_upload_size: defaults.max_upload_size_bytes(),
            write_timeout: Duration::from_secs(defaults.write_timeout_secs),
        }
    }

    /// Create the application state from the files configuration.
    ///
    /// The storage directories are created if missing.
    pub fn from_config(db: SharedDatabase, files: &FilesConfig) -> Result<Self> {
        let storage = FileStorage::new(&files.storage_path)?;
        tracing::info!("File storage initialized at: {}", files.storage_path);

        Ok(Self::new(db, storage)
            .with_max_upload_size(files.max_upload_size_bytes())
            .with_write_timeout(Duration::from_secs(files.write_timeout_secs)))
    }

    /// Set the maximum size of a single uploaded file in bytes.
    pub fn with_max_upload_size(mut self, bytes: usize) -> Self {
        self.max_upload_size = bytes;
        self
    }

    /// Set the file write timeout.
    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }
}
