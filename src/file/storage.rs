//! Upload storage for learnhub.
//!
//! This module provides physical file storage for uploaded content:
//! - UUID-based file naming, so two uploads never collide
//! - One directory per upload kind (materials, thumbnails)

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::workflow::{FileMaterializer, UploadPayload};
use crate::{LearnError, Result};

/// Directory name for material files.
pub const MATERIALS_DIR: &str = "materials";

/// Directory name for course thumbnails.
pub const THUMBNAILS_DIR: &str = "thumbnails";

/// File storage rooted at a base directory.
///
/// ```text
/// {base_path}/
/// ├── materials/
/// │   └── ab12cd34-5678-90ab-cdef-123456789012.pdf
/// └── thumbnails/
///     └── cd90ab12-3456-7890-abcd-ef1234567890.png
/// ```
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Base directory for file storage.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new FileStorage with the given base path.
    ///
    /// The base directory and the per-kind directories are created if missing.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(base_path.join(MATERIALS_DIR))?;
        fs::create_dir_all(base_path.join(THUMBNAILS_DIR))?;

        Ok(Self { base_path })
    }

    /// Get the base path of this storage.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Directory holding material files.
    pub fn materials_dir(&self) -> PathBuf {
        self.base_path.join(MATERIALS_DIR)
    }

    /// Directory holding course thumbnails.
    pub fn thumbnails_dir(&self) -> PathBuf {
        self.base_path.join(THUMBNAILS_DIR)
    }

    /// Generate a new UUID-based stored name keeping the original extension.
    pub fn generate_stored_name(original_name: &str) -> String {
        let uuid = Uuid::new_v4();
        let ext = Self::extract_extension(original_name);
        format!("{uuid}.{ext}")
    }

    /// Extract a safe, lowercase file extension from a filename.
    ///
    /// Returns "bin" if there is no extension or it is not plain ASCII
    /// alphanumerics.
    fn extract_extension(filename: &str) -> String {
        Path::new(filename)
            .extension()
            .and_then(|s| s.to_str())
            .filter(|ext| {
                !ext.is_empty() && ext.len() <= 16 && ext.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_else(|| "bin".to_string())
    }
}

#[async_trait]
impl FileMaterializer for FileStorage {
    async fn store(&self, payload: &UploadPayload, target_dir: &Path) -> Result<String> {
        if payload.is_empty() {
            return Err(LearnError::Validation("uploaded file is empty".to_string()));
        }

        tokio::fs::create_dir_all(target_dir).await?;

        let stored_name = Self::generate_stored_name(&payload.original_filename);
        let file_path = target_dir.join(&stored_name);

        // create_new: a name clash is an error, never an overwrite
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&file_path)
            .await?;

        // Armed only once the file is ours; removes it on error or cancellation
        let partial = PartialUpload::new(file_path);
        file.write_all(&payload.bytes).await?;
        file.sync_all().await?;
        partial.keep();

        tracing::debug!(
            stored_name = %stored_name,
            size = payload.len(),
            "Stored upload"
        );

        Ok(stored_name)
    }
}

/// A freshly created upload file that is deleted on drop unless kept.
struct PartialUpload {
    path: PathBuf,
    keep: bool,
}

impl PartialUpload {
    fn new(path: PathBuf) -> Self {
        Self { path, keep: false }
    }

    fn keep(mut self) {
        self.keep = true;
    }
}

impl Drop for PartialUpload {
    fn drop(&mut self) {
        if self.keep {
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => tracing::warn!(path = ?self.path, "Removed partially written upload"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::error!(
                path = ?self.path,
                error = %e,
                "Failed to remove partially written upload"
            ),
        }
    }
}

/// Whether a stored file is present in `dir`.
pub fn stored_file_exists(dir: &Path, stored_name: &str) -> bool {
    dir.join(stored_name).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStorage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_new_creates_kind_dirs() {
        let (_temp, storage) = setup();
        assert!(storage.materials_dir().is_dir());
        assert!(storage.thumbnails_dir().is_dir());
    }

    #[test]
    fn test_extract_extension() {
        assert_eq!(FileStorage::extract_extension("test.txt"), "txt");
        assert_eq!(FileStorage::extract_extension("archive.tar.gz"), "gz");
        assert_eq!(FileStorage::extract_extension("Slides.PPTX"), "pptx");
        assert_eq!(FileStorage::extract_extension("noext"), "bin");
        assert_eq!(FileStorage::extract_extension(".hidden"), "bin");
        assert_eq!(FileStorage::extract_extension("evil.p/hp"), "bin");
        assert_eq!(FileStorage::extract_extension("weird.ex e"), "bin");
    }

    #[test]
    fn test_generate_stored_name() {
        let name = FileStorage::generate_stored_name("syllabus.pdf");
        assert!(name.ends_with(".pdf"));
        assert_eq!(name.len(), 36 + 4);
    }

    #[tokio::test]
    async fn test_store_writes_payload() {
        let (_temp, storage) = setup();
        let payload = UploadPayload::new(b"Test file".to_vec(), "test.txt");

        let stored = storage
            .store(&payload, &storage.materials_dir())
            .await
            .unwrap();

        assert!(stored.ends_with(".txt"));
        let content = std::fs::read(storage.materials_dir().join(&stored)).unwrap();
        assert_eq!(content, b"Test file");
        assert!(stored_file_exists(&storage.materials_dir(), &stored));
    }

    #[tokio::test]
    async fn test_same_filename_never_overwrites() {
        let (_temp, storage) = setup();
        let first = UploadPayload::new(b"one".to_vec(), "same.txt");
        let second = UploadPayload::new(b"two".to_vec(), "same.txt");

        let a = storage.store(&first, &storage.materials_dir()).await.unwrap();
        let b = storage.store(&second, &storage.materials_dir()).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(std::fs::read(storage.materials_dir().join(a)).unwrap(), b"one");
        assert_eq!(std::fs::read(storage.materials_dir().join(b)).unwrap(), b"two");
    }

    #[tokio::test]
    async fn test_store_creates_missing_target_dir() {
        let (temp, storage) = setup();
        let target = temp.path().join("nested").join("dir");
        let payload = UploadPayload::new(b"data".to_vec(), "a.bin");

        let stored = storage.store(&payload, &target).await.unwrap();
        assert!(stored_file_exists(&target, &stored));
    }

    #[tokio::test]
    async fn test_store_rejects_empty_payload() {
        let (_temp, storage) = setup();
        let payload = UploadPayload::new(Vec::new(), "empty.txt");

        let result = storage.store(&payload, &storage.materials_dir()).await;
        assert!(matches!(result, Err(LearnError::Validation(_))));
    }

    #[tokio::test]
    async fn test_store_into_file_path_fails() {
        let (temp, storage) = setup();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, b"not a dir").unwrap();
        let payload = UploadPayload::new(b"data".to_vec(), "a.txt");

        let result = storage.store(&payload, &blocker).await;
        assert!(matches!(result, Err(LearnError::Io(_))));
    }

    #[test]
    fn test_partial_upload_removed_unless_kept() {
        let (_temp, storage) = setup();
        let dropped = storage.materials_dir().join("dropped.txt");
        let kept = storage.materials_dir().join("kept.txt");
        std::fs::write(&dropped, b"half").unwrap();
        std::fs::write(&kept, b"whole").unwrap();

        drop(PartialUpload::new(dropped.clone()));
        PartialUpload::new(kept.clone()).keep();

        assert!(!dropped.exists());
        assert_eq!(std::fs::read(&kept).unwrap(), b"whole");
    }

    #[test]
    fn test_partial_upload_already_gone() {
        let (_temp, storage) = setup();
        drop(PartialUpload::new(storage.materials_dir().join("never-written.txt")));
    }

    #[test]
    fn test_stored_file_exists_missing() {
        let (_temp, storage) = setup();
        assert!(!stored_file_exists(&storage.materials_dir(), "missing.txt"));
    }
}
