//! Uploaded file payloads and the materializer seam.

use std::path::Path;

use async_trait::async_trait;

use crate::Result;

/// A file received at the request boundary.
///
/// Never persisted directly: the materializer turns it into a stored file name
/// before the entity is built.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadPayload {
    /// Raw file content.
    pub bytes: Vec<u8>,
    /// Filename as sent by the client.
    pub original_filename: String,
}

impl UploadPayload {
    /// Create a new payload.
    pub fn new(bytes: impl Into<Vec<u8>>, original_filename: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            original_filename: original_filename.into(),
        }
    }

    /// Size of the payload in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for UploadPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadPayload")
            .field("original_filename", &self.original_filename)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Writes uploaded payloads to stable storage.
#[async_trait]
pub trait FileMaterializer: Send + Sync {
    /// Write `payload` into `target_dir` and return the stored file name.
    ///
    /// `target_dir` is created if it does not exist. The returned name is
    /// relative to `target_dir`.
    async fn store(&self, payload: &UploadPayload, target_dir: &Path) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_len() {
        let payload = UploadPayload::new(b"Test file".to_vec(), "test.txt");
        assert_eq!(payload.len(), 9);
        assert!(!payload.is_empty());
        assert!(UploadPayload::new(Vec::new(), "empty.txt").is_empty());
    }

    #[test]
    fn test_payload_debug_omits_bytes() {
        let payload = UploadPayload::new(b"secret".to_vec(), "a.txt");
        let debug = format!("{payload:?}");
        assert!(debug.contains("a.txt"));
        assert!(debug.contains("len: 6"));
        assert!(!debug.contains("secret"));
    }
}
