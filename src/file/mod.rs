//! Upload storage for learnhub.
//!
//! Uploaded files are written under UUID names into one directory per kind
//! and served back statically by the web layer.

mod storage;

pub use storage::{stored_file_exists, FileStorage, MATERIALS_DIR, THUMBNAILS_DIR};
