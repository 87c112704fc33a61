//! Duplicate-checked create-and-persist workflow.
//!
//! Courses and materials are created through the same pipeline:
//!
//! ```text
//! Validating -> CheckingUniqueness -> Rejected
//!                                  -> Persisting -> Done
//! ```
//!
//! The pipeline is assembled from three seams, each a trait so tests can
//! substitute any of them:
//! - [`StorageGateway`]: persistence for one entity kind
//! - [`NameGuard`]: "does an active resource with this name exist in this scope?"
//! - [`FileMaterializer`]: writes an uploaded payload to disk
//!
//! The uniqueness check and the insert are not one transaction. The SQLite
//! schema carries a partial unique index per kind, so a lost race surfaces as
//! [`CreateError::PersistFailed`] rather than as a duplicate row.

mod create;
mod gateway;
mod guard;
mod upload;

pub use create::{AuditStamp, CreateError, CreateWorkflow};
pub use gateway::{Draft, StorageGateway};
pub use guard::{GatewayNameGuard, NameGuard};
pub use upload::{FileMaterializer, UploadPayload};
