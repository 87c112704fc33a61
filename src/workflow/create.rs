//! The create workflow state machine.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, error, info};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use super::gateway::{Draft, StorageGateway};
use super::guard::{GatewayNameGuard, NameGuard};
use super::upload::{FileMaterializer, UploadPayload};
use crate::LearnError;

/// Who created an entity and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStamp {
    /// Acting user.
    pub actor: String,
    /// RFC 3339 UTC timestamp.
    pub at: String,
}

impl AuditStamp {
    /// Stamp the current time for `actor`.
    pub fn now(actor: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            at: Utc::now().to_rfc3339(),
        }
    }
}

/// Terminal failure states of the create workflow.
///
/// `Ok(entity)` is the `Done` state.
#[derive(Debug, Error)]
pub enum CreateError {
    /// The request is malformed or points at a missing parent.
    #[error("validation failed: {message}")]
    ValidationFailed {
        /// Summary message.
        message: String,
        /// Field-level messages, empty for request-level failures.
        fields: HashMap<String, Vec<String>>,
    },

    /// An active resource with the same name already exists in the scope.
    #[error("{kind} '{name}' already exists")]
    Rejected {
        /// Entity kind.
        kind: &'static str,
        /// Rejected display name.
        name: String,
    },

    /// The uploaded file could not be written. Nothing was inserted.
    #[error("failed to store uploaded file: {0}")]
    StorageFailed(#[source] LearnError),

    /// The storage gateway failed.
    #[error("failed to persist: {0}")]
    PersistFailed(#[source] LearnError),
}

impl CreateError {
    /// A request-level validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        CreateError::ValidationFailed {
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    /// Convert derive-based validation errors into field-level messages.
    pub fn from_validation_errors(errors: ValidationErrors) -> Self {
        let mut fields: HashMap<String, Vec<String>> = HashMap::new();

        for (field, field_errors) in errors.field_errors() {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {field}"))
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }

        CreateError::ValidationFailed {
            message: "Validation failed".to_string(),
            fields,
        }
    }
}

/// Orchestrates validation, uniqueness check, file write and insert.
pub struct CreateWorkflow<'a, G, M, N = GatewayNameGuard<'a, G>> {
    gateway: &'a G,
    materializer: &'a M,
    guard: N,
    target_dir: PathBuf,
    write_timeout: Option<Duration>,
}

impl<'a, G, M> CreateWorkflow<'a, G, M>
where
    G: StorageGateway,
    M: FileMaterializer,
{
    /// Create a workflow whose uniqueness guard queries `gateway`.
    ///
    /// Uploaded files are written into `target_dir`.
    pub fn new(gateway: &'a G, materializer: &'a M, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            gateway,
            materializer,
            guard: GatewayNameGuard::new(gateway),
            target_dir: target_dir.into(),
            write_timeout: None,
        }
    }
}

impl<'a, G, M, N> CreateWorkflow<'a, G, M, N>
where
    G: StorageGateway,
    M: FileMaterializer,
    N: NameGuard<G::Scope>,
{
    /// Replace the uniqueness guard.
    pub fn with_guard<N2>(self, guard: N2) -> CreateWorkflow<'a, G, M, N2>
    where
        N2: NameGuard<G::Scope>,
    {
        CreateWorkflow {
            gateway: self.gateway,
            materializer: self.materializer,
            guard,
            target_dir: self.target_dir,
            write_timeout: self.write_timeout,
        }
    }

    /// Bound the file write; exceeding it ends in `StorageFailed`.
    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = Some(timeout);
        self
    }

    /// Directory uploads are written into.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Run the workflow for one request.
    pub async fn create(&self, draft: G::Request) -> Result<G::Entity, CreateError> {
        let kind = <G::Request as Draft>::KIND;

        self.validate(&draft).await.inspect_err(|e| {
            debug!(kind, error = %e, "Create request failed validation");
        })?;

        let taken = self
            .guard
            .exists(draft.name(), draft.scope())
            .await
            .map_err(|e| {
                error!(kind, error = %e, "Uniqueness check failed");
                CreateError::PersistFailed(e)
            })?;

        if taken {
            info!(kind, name = draft.name(), "Rejected duplicate name");
            return Err(CreateError::Rejected {
                kind,
                name: draft.name().to_string(),
            });
        }

        // File first: a failed write must never leave a row behind
        let stored_file = match draft.upload() {
            Some(payload) => Some(self.materialize(kind, payload).await?),
            None => None,
        };

        let name = draft.name().to_string();
        let stamp = AuditStamp::now(draft.actor());
        let id = Uuid::new_v4().to_string();
        let entity = draft.into_entity(id.clone(), stored_file, &stamp);

        self.gateway.insert(&entity).await.map_err(|e| {
            error!(kind, name = %name, error = %e, "Insert failed");
            CreateError::PersistFailed(e)
        })?;

        info!(kind, name = %name, id = %id, actor = %stamp.actor, "Created");
        Ok(entity)
    }

    async fn validate(&self, draft: &G::Request) -> Result<(), CreateError> {
        draft
            .validate()
            .map_err(CreateError::from_validation_errors)?;

        match draft.upload() {
            None if draft.requires_upload() => {
                return Err(CreateError::validation("A file upload is required"));
            }
            Some(payload) if payload.is_empty() => {
                return Err(CreateError::validation("Uploaded file is empty"));
            }
            _ => {}
        }

        match self.gateway.resolve_references(draft).await {
            Ok(()) => Ok(()),
            Err(LearnError::NotFound(what)) => {
                Err(CreateError::validation(format!("{what} not found")))
            }
            Err(LearnError::Validation(message)) => Err(CreateError::validation(message)),
            Err(e) => {
                error!(error = %e, "Reference lookup failed");
                Err(CreateError::PersistFailed(e))
            }
        }
    }

    async fn materialize(
        &self,
        kind: &'static str,
        payload: &UploadPayload,
    ) -> Result<String, CreateError> {
        let store = self.materializer.store(payload, &self.target_dir);

        let result = match self.write_timeout {
            Some(limit) => match tokio::time::timeout(limit, store).await {
                Ok(result) => result,
                Err(_) => Err(LearnError::Io(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("file write exceeded {}s", limit.as_secs_f32()),
                ))),
            },
            None => store.await,
        };

        result.map_err(|e| {
            error!(
                kind,
                file = %payload.original_filename,
                dir = ?self.target_dir,
                error = %e,
                "Failed to store upload"
            );
            CreateError::StorageFailed(e)
        })
    }
}
