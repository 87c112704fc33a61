//! Storage gateway and create-request traits.

use async_trait::async_trait;
use validator::Validate;

use super::create::AuditStamp;
use super::upload::UploadPayload;
use crate::Result;

/// A validated-on-demand create request for one entity kind.
///
/// Structural checks come from the `Validate` derive; reference checks are
/// delegated to [`StorageGateway::resolve_references`].
pub trait Draft: Validate + Send + Sync {
    /// Uniqueness domain of the display name.
    type Scope: Send + Sync;
    /// Entity built from this draft.
    type Entity: Send + Sync;

    /// Singular kind name used in messages and logs ("course", "material").
    const KIND: &'static str;

    /// Display name checked for uniqueness.
    fn name(&self) -> &str;

    /// Scope the name must be unique in.
    fn scope(&self) -> &Self::Scope;

    /// Actor recorded in the audit fields.
    fn actor(&self) -> &str;

    /// Attached file, if any.
    fn upload(&self) -> Option<&UploadPayload>;

    /// Whether a file must be attached for this kind.
    fn requires_upload(&self) -> bool {
        false
    }

    /// Build the entity to insert.
    fn into_entity(self, id: String, stored_file: Option<String>, stamp: &AuditStamp)
        -> Self::Entity;
}

/// Persistence surface for one entity kind.
#[async_trait]
pub trait StorageGateway: Send + Sync {
    /// Create request type.
    type Request: Draft<Scope = Self::Scope, Entity = Self::Entity>;
    /// Persisted entity.
    type Entity: Send + Sync;
    /// Uniqueness scope.
    type Scope: Send + Sync;
    /// Listing discriminator within a scope.
    type Kind: Send + Sync;

    /// Check that every parent the draft points at exists.
    ///
    /// Returns `LearnError::NotFound` naming the first missing reference.
    async fn resolve_references(&self, draft: &Self::Request) -> Result<()>;

    /// Insert a new entity.
    async fn insert(&self, entity: &Self::Entity) -> Result<()>;

    /// Find the active entity with exactly this name in the scope.
    async fn find_by_name_and_scope(
        &self,
        name: &str,
        scope: &Self::Scope,
    ) -> Result<Option<Self::Entity>>;

    /// Whether an active entity with exactly this name exists in the scope.
    async fn exists_by_name_and_scope(&self, name: &str, scope: &Self::Scope) -> Result<bool> {
        Ok(self.find_by_name_and_scope(name, scope).await?.is_some())
    }

    /// List active entities of one kind within a scope.
    async fn list_by_scope_and_kind(
        &self,
        scope: &Self::Scope,
        kind: &Self::Kind,
    ) -> Result<Vec<Self::Entity>>;
}
