//! Name-uniqueness guard.

use async_trait::async_trait;

use super::gateway::StorageGateway;
use crate::Result;

/// Answers whether a display name is already taken within a scope.
///
/// Has no side effects. The answer can be stale by the time the caller acts on it.
#[async_trait]
pub trait NameGuard<S: Send + Sync>: Send + Sync {
    /// True iff an active resource with exactly `name` exists in `scope`.
    async fn exists(&self, name: &str, scope: &S) -> Result<bool>;
}

/// Guard backed by a storage gateway's existence query.
pub struct GatewayNameGuard<'a, G> {
    gateway: &'a G,
}

impl<'a, G> GatewayNameGuard<'a, G> {
    /// Create a guard over the given gateway.
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<'a, G: StorageGateway> NameGuard<G::Scope> for GatewayNameGuard<'a, G> {
    async fn exists(&self, name: &str, scope: &G::Scope) -> Result<bool> {
        self.gateway.exists_by_name_and_scope(name, scope).await
    }
}
