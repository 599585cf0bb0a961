use crate::core::errors::RideHailError;
use async_trait::async_trait;
use uuid::Uuid;

/// Backing store for one resource kind. Implementations do no caching of
/// their own; every call is a fresh round trip.
#[async_trait]
pub trait ResourceStore<R>: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<R>, RideHailError>;
    async fn get_all(&self) -> Result<Vec<R>, RideHailError>;
    async fn add(&self, resource: R) -> Result<R, RideHailError>;
    /// Fails when no resource with the same identifier exists.
    async fn update(&self, resource: R) -> Result<(), RideHailError>;
    /// Idempotent: deleting an unknown identifier succeeds.
    async fn delete(&self, id: Uuid) -> Result<(), RideHailError>;
}

pub mod in_memory;
pub mod seed;
