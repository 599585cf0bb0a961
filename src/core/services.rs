use crate::core::errors::RideHailError;
use crate::core::models::Resource;
use crate::infrastructure::cache::CollectionCache;
use crate::infrastructure::cache::in_memory::Snapshot;
use crate::infrastructure::storage::ResourceStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

/// CRUD operations for one resource kind. Reads of the whole collection go
/// through the kind's [`CollectionCache`]; every successful mutation
/// invalidates that cache before returning, so a caller that sees the
/// mutation succeed cannot then list the old collection.
pub struct ResourceService<R: Resource> {
    store: Arc<dyn ResourceStore<R>>,
    cache: CollectionCache<R>,
}

impl<R: Resource> ResourceService<R> {
    pub fn new(store: Arc<dyn ResourceStore<R>>, cache_ttl: Duration) -> Self {
        let cache = CollectionCache::new(Arc::clone(&store), cache_ttl);
        ResourceService { store, cache }
    }

    pub fn cache(&self) -> &CollectionCache<R> {
        &self.cache
    }

    #[tracing::instrument(skip_all, fields(kind = %R::KIND))]
    pub async fn list(&self) -> Result<Snapshot<R>, RideHailError> {
        self.cache.list().await
    }

    #[tracing::instrument(skip_all, fields(kind = %R::KIND, %id))]
    pub async fn get(&self, id: Uuid) -> Result<R, RideHailError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| R::KIND.not_found(id))
    }

    #[tracing::instrument(skip_all, fields(kind = %R::KIND))]
    pub async fn create(&self, draft: R::Draft) -> Result<R, RideHailError> {
        let created = self.store.add(R::from_draft(draft)).await?;
        self.cache.invalidate().await;
        info!(id = %created.id(), "{} created", R::KIND);
        Ok(created)
    }

    #[tracing::instrument(skip_all, fields(kind = %R::KIND, %path_id))]
    pub async fn update(&self, path_id: Uuid, resource: R) -> Result<(), RideHailError> {
        if resource.id() != path_id {
            warn!(payload_id = %resource.id(), "rejecting update with mismatched id");
            return Err(RideHailError::IdMismatch(R::KIND));
        }
        self.store.update(resource).await?;
        self.cache.invalidate().await;
        info!("{} {} updated", R::KIND, path_id);
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(kind = %R::KIND, %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), RideHailError> {
        self.store.delete(id).await?;
        self.cache.invalidate().await;
        info!("{} {} deleted", R::KIND, id);
        Ok(())
    }
}
