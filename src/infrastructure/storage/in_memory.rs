use crate::core::errors::RideHailError;
use crate::core::models::Resource;
use crate::infrastructure::storage::ResourceStore;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Insertion-ordered, process-local store for one resource kind.
#[derive(Clone)]
pub struct InMemoryStore<R> {
    items: Arc<RwLock<Vec<R>>>,
}

impl<R: Resource> InMemoryStore<R> {
    pub fn new() -> Self {
        InMemoryStore {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl<R: Resource> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for InMemoryStore<R> {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<R>, RideHailError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|r| r.id() == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<R>, RideHailError> {
        let items = self.items.read().await;
        Ok(items.clone())
    }

    async fn add(&self, resource: R) -> Result<R, RideHailError> {
        let mut items = self.items.write().await;
        if items.iter().any(|r| r.id() == resource.id()) {
            return Err(RideHailError::StorageError(format!(
                "{} {} already exists",
                R::KIND,
                resource.id()
            )));
        }
        items.push(resource.clone());
        Ok(resource)
    }

    async fn update(&self, resource: R) -> Result<(), RideHailError> {
        let mut items = self.items.write().await;
        let id = resource.id();
        let slot = items
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| R::KIND.not_found(id))?;
        *slot = resource;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RideHailError> {
        let mut items = self.items.write().await;
        items.retain(|r| r.id() != id);
        Ok(())
    }
}
