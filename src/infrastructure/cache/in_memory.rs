use crate::core::errors::RideHailError;
use crate::core::models::{Resource, ResourceKind};
use crate::infrastructure::storage::ResourceStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, trace};

/// Snapshot returned by [`CollectionCache::list`]. Cache hits hand out the
/// same allocation, never a copy.
pub type Snapshot<R> = Arc<Vec<R>>;

struct CacheEntry<R> {
    snapshot: Snapshot<R>,
    filled_at: Instant,
}

impl<R> CacheEntry<R> {
    fn is_fresh(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.filled_at) < ttl
    }
}

struct Slot<R> {
    entry: Option<CacheEntry<R>>,
    /// Bumped by every invalidation. A fill only lands if the generation it
    /// started under is still current.
    generation: u64,
}

/// Read-through, single-slot cache in front of one resource kind's
/// `get_all`.
///
/// * `list` serves the cached snapshot while it is younger than the TTL and
///   otherwise refills it from the store. Concurrent misses coalesce: one
///   caller fetches, the rest wait on `fill_gate` and pick up its result.
/// * `invalidate` clears the slot. Once it returns, no later `list` can
///   observe data fetched before it, even if that fetch was still in flight.
/// * A failing fetch leaves the slot untouched and hands the error back
///   unchanged.
pub struct CollectionCache<R> {
    kind: ResourceKind,
    store: Arc<dyn ResourceStore<R>>,
    ttl: Duration,
    slot: RwLock<Slot<R>>,
    fill_gate: Mutex<()>,
}

impl<R: Resource> CollectionCache<R> {
    pub fn new(store: Arc<dyn ResourceStore<R>>, ttl: Duration) -> Self {
        CollectionCache {
            kind: R::KIND,
            store,
            ttl,
            slot: RwLock::new(Slot {
                entry: None,
                generation: 0,
            }),
            fill_gate: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &'static str {
        self.kind.cache_key()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn list(&self) -> Result<Snapshot<R>, RideHailError> {
        if let Some(snapshot) = self.fresh_snapshot().await {
            debug!(key = self.key(), "cache hit");
            return Ok(snapshot);
        }

        let _gate = self.fill_gate.lock().await;

        // Another caller may have filled the slot while we queued.
        if let Some(snapshot) = self.fresh_snapshot().await {
            debug!(key = self.key(), "cache filled by concurrent request");
            return Ok(snapshot);
        }

        let generation = self.slot.read().await.generation;
        debug!(key = self.key(), "cache miss, fetching from store");
        let snapshot: Snapshot<R> = Arc::new(self.store.get_all().await?);

        let mut slot = self.slot.write().await;
        if slot.generation == generation {
            slot.entry = Some(CacheEntry {
                snapshot: Arc::clone(&snapshot),
                filled_at: Instant::now(),
            });
            debug!(key = self.key(), items = snapshot.len(), "cache filled");
        } else {
            debug!(key = self.key(), "discarding fill that raced an invalidation");
        }

        Ok(snapshot)
    }

    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        slot.generation = slot.generation.wrapping_add(1);
        if slot.entry.take().is_some() {
            debug!(key = self.key(), "cache invalidated");
        } else {
            trace!(key = self.key(), "invalidate on empty cache");
        }
    }

    /// True while a non-expired snapshot is held.
    pub async fn is_filled(&self) -> bool {
        self.fresh_snapshot().await.is_some()
    }

    async fn fresh_snapshot(&self) -> Option<Snapshot<R>> {
        let slot = self.slot.read().await;
        slot.entry
            .as_ref()
            .filter(|entry| entry.is_fresh(self.ttl, Instant::now()))
            .map(|entry| Arc::clone(&entry.snapshot))
    }
}
