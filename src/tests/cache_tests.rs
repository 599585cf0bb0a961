use crate::core::errors::RideHailError;
use crate::core::models::{Driver, Rider};
use crate::infrastructure::cache::CollectionCache;
use crate::tests::{CountingStore, TTL, driver, rider};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

fn driver_cache() -> (Arc<CountingStore<Driver>>, CollectionCache<Driver>) {
    let store = Arc::new(CountingStore::<Driver>::new());
    let cache = CollectionCache::<Driver>::new(store.clone(), TTL);
    (store, cache)
}

#[tokio::test]
async fn test_cache_key_and_ttl() {
    let (_, cache) = driver_cache();
    assert_eq!(cache.key(), "drivers_all");
    assert_eq!(cache.ttl(), TTL);
}

#[tokio::test]
async fn test_repeated_lists_fetch_once_and_share_snapshot() {
    let (store, cache) = driver_cache();
    store.seed(driver("John Doe")).await;
    store.seed(driver("Jane Smith")).await;

    let first = cache.list().await.unwrap();
    for _ in 0..5 {
        let again = cache.list().await.unwrap();
        assert!(Arc::ptr_eq(&first, &again));
    }

    assert_eq!(first.len(), 2);
    assert_eq!(first[0].name, "John Doe");
    assert_eq!(first[1].name, "Jane Smith");
    assert_eq!(store.get_all_calls(), 1);
}

#[tokio::test]
async fn test_empty_collection_is_cached() {
    let (store, cache) = driver_cache();

    assert!(cache.list().await.unwrap().is_empty());
    assert!(cache.is_filled().await);
    assert!(cache.list().await.unwrap().is_empty());
    assert_eq!(store.get_all_calls(), 1);
}

#[tokio::test]
async fn test_invalidate_forces_exactly_one_refetch() {
    let (store, cache) = driver_cache();
    cache.list().await.unwrap();

    store.seed(driver("Late Arrival")).await;
    cache.invalidate().await;
    assert!(!cache.is_filled().await);

    let refreshed = cache.list().await.unwrap();
    assert_eq!(refreshed.len(), 1);
    cache.list().await.unwrap();
    assert_eq!(store.get_all_calls(), 2);
}

#[tokio::test]
async fn test_invalidate_is_idempotent() {
    let (store, cache) = driver_cache();
    cache.invalidate().await;
    cache.invalidate().await;
    assert!(!cache.is_filled().await);

    cache.list().await.unwrap();
    cache.invalidate().await;
    cache.invalidate().await;
    cache.list().await.unwrap();
    assert_eq!(store.get_all_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_entry_expires_after_ttl() {
    let (store, cache) = driver_cache();

    cache.list().await.unwrap();
    tokio::time::advance(TTL - Duration::from_secs(1)).await;
    cache.list().await.unwrap();
    assert_eq!(store.get_all_calls(), 1);

    tokio::time::advance(Duration::from_secs(1)).await;
    assert!(!cache.is_filled().await);
    cache.list().await.unwrap();
    assert_eq!(store.get_all_calls(), 2);
    assert!(cache.is_filled().await);
}

#[tokio::test(start_paused = true)]
async fn test_custom_ttl_is_honoured() {
    let store = Arc::new(CountingStore::<Rider>::new());
    let cache = CollectionCache::<Rider>::new(store.clone(), Duration::from_secs(5));

    cache.list().await.unwrap();
    tokio::time::advance(Duration::from_secs(5)).await;
    cache.list().await.unwrap();
    assert_eq!(store.get_all_calls(), 2);
}

#[tokio::test]
async fn test_failed_fetch_is_propagated_and_not_cached() {
    let (store, cache) = driver_cache();
    store.seed(driver("John Doe")).await;
    store.fail_get_all(true);

    let err = cache.list().await.unwrap_err();
    assert_eq!(err, RideHailError::StorageError("store unavailable".to_string()));
    assert!(!cache.is_filled().await);

    store.fail_get_all(false);
    let drivers = cache.list().await.unwrap();
    assert_eq!(drivers.len(), 1);
    assert_eq!(store.get_all_calls(), 2);
}

#[tokio::test]
async fn test_failed_refill_keeps_nothing_stale() {
    let (store, cache) = driver_cache();
    cache.list().await.unwrap();
    cache.invalidate().await;

    store.fail_get_all(true);
    assert!(cache.list().await.is_err());
    assert!(!cache.is_filled().await);
    assert!(cache.list().await.is_err());
    assert_eq!(store.get_all_calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_misses_coalesce_into_one_fetch() {
    let store = Arc::new(CountingStore::<Driver>::new().with_delay(Duration::from_millis(50)));
    store.seed(driver("John Doe")).await;
    let cache = CollectionCache::<Driver>::new(store.clone(), TTL);

    let results = futures::future::join_all((0..8).map(|_| cache.list())).await;

    assert_eq!(store.get_all_calls(), 1);
    let first = results[0].as_ref().unwrap();
    for result in &results {
        assert!(Arc::ptr_eq(first, result.as_ref().unwrap()));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_misses_coalesce_across_threads() {
    let store = Arc::new(CountingStore::<Driver>::new().with_delay(Duration::from_millis(20)));
    store.seed(driver("John Doe")).await;
    let cache = Arc::new(CollectionCache::<Driver>::new(store.clone(), TTL));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.list().await })
        })
        .collect();

    for handle in futures::future::join_all(handles).await {
        assert_eq!(handle.unwrap().unwrap().len(), 1);
    }
    assert_eq!(store.get_all_calls(), 1);
}

#[tokio::test]
async fn test_fill_racing_an_invalidation_is_discarded() {
    let release = Arc::new(Notify::new());
    let store = Arc::new(CountingStore::<Rider>::new().with_release(release.clone()));
    store.seed(rider("Before")).await;
    let cache = Arc::new(CollectionCache::<Rider>::new(store.clone(), TTL));

    let started = store.fetch_started();
    let pending = tokio::spawn({
        let cache = Arc::clone(&cache);
        async move { cache.list().await }
    });

    // The fetch has already read the old data; a mutation lands now.
    started.notified().await;
    store.seed(rider("After")).await;
    cache.invalidate().await;
    release.notify_one();

    let fetched = pending.await.unwrap().unwrap();
    assert_eq!(fetched.len(), 1);
    assert!(!cache.is_filled().await);
    assert_eq!(store.get_all_calls(), 1);
}
