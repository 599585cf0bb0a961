mod cache_tests;

use crate::api::{AppState, build_app};
use crate::auth::{Claims, JwtService};
use crate::core::errors::RideHailError;
use crate::core::models::{Driver, NewDriver, NewRider, Resource, Rider, Trip};
use crate::infrastructure::storage::{ResourceStore, in_memory::InMemoryStore};
use async_trait::async_trait;
use axum::Router;
use jsonwebtoken::{EncodingKey, Header, encode};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Notify;
use uuid::Uuid;

pub const TTL: Duration = Duration::from_secs(60);
pub const TEST_SECRET: &str = "test-secret";
pub const TEST_ISSUER: &str = "ridehail-test";
pub const TEST_AUDIENCE: &str = "ridehail-test-admin";

/// In-memory store that counts calls and can be told to fail, stall or
/// pause its `get_all`.
pub struct CountingStore<R> {
    inner: InMemoryStore<R>,
    get_all_calls: AtomicUsize,
    add_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    fail_get_all: AtomicBool,
    fetch_delay: Option<Duration>,
    fetch_started: Arc<Notify>,
    fetch_release: Option<Arc<Notify>>,
}

impl<R: Resource> CountingStore<R> {
    pub fn new() -> Self {
        CountingStore {
            inner: InMemoryStore::new(),
            get_all_calls: AtomicUsize::new(0),
            add_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            fail_get_all: AtomicBool::new(false),
            fetch_delay: None,
            fetch_started: Arc::new(Notify::new()),
            fetch_release: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    /// `get_all` reads the data, then blocks until `release` is notified.
    pub fn with_release(mut self, release: Arc<Notify>) -> Self {
        self.fetch_release = Some(release);
        self
    }

    pub fn fail_get_all(&self, fail: bool) {
        self.fail_get_all.store(fail, Ordering::SeqCst);
    }

    pub fn fetch_started(&self) -> Arc<Notify> {
        Arc::clone(&self.fetch_started)
    }

    /// Writes straight to the backing data without touching the counters.
    pub async fn seed(&self, resource: R) -> R {
        self.inner.add(resource).await.unwrap()
    }

    pub fn get_all_calls(&self) -> usize {
        self.get_all_calls.load(Ordering::SeqCst)
    }

    pub fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for CountingStore<R> {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<R>, RideHailError> {
        self.inner.get_by_id(id).await
    }

    async fn get_all(&self) -> Result<Vec<R>, RideHailError> {
        self.get_all_calls.fetch_add(1, Ordering::SeqCst);
        let result = if self.fail_get_all.load(Ordering::SeqCst) {
            Err(RideHailError::StorageError("store unavailable".to_string()))
        } else {
            self.inner.get_all().await
        };
        self.fetch_started.notify_one();
        if let Some(release) = &self.fetch_release {
            release.notified().await;
        }
        if let Some(delay) = self.fetch_delay {
            tokio::time::sleep(delay).await;
        }
        result
    }

    async fn add(&self, resource: R) -> Result<R, RideHailError> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.add(resource).await
    }

    async fn update(&self, resource: R) -> Result<(), RideHailError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.update(resource).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RideHailError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(id).await
    }
}

pub fn rider(name: &str) -> Rider {
    Rider::from_draft(NewRider {
        name: name.to_string(),
        phone_number: "0700000000".to_string(),
    })
}

pub fn new_driver(name: &str) -> NewDriver {
    NewDriver {
        name: name.to_string(),
        phone_number: "0701234567".to_string(),
        moto_plate_number: "UBE123".to_string(),
    }
}

pub fn driver(name: &str) -> Driver {
    Driver::from_draft(new_driver(name))
}

pub fn test_jwt() -> JwtService {
    JwtService::new(TEST_SECRET, TEST_ISSUER, TEST_AUDIENCE)
}

/// Signs a token the way the external identity service would.
pub fn mint_token(roles: &[&str], expires_in_secs: i64, audience: &str) -> String {
    let claims = Claims {
        sub: "test-user-id".to_string(),
        email: Some("admin@example.com".to_string()),
        roles: roles.iter().map(|r| r.to_string()).collect(),
        exp: (chrono::Utc::now().timestamp() + expires_in_secs) as usize,
        iss: TEST_ISSUER.to_string(),
        aud: audience.to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

pub struct TestStores {
    pub riders: Arc<CountingStore<Rider>>,
    pub drivers: Arc<CountingStore<Driver>>,
    pub trips: Arc<CountingStore<Trip>>,
}

pub fn create_test_state() -> (AppState, TestStores) {
    let stores = TestStores {
        riders: Arc::new(CountingStore::new()),
        drivers: Arc::new(CountingStore::new()),
        trips: Arc::new(CountingStore::new()),
    };
    let state = AppState::new(
        stores.riders.clone(),
        stores.drivers.clone(),
        stores.trips.clone(),
        TTL,
        test_jwt(),
    );
    (state, stores)
}

pub fn create_test_app() -> (Router, AppState, TestStores) {
    let (state, stores) = create_test_state();
    let app = build_app(state.clone(), Duration::from_secs(30));
    (app, state, stores)
}
