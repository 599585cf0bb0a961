use ridehail::{
    api::{AppState, build_app},
    auth::JwtService,
    config::CONFIG,
    core::models::{Driver, Rider, Trip},
    infrastructure::storage::{in_memory::InMemoryStore, seed::seed_demo_data},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&CONFIG.log_level)))
        .init();
    info!(config = ?*CONFIG, "starting ride-hailing admin API");

    // Initialize storage
    let riders = Arc::new(InMemoryStore::<Rider>::new());
    let drivers = Arc::new(InMemoryStore::<Driver>::new());
    let trips = Arc::new(InMemoryStore::<Trip>::new());
    if CONFIG.seed_demo_data {
        seed_demo_data(riders.as_ref(), drivers.as_ref(), trips.as_ref()).await?;
    }

    let jwt = JwtService::new(&CONFIG.jwt_secret, &CONFIG.jwt_issuer, &CONFIG.jwt_audience);
    let state = AppState::new(riders, drivers, trips, CONFIG.cache_ttl, jwt);
    let app = build_app(state, CONFIG.request_timeout);

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    info!("Swagger UI at http://{}/swagger-ui", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
