pub mod handlers;
pub mod models;
pub mod openapi;

use crate::{
    auth::{JwtService, middleware::require_admin},
    core::{
        models::{Driver, Rider, Trip},
        services::ResourceService,
    },
    infrastructure::storage::ResourceStore,
};
use axum::{Router, middleware, routing::get};
use std::{sync::Arc, time::Duration};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Shared by every handler. Each service owns its kind's collection cache.
#[derive(Clone)]
pub struct AppState {
    pub riders: Arc<ResourceService<Rider>>,
    pub drivers: Arc<ResourceService<Driver>>,
    pub trips: Arc<ResourceService<Trip>>,
    pub jwt: Arc<JwtService>,
}

impl AppState {
    pub fn new(
        riders: Arc<dyn ResourceStore<Rider>>,
        drivers: Arc<dyn ResourceStore<Driver>>,
        trips: Arc<dyn ResourceStore<Trip>>,
        cache_ttl: Duration,
        jwt: JwtService,
    ) -> Self {
        AppState {
            riders: Arc::new(ResourceService::new(riders, cache_ttl)),
            drivers: Arc::new(ResourceService::new(drivers, cache_ttl)),
            trips: Arc::new(ResourceService::new(trips, cache_ttl)),
            jwt: Arc::new(jwt),
        }
    }
}

// Define API routes
pub fn api_routes(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/admin/dashboard", get(handlers::admin_dashboard))
        .route_layer(middleware::from_fn_with_state(state.jwt.clone(), require_admin));

    Router::new()
        .route("/riders", get(handlers::list_riders).post(handlers::create_rider))
        .route(
            "/riders/{id}",
            get(handlers::get_rider)
                .put(handlers::update_rider)
                .delete(handlers::delete_rider),
        )
        .route("/drivers", get(handlers::list_drivers).post(handlers::create_driver))
        .route(
            "/drivers/{id}",
            get(handlers::get_driver)
                .put(handlers::update_driver)
                .delete(handlers::delete_driver),
        )
        .route("/trips", get(handlers::list_trips).post(handlers::create_trip))
        .route(
            "/trips/{id}",
            get(handlers::get_trip)
                .put(handlers::update_trip)
                .delete(handlers::delete_trip),
        )
        .merge(admin_routes)
        .with_state(state)
}

/// Full application: `/api` routes, health check, Swagger UI and the
/// tower-http middleware stack.
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/api", api_routes(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
