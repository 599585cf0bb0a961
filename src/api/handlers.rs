use crate::{
    api::{
        AppState,
        models::{AdminDashboardResponse, ApiError, ErrorResponse},
    },
    auth::Claims,
    core::models::{Driver, NewDriver, NewRider, Resource, Rider, Trip, TripRequest},
    infrastructure::cache::in_memory::Snapshot,
};
use axum::{
    Extension, Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use http::header;
use serde::Serialize;
use uuid::Uuid;

/// 201 with a `Location` pointing at the new resource.
fn created<R: Resource + Serialize>(resource: R) -> Response {
    let location = format!("/api/{}/{}", R::KIND.collection(), resource.id());
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(resource)).into_response()
}

// RIDERS

#[utoipa::path(
    get,
    path = "/api/riders",
    responses(
        (status = 200, description = "All riders", body = [Rider]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_riders(State(state): State<AppState>) -> Result<Json<Snapshot<Rider>>, ApiError> {
    Ok(Json(state.riders.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/riders/{id}",
    params(("id" = Uuid, Path, description = "ID of the rider to retrieve")),
    responses(
        (status = 200, description = "Rider retrieved successfully", body = Rider),
        (status = 404, description = "Rider not found", body = ErrorResponse)
    )
)]
pub async fn get_rider(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Rider>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.riders.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/riders",
    request_body = NewRider,
    responses(
        (status = 201, description = "Rider created successfully", body = Rider),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_rider(
    State(state): State<AppState>,
    payload: Result<Json<NewRider>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(draft) = payload?;
    Ok(created(state.riders.create(draft).await?))
}

#[utoipa::path(
    put,
    path = "/api/riders/{id}",
    request_body = Rider,
    params(("id" = Uuid, Path, description = "ID of the rider to update")),
    responses(
        (status = 204, description = "Rider updated"),
        (status = 400, description = "Rider ID mismatch or bad request", body = ErrorResponse),
        (status = 404, description = "Rider not found", body = ErrorResponse)
    )
)]
pub async fn update_rider(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<Rider>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    let Json(rider) = payload?;
    state.riders.update(id, rider).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/riders/{id}",
    params(("id" = Uuid, Path, description = "ID of the rider to delete")),
    responses((status = 204, description = "Rider deleted, or never existed"))
)]
pub async fn delete_rider(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    state.riders.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// DRIVERS

#[utoipa::path(
    get,
    path = "/api/drivers",
    responses(
        (status = 200, description = "All drivers", body = [Driver]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_drivers(State(state): State<AppState>) -> Result<Json<Snapshot<Driver>>, ApiError> {
    Ok(Json(state.drivers.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/drivers/{id}",
    params(("id" = Uuid, Path, description = "ID of the driver to retrieve")),
    responses(
        (status = 200, description = "Driver retrieved successfully", body = Driver),
        (status = 404, description = "Driver not found", body = ErrorResponse)
    )
)]
pub async fn get_driver(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Driver>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.drivers.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/drivers",
    request_body = NewDriver,
    responses(
        (status = 201, description = "Driver created successfully", body = Driver),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_driver(
    State(state): State<AppState>,
    payload: Result<Json<NewDriver>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(draft) = payload?;
    Ok(created(state.drivers.create(draft).await?))
}

#[utoipa::path(
    put,
    path = "/api/drivers/{id}",
    request_body = Driver,
    params(("id" = Uuid, Path, description = "ID of the driver to update")),
    responses(
        (status = 204, description = "Driver updated"),
        (status = 400, description = "Driver ID mismatch or bad request", body = ErrorResponse),
        (status = 404, description = "Driver not found", body = ErrorResponse)
    )
)]
pub async fn update_driver(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<Driver>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    let Json(driver) = payload?;
    state.drivers.update(id, driver).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/drivers/{id}",
    params(("id" = Uuid, Path, description = "ID of the driver to delete")),
    responses((status = 204, description = "Driver deleted, or never existed"))
)]
pub async fn delete_driver(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    state.drivers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// TRIPS

#[utoipa::path(
    get,
    path = "/api/trips",
    responses(
        (status = 200, description = "All trips", body = [Trip]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_trips(State(state): State<AppState>) -> Result<Json<Snapshot<Trip>>, ApiError> {
    Ok(Json(state.trips.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/trips/{id}",
    params(("id" = Uuid, Path, description = "ID of the trip to retrieve")),
    responses(
        (status = 200, description = "Trip retrieved successfully", body = Trip),
        (status = 404, description = "Trip not found", body = ErrorResponse)
    )
)]
pub async fn get_trip(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Trip>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.trips.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/trips",
    request_body = TripRequest,
    responses(
        (status = 201, description = "Trip requested successfully", body = Trip),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_trip(
    State(state): State<AppState>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    Ok(created(state.trips.create(request).await?))
}

#[utoipa::path(
    put,
    path = "/api/trips/{id}",
    request_body = Trip,
    params(("id" = Uuid, Path, description = "ID of the trip to update")),
    responses(
        (status = 204, description = "Trip updated"),
        (status = 400, description = "Trip ID mismatch or bad request", body = ErrorResponse),
        (status = 404, description = "Trip not found", body = ErrorResponse)
    )
)]
pub async fn update_trip(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<Trip>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    let Json(trip) = payload?;
    state.trips.update(id, trip).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/trips/{id}",
    params(("id" = Uuid, Path, description = "ID of the trip to delete")),
    responses((status = 204, description = "Trip deleted, or never existed"))
)]
pub async fn delete_trip(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    state.trips.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ADMIN

#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    responses(
        (status = 200, description = "Caller holds the Admin role", body = AdminDashboardResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn admin_dashboard(Extension(claims): Extension<Claims>) -> Json<AdminDashboardResponse> {
    tracing::info!(sub = %claims.sub, "admin dashboard accessed");
    Json(AdminDashboardResponse {
        message: "Admin OK".to_string(),
    })
}
