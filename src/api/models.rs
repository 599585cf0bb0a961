use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::RideHailError;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AdminDashboardResponse {
    pub message: String,
}

// Error response struct
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for RideHailError to implement IntoResponse
#[derive(Debug)]
pub struct ApiError(pub RideHailError);

impl From<RideHailError> for ApiError {
    fn from(err: RideHailError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(RideHailError::invalid_input(
            "body",
            "Invalid request body",
            rejection.body_text(),
        ))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError(RideHailError::invalid_input("id", "Invalid identifier", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if self.0.is_client_error() {
            tracing::warn!(error = %self.0, "request rejected");
        } else {
            tracing::error!(error = %self.0, "request failed");
        }

        let (status, error_message) = match self.0 {
            RideHailError::RiderNotFound(id) => (StatusCode::NOT_FOUND, format!("Rider {} not found", id)),
            RideHailError::DriverNotFound(id) => (StatusCode::NOT_FOUND, format!("Driver {} not found", id)),
            RideHailError::TripNotFound(id) => (StatusCode::NOT_FOUND, format!("Trip {} not found", id)),
            RideHailError::IdMismatch(kind) => (StatusCode::BAD_REQUEST, format!("{} ID mismatch", kind)),
            RideHailError::InvalidInput(field, detail) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid input for {}: {}", field, detail.description),
            ),
            RideHailError::StorageError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Storage error: {}", msg)),
            RideHailError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            RideHailError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            RideHailError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", msg),
            ),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
