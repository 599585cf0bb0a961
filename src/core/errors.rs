use serde::Serialize;
use thiserror::Error;

use crate::core::models::ResourceKind;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Error, Debug, Serialize, Clone, PartialEq)]
pub enum RideHailError {
    #[error("Rider {0} not found")]
    RiderNotFound(String),
    #[error("Driver {0} not found")]
    DriverNotFound(String),
    #[error("Trip {0} not found")]
    TripNotFound(String),
    /// Path identifier and payload identifier disagree on an update
    #[error("{0} ID mismatch")]
    IdMismatch(ResourceKind),
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl RideHailError {
    pub fn invalid_input(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        RideHailError::InvalidInput(field.to_string(), FieldError::new(field, title, description))
    }

    /// True for failures the caller caused; used to pick the log level.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            RideHailError::StorageError(_) | RideHailError::InternalServerError(_)
        )
    }
}
