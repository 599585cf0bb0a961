pub mod api;
pub mod auth;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::api::{AppState, build_app};
pub use crate::core::errors::RideHailError;
pub use crate::core::services::ResourceService;
pub use crate::infrastructure::cache::CollectionCache;

#[cfg(test)]
mod tests; // Include integration tests
