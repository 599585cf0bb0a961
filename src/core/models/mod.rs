pub mod driver;
pub mod rider;
pub mod trip;

pub use driver::{Driver, NewDriver};
pub use rider::{NewRider, Rider};
pub use trip::{Location, Trip, TripRequest};

use crate::core::errors::RideHailError;
use crate::infrastructure::cache::cache_keys;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The three independently cached collections.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Rider,
    Driver,
    Trip,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Rider, ResourceKind::Driver, ResourceKind::Trip];

    pub fn cache_key(self) -> &'static str {
        match self {
            ResourceKind::Rider => cache_keys::RIDERS_ALL,
            ResourceKind::Driver => cache_keys::DRIVERS_ALL,
            ResourceKind::Trip => cache_keys::TRIPS_ALL,
        }
    }

    /// Collection segment under `/api`.
    pub fn collection(self) -> &'static str {
        match self {
            ResourceKind::Rider => "riders",
            ResourceKind::Driver => "drivers",
            ResourceKind::Trip => "trips",
        }
    }

    pub fn not_found(self, id: Uuid) -> RideHailError {
        match self {
            ResourceKind::Rider => RideHailError::RiderNotFound(id.to_string()),
            ResourceKind::Driver => RideHailError::DriverNotFound(id.to_string()),
            ResourceKind::Trip => RideHailError::TripNotFound(id.to_string()),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceKind::Rider => "Rider",
            ResourceKind::Driver => "Driver",
            ResourceKind::Trip => "Trip",
        };
        write!(f, "{}", s)
    }
}

/// A stored entity. The cache never looks inside one; the store and the
/// services only need its identifier and a way to mint a new one from a
/// create payload.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Create payload accepted by `POST`.
    type Draft: Send + 'static;

    const KIND: ResourceKind;

    fn id(&self) -> Uuid;

    /// Builds a brand new resource with a freshly generated identifier.
    fn from_draft(draft: Self::Draft) -> Self;
}
