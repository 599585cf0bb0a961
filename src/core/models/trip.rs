use super::{Resource, ResourceKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Flat fare charged for every newly requested trip.
pub const STANDARD_FARE: f64 = 2500.0;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Location { latitude, longitude }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: Uuid,
    pub rider_id: Uuid,
    pub driver_id: Uuid,
    pub start: Location,
    pub end: Location,
    pub fare: f64,
    pub request_time: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub start_location: Location,
    pub end_location: Location,
    pub rider_id: Uuid,
}

impl Resource for Trip {
    type Draft = TripRequest;

    const KIND: ResourceKind = ResourceKind::Trip;

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_draft(request: TripRequest) -> Self {
        Trip {
            id: Uuid::new_v4(),
            rider_id: request.rider_id,
            // No dispatcher yet: every request gets a placeholder driver.
            driver_id: Uuid::new_v4(),
            start: request.start_location,
            end: request.end_location,
            fare: STANDARD_FARE,
            request_time: Utc::now(),
        }
    }
}
