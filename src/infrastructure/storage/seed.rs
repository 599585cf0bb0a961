use crate::core::errors::RideHailError;
use crate::core::models::{Driver, Location, Rider, Trip};
use crate::infrastructure::storage::ResourceStore;
use chrono::{TimeZone, Utc};
use tracing::info;
use uuid::Uuid;

const SEED_TRIP_ID: Uuid = Uuid::from_u128(0x11111111_1111_1111_1111_111111111111);
const SEED_RIDER_ID: Uuid = Uuid::from_u128(0x22222222_2222_2222_2222_222222222222);
const SEED_DRIVER_ID: Uuid = Uuid::from_u128(0x33333333_3333_3333_3333_333333333333);

/// Loads one rider, one driver and a trip between them. Records that already
/// exist are left alone, so calling this twice is harmless.
pub async fn seed_demo_data(
    riders: &dyn ResourceStore<Rider>,
    drivers: &dyn ResourceStore<Driver>,
    trips: &dyn ResourceStore<Trip>,
) -> Result<(), RideHailError> {
    if riders.get_by_id(SEED_RIDER_ID).await?.is_none() {
        riders
            .add(Rider {
                id: SEED_RIDER_ID,
                name: "Test Rider".to_string(),
                phone_number: "1234567890".to_string(),
            })
            .await?;
    }

    if drivers.get_by_id(SEED_DRIVER_ID).await?.is_none() {
        drivers
            .add(Driver {
                id: SEED_DRIVER_ID,
                name: "Test Driver".to_string(),
                phone_number: "0987654321".to_string(),
                moto_plate_number: "RAA123A".to_string(),
            })
            .await?;
    }

    if trips.get_by_id(SEED_TRIP_ID).await?.is_none() {
        let request_time = Utc
            .with_ymd_and_hms(2025, 10, 22, 18, 19, 43)
            .single()
            .ok_or_else(|| RideHailError::InternalServerError("invalid seed timestamp".to_string()))?;
        trips
            .add(Trip {
                id: SEED_TRIP_ID,
                rider_id: SEED_RIDER_ID,
                driver_id: SEED_DRIVER_ID,
                start: Location::new(-1.94995, 30.05885),
                end: Location::new(-1.95765, 30.09123),
                fare: 1500.0,
                request_time,
            })
            .await?;
    }

    info!("demo data seeded");
    Ok(())
}
