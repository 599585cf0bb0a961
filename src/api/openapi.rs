use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::{
    api::models::{AdminDashboardResponse, ErrorResponse},
    core::models::{Driver, Location, NewDriver, NewRider, Rider, Trip, TripRequest},
};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::list_riders,
        super::handlers::get_rider,
        super::handlers::create_rider,
        super::handlers::update_rider,
        super::handlers::delete_rider,
        super::handlers::list_drivers,
        super::handlers::get_driver,
        super::handlers::create_driver,
        super::handlers::update_driver,
        super::handlers::delete_driver,
        super::handlers::list_trips,
        super::handlers::get_trip,
        super::handlers::create_trip,
        super::handlers::update_trip,
        super::handlers::delete_trip,
        super::handlers::admin_dashboard
    ),
    components(schemas(
        Rider,
        NewRider,
        Driver,
        NewDriver,
        Trip,
        TripRequest,
        Location,
        AdminDashboardResponse,
        ErrorResponse
    )),
    modifiers(&BearerAuth),
    info(
        title = "Ride-hailing Admin API",
        description = "Riders, drivers and trips, with cached collection reads",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
