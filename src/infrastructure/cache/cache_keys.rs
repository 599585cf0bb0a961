pub const RIDERS_ALL: &str = "riders_all";

pub const DRIVERS_ALL: &str = "drivers_all";

pub const TRIPS_ALL: &str = "trips_all";
