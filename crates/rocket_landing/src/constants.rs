/// Default landing area (grid units), anchored at the origin
pub const DEFAULT_AREA_X: i64 = 0;
pub const DEFAULT_AREA_Y: i64 = 0;
pub const DEFAULT_AREA_WIDTH: i64 = 100;
pub const DEFAULT_AREA_HEIGHT: i64 = 100;

/// Safety margin around an accepted landing point
pub const DEFAULT_SEPARATION_UNITS: i32 = 1;

/// Construction error messages
pub const LANDING_AREA_SIZE_ERROR: &str = "Landing Area Height or Width is 0";
pub const LANDING_PLATFORM_SIZE_ERROR: &str = "Landing Platform Height or Width is 0";
pub const LANDING_PLATFORM_OUT_OF_AREA: &str = "Landing Platform is Out Of Area ";
pub const SEPARATION_UNITS_INVALID: &str =
    "Separation Units should be greater than zero and less than landing area size";
