//! Landing checks for rockets sharing a single platform.
//!
//! A [`LandingChecker`] validates the landing geometry once and then answers
//! concurrent [`check_landing_availability`](LandingChecker::check_landing_availability)
//! calls, reserving a square footprint around every accepted point so that
//! no other rocket can land inside it.

pub mod checker;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod occupancy;
pub mod status;

pub use checker::{LandingChecker, LandingSettings};
pub use constants::{
    DEFAULT_AREA_HEIGHT, DEFAULT_AREA_WIDTH, DEFAULT_AREA_X, DEFAULT_AREA_Y,
    DEFAULT_SEPARATION_UNITS,
};
pub use error::{ArgumentField, LandingError, Result};
pub use geometry::{Point, Rectangle};
pub use occupancy::{OccupancyRecord, RocketId};
pub use status::LandingStatus;
