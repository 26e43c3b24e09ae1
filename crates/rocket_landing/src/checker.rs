use crate::{
    constants::{
        DEFAULT_SEPARATION_UNITS, LANDING_AREA_SIZE_ERROR, LANDING_PLATFORM_OUT_OF_AREA,
        LANDING_PLATFORM_SIZE_ERROR, SEPARATION_UNITS_INVALID,
    },
    error::{ArgumentField, LandingError, Result},
    geometry::{Point, Rectangle},
    occupancy::{OccupancyRecord, RocketId},
    status::LandingStatus,
};
use log::{debug, trace};
use std::sync::Mutex;

/// Geometry a checker is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingSettings {
    pub landing_area: Rectangle,
    pub landing_platform: Rectangle,
    pub separation_units: i32,
}

impl Default for LandingSettings {
    fn default() -> Self {
        Self {
            landing_area: Rectangle::default_landing_area(),
            landing_platform: Rectangle::new(5, 5, 10, 10),
            separation_units: DEFAULT_SEPARATION_UNITS,
        }
    }
}

/// Answers landing requests for one platform.
///
/// Every checker owns its own lock and occupancy record, so independent
/// checkers never contend with each other. Share one checker between
/// threads by reference or through an `Arc`.
#[derive(Debug)]
pub struct LandingChecker {
    landing_area: Rectangle,
    landing_platform: Rectangle,
    separation_units: i32,
    separation_diameter: i64,
    occupancy: Mutex<OccupancyRecord>,
}

impl LandingChecker {
    /// Platform inside the default 100x100 area with one unit of separation.
    pub fn new(landing_platform: Rectangle) -> Result<Self> {
        Self::with_separation(landing_platform, DEFAULT_SEPARATION_UNITS)
    }

    pub fn with_separation(landing_platform: Rectangle, separation_units: i32) -> Result<Self> {
        Self::with_area(
            Rectangle::default_landing_area(),
            landing_platform,
            separation_units,
        )
    }

    /// Validates the geometry and builds a checker with an empty record.
    ///
    /// Checks run in a fixed order and the first violation is returned:
    /// area size, platform size, platform inside area, separation units.
    pub fn with_area(
        landing_area: Rectangle,
        landing_platform: Rectangle,
        separation_units: i32,
    ) -> Result<Self> {
        validate(&landing_area, &landing_platform, separation_units)?;

        let checker = Self {
            landing_area,
            landing_platform,
            separation_units,
            separation_diameter: i64::from(separation_units) * 2 + 1,
            occupancy: Mutex::new(OccupancyRecord::new()),
        };
        debug!(
            "Landing checker ready: area {}, platform {}, separation {}",
            checker.landing_area, checker.landing_platform, checker.separation_units
        );
        Ok(checker)
    }

    pub fn from_settings(settings: &LandingSettings) -> Result<Self> {
        Self::with_area(
            settings.landing_area,
            settings.landing_platform,
            settings.separation_units,
        )
    }

    pub fn landing_area(&self) -> Rectangle {
        self.landing_area
    }

    pub fn landing_platform(&self) -> Rectangle {
        self.landing_platform
    }

    pub fn separation_units(&self) -> i32 {
        self.separation_units
    }

    pub fn separation_diameter(&self) -> i64 {
        self.separation_diameter
    }

    /// Snapshot of the current reservation
    pub fn reservation(&self) -> OccupancyRecord {
        *self.occupancy.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Decides whether `rocket_id` may land at `point`.
    ///
    /// Points off the platform are rejected without taking the lock. For
    /// points on the platform the clash check and the reservation update
    /// happen under a single guard.
    pub fn check_landing_availability(&self, point: Point, rocket_id: RocketId) -> LandingStatus {
        if !self.landing_platform.contains_point(point) {
            trace!("Rocket {rocket_id} requested {point}: out of platform");
            return LandingStatus::OutOfPlatform;
        }

        // The record is replaced in one assignment, so a poisoned lock still
        // holds a consistent value.
        let mut record = self.occupancy.lock().unwrap_or_else(|p| p.into_inner());
        if record.can_clash(point, rocket_id) {
            trace!(
                "Rocket {rocket_id} requested {point}: clash with {} at {}",
                record.holder(),
                record.footprint()
            );
            return LandingStatus::Clash;
        }

        let footprint = Rectangle::centered_square(point, self.separation_units);
        record.update(footprint, rocket_id);
        drop(record);

        debug!("Rocket {rocket_id} cleared to land at {point}, reserved {footprint}");
        LandingStatus::OkForLanding
    }

    /// Same as [`check_landing_availability`](Self::check_landing_availability),
    /// projected to the display text.
    pub fn check_landing(&self, point: Point, rocket_id: RocketId) -> &'static str {
        self.check_landing_availability(point, rocket_id).description()
    }
}

fn validate(
    landing_area: &Rectangle,
    landing_platform: &Rectangle,
    separation_units: i32,
) -> Result<()> {
    if landing_area.is_degenerate() {
        return Err(LandingError::invalid(
            ArgumentField::LandingArea,
            LANDING_AREA_SIZE_ERROR,
        ));
    }

    if landing_platform.is_degenerate() {
        return Err(LandingError::invalid(
            ArgumentField::LandingPlatform,
            LANDING_PLATFORM_SIZE_ERROR,
        ));
    }

    if !landing_area.contains_rect(landing_platform) {
        return Err(LandingError::invalid(
            ArgumentField::LandingPlatform,
            LANDING_PLATFORM_OUT_OF_AREA,
        ));
    }

    if separation_units < 0 || i64::from(separation_units) >= landing_area.width {
        return Err(LandingError::invalid(
            ArgumentField::SeparationUnits,
            SEPARATION_UNITS_INVALID,
        ));
    }

    Ok(())
}
