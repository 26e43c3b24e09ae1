use crate::geometry::{Point, Rectangle};
use std::fmt;
use uuid::Uuid;

/// Opaque identity of a rocket requesting to land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RocketId(Uuid);

impl RocketId {
    /// Sentinel held by a record that has not accepted any landing yet
    pub const NIL: RocketId = RocketId(Uuid::nil());

    /// Fresh random identity
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for RocketId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for RocketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Latest reserved footprint and the rocket holding it.
///
/// The record has no locking of its own; `LandingChecker` keeps it behind
/// a mutex and is the only writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyRecord {
    footprint: Rectangle,
    holder: RocketId,
}

impl Default for OccupancyRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl OccupancyRecord {
    pub const fn new() -> Self {
        Self {
            footprint: Rectangle::EMPTY,
            holder: RocketId::NIL,
        }
    }

    pub fn footprint(&self) -> Rectangle {
        self.footprint
    }

    pub fn holder(&self) -> RocketId {
        self.holder
    }

    pub fn is_empty(&self) -> bool {
        self.footprint.is_degenerate()
    }

    /// A rocket never clashes with its own reservation.
    pub fn can_clash(&self, point: Point, rocket_id: RocketId) -> bool {
        self.footprint.contains_point(point) && rocket_id != self.holder
    }

    pub fn update(&mut self, footprint: Rectangle, rocket_id: RocketId) {
        self.footprint = footprint;
        self.holder = rocket_id;
    }
}
