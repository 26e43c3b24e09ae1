use crate::constants::{DEFAULT_AREA_HEIGHT, DEFAULT_AREA_WIDTH, DEFAULT_AREA_X, DEFAULT_AREA_Y};
use std::fmt;

/// Grid coordinate requested by a rocket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle on the landing grid.
///
/// Bounds are half-open: the left and top edges belong to the rectangle,
/// the right and bottom edges (`x + width`, `y + height`) do not. A
/// rectangle with zero width or height therefore contains no point.
///
/// Coordinates are `i64` so that a footprint around any `i32` point stays
/// centred even when its margin reaches past `i32::MIN` or `i32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rectangle {
    pub const EMPTY: Rectangle = Rectangle::new(0, 0, 0, 0);

    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Default 100x100 landing area at the origin
    pub const fn default_landing_area() -> Self {
        Self::new(
            DEFAULT_AREA_X,
            DEFAULT_AREA_Y,
            DEFAULT_AREA_WIDTH,
            DEFAULT_AREA_HEIGHT,
        )
    }

    /// Square of side `2 * radius + 1` centred on `center`
    pub const fn centered_square(center: Point, radius: i32) -> Self {
        let radius = radius as i64;
        let side = radius * 2 + 1;
        Self::new(
            center.x as i64 - radius,
            center.y as i64 - radius,
            side,
            side,
        )
    }

    /// True when the rectangle covers no cell (zero or negative extent)
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    // i128 keeps `x + width` from overflowing for any i64 input
    #[inline]
    fn right(&self) -> i128 {
        i128::from(self.x) + i128::from(self.width)
    }

    #[inline]
    fn bottom(&self) -> i128 {
        i128::from(self.y) + i128::from(self.height)
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.x <= i64::from(point.x)
            && i128::from(point.x) < self.right()
            && self.y <= i64::from(point.y)
            && i128::from(point.y) < self.bottom()
    }

    pub fn contains_rect(&self, other: &Rectangle) -> bool {
        self.x <= other.x
            && other.right() <= self.right()
            && self.y <= other.y
            && other.bottom() <= self.bottom()
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[x={}, y={}, w={}, h={}]",
            self.x, self.y, self.width, self.height
        )
    }
}
