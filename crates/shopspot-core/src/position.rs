//! Grid coordinates and quarter-turn rotations.
//!
//! [`GridPosition`] carries the row-major total order that every tie-break in
//! the search relies on. [`Rotation`] turns a displacement around a center
//! cell in quarter steps and is what the neighborhood enumerator uses to
//! cover all four quadrants from one canonical offset.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// GridPosition
// ---------------------------------------------------------------------------

/// A cell on the city grid. `x` is the column, `y` the row, both 0-based.
///
/// Positions are ordered row-major: top-to-bottom first, then left-to-right
/// within a row. The order is implemented explicitly rather than derived so
/// that it does not depend on field declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    /// The top-left cell.
    pub const ORIGIN: GridPosition = GridPosition { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position.
    pub fn manhattan_distance(&self, other: &GridPosition) -> u32 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }

    /// Offset this position by `(dx, dy)`.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Ord for GridPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for GridPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for GridPosition {
    type Output = GridPosition;

    fn add(self, rhs: GridPosition) -> GridPosition {
        GridPosition::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for GridPosition {
    type Output = GridPosition;

    fn sub(self, rhs: GridPosition) -> GridPosition {
        GridPosition::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Rotation
// ---------------------------------------------------------------------------

/// Quarter-turn rotation of a displacement around a center cell.
///
/// Rows grow downward, so a clockwise quarter turn maps east `(1, 0)` to
/// south `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    /// No rotation.
    #[default]
    None,
    /// 90 degrees clockwise.
    Cw90,
    /// 180 degrees.
    Cw180,
    /// 270 degrees clockwise (90 degrees counter-clockwise).
    Cw270,
}

impl Rotation {
    /// All four rotation values.
    pub const ALL: [Rotation; 4] = [
        Rotation::None,
        Rotation::Cw90,
        Rotation::Cw180,
        Rotation::Cw270,
    ];

    /// Apply this rotation to the displacement `(dx, dy)`.
    pub fn apply(self, dx: i32, dy: i32) -> (i32, i32) {
        match self {
            Rotation::None => (dx, dy),
            Rotation::Cw90 => (-dy, dx),
            Rotation::Cw180 => (-dx, -dy),
            Rotation::Cw270 => (dy, -dx),
        }
    }
}
