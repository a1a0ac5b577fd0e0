//! Taxicab neighborhood enumeration.
//!
//! The diamond of radius `r` around a center, minus the center itself, is
//! covered by taking every canonical offset `(dx, dy)` with `dx >= 1`,
//! `dy >= 0` and `dx + dy <= r`, and turning it through the four quarter
//! rotations. Each non-center lattice point of the diamond has exactly one
//! canonical offset and one rotation that reaches it, so nothing is emitted
//! twice. Points that fall off the grid are skipped.

use std::iter::FusedIterator;

use crate::grid::in_bounds;
use crate::position::{GridPosition, Rotation};

/// Lazy iterator over the cells at taxicab distance `1..=radius` from a
/// center, clipped to a `width` x `height` grid.
#[derive(Debug, Clone)]
pub struct Neighborhood {
    center: GridPosition,
    width: u32,
    height: u32,
    radius: i32,
    dx: i32,
    dy: i32,
    rotation: usize,
}

impl Neighborhood {
    pub fn new(center: GridPosition, radius: u32, width: u32, height: u32) -> Self {
        Self {
            center,
            width,
            height,
            radius: i32::try_from(radius).unwrap_or(i32::MAX),
            dx: 1,
            dy: 0,
            rotation: 0,
        }
    }

    /// Step to the next canonical offset once all rotations of the current
    /// one have been tried.
    fn advance_offset(&mut self) {
        self.rotation = 0;
        self.dx += 1;
        if self.dx > self.radius - self.dy {
            self.dy += 1;
            self.dx = 1;
        }
    }
}

impl Iterator for Neighborhood {
    type Item = GridPosition;

    fn next(&mut self) -> Option<GridPosition> {
        while self.dy < self.radius {
            while let Some(&rotation) = Rotation::ALL.get(self.rotation) {
                self.rotation += 1;
                let (ox, oy) = rotation.apply(self.dx, self.dy);
                let candidate = self.center.offset(ox, oy);
                if in_bounds(candidate, self.width, self.height) {
                    return Some(candidate);
                }
            }
            self.advance_offset();
        }
        None
    }
}

impl FusedIterator for Neighborhood {}
