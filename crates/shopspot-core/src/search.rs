//! Best-location search for a single walking distance.
//!
//! Every empty cell is scored by the number of shops within the walking
//! distance. The best score wins, and ties go to the smallest position in
//! row-major order. Because ties are broken on the position itself rather
//! than on the order cells are visited in, partial results from disjoint
//! parts of the grid can be merged in any order and still agree with a
//! single top-to-bottom scan.

use serde::{Deserialize, Serialize};

use crate::grid::ShopGrid;
use crate::position::GridPosition;

/// The best cell found for one walking distance.
///
/// Starts out as `{ shop_count: 0, position: (0,0) }`. If no cell on the grid
/// is empty, that starting value is what gets reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OptimalLocation {
    pub shop_count: u32,
    pub position: GridPosition,
}

impl OptimalLocation {
    pub fn new(shop_count: u32, position: GridPosition) -> Self {
        Self {
            shop_count,
            position,
        }
    }

    /// Whether `candidate` should replace `self` as the running best.
    ///
    /// A lower score never wins. A higher score always wins. On an equal
    /// score the strictly smaller position wins.
    pub fn is_beaten_by(&self, candidate: &OptimalLocation) -> bool {
        if candidate.shop_count < self.shop_count {
            return false;
        }
        candidate.shop_count > self.shop_count || candidate.position < self.position
    }

    /// Replace `self` with `candidate` if it ranks higher.
    pub fn consider(&mut self, candidate: OptimalLocation) {
        if self.is_beaten_by(&candidate) {
            *self = candidate;
        }
    }

    /// The higher ranked of two results.
    pub fn best_of(self, other: OptimalLocation) -> OptimalLocation {
        if self.is_beaten_by(&other) { other } else { self }
    }
}

/// Score every empty cell of `grid` for `radius` and return the best one.
pub fn find_optimal_location(grid: &ShopGrid, radius: u32) -> OptimalLocation {
    let mut best = OptimalLocation::default();
    for position in grid.positions() {
        if let Some(candidate) = score_cell(grid, position, radius) {
            best.consider(candidate);
        }
    }
    best
}

/// Same result as [`find_optimal_location`], with rows scored on the rayon
/// thread pool.
#[cfg(feature = "parallel")]
pub fn find_optimal_location_par(grid: &ShopGrid, radius: u32) -> OptimalLocation {
    use rayon::prelude::*;

    grid.rows()
        .into_par_iter()
        .map(|y| {
            let mut best = OptimalLocation::default();
            for position in grid.row(y) {
                if let Some(candidate) = score_cell(grid, position, radius) {
                    best.consider(candidate);
                }
            }
            best
        })
        .reduce(OptimalLocation::default, OptimalLocation::best_of)
}

/// Score of `position`, or `None` if a shop already stands there.
fn score_cell(grid: &ShopGrid, position: GridPosition, radius: u32) -> Option<OptimalLocation> {
    if grid[position] > 0 {
        return None;
    }
    Some(OptimalLocation::new(grid.shops_within(position, radius), position))
}
