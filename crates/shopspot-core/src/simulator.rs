//! One test case: a city, its shops, and a list of walking distances.

use tracing::debug;

use crate::grid::{GridError, ShopGrid};
use crate::position::GridPosition;
use crate::search::{OptimalLocation, find_optimal_location};

/// Runs the location search for every query of one test case against a
/// single, read-only grid.
#[derive(Debug, Clone)]
pub struct Simulator {
    grid: ShopGrid,
    queries: Vec<u32>,
}

impl Simulator {
    /// Build the grid from 0-based shop positions.
    pub fn new(
        width: u32,
        height: u32,
        shops: &[GridPosition],
        queries: Vec<u32>,
    ) -> Result<Self, GridError> {
        let grid = ShopGrid::with_shops(width, height, shops.iter().copied())?;
        Ok(Self::from_grid(grid, queries))
    }

    /// Wrap an already populated grid.
    pub fn from_grid(grid: ShopGrid, queries: Vec<u32>) -> Self {
        Self { grid, queries }
    }

    pub fn grid(&self) -> &ShopGrid {
        &self.grid
    }

    pub fn queries(&self) -> &[u32] {
        &self.queries
    }

    /// One result per query, in query order.
    pub fn run(&self) -> Vec<OptimalLocation> {
        debug!(
            width = self.grid.width(),
            height = self.grid.height(),
            shops = self.grid.shop_count(),
            queries = self.queries.len(),
            "running simulation"
        );
        self.queries
            .iter()
            .map(|&radius| {
                let best = find_optimal_location(&self.grid, radius);
                debug!(
                    radius,
                    shop_count = best.shop_count,
                    position = %best.position,
                    "query done"
                );
                best
            })
            .collect()
    }

    /// Same as [`Simulator::run`], with queries and the rows within each
    /// query spread over the rayon thread pool.
    #[cfg(feature = "parallel")]
    pub fn run_par(&self) -> Vec<OptimalLocation> {
        use crate::search::find_optimal_location_par;
        use rayon::prelude::*;

        debug!(
            width = self.grid.width(),
            height = self.grid.height(),
            shops = self.grid.shop_count(),
            queries = self.queries.len(),
            "running simulation in parallel"
        );
        self.queries
            .par_iter()
            .map(|&radius| find_optimal_location_par(&self.grid, radius))
            .collect()
    }
}
