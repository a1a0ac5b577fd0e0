//! Shopspot Core -- optimal shop placement on a city grid.
//!
//! Given a rectangular city in which some cells already hold shops, and a
//! list of walking distances, finds for each distance the empty cell with
//! the most shops within that taxicab distance.
//!
//! # Key Types
//!
//! - [`position::GridPosition`] -- 0-based cell coordinate with row-major
//!   ordering, the single source of truth for tie-breaks.
//! - [`grid::ShopGrid`] -- Dense per-cell shop counts, immutable once built.
//! - [`neighborhood::Neighborhood`] -- Lazy iterator over the cells within a
//!   taxicab radius of a center, center excluded, clipped to the grid.
//! - [`search::OptimalLocation`] -- Result of one query, plus the ranking
//!   rule used to pick and merge candidates.
//! - [`simulator::Simulator`] -- Runs every query of one test case.
//!
//! # Example
//!
//! ```rust
//! use shopspot_core::position::GridPosition;
//! use shopspot_core::simulator::Simulator;
//!
//! let sim = Simulator::new(3, 3, &[GridPosition::new(1, 1)], vec![1]).unwrap();
//! let best = sim.run()[0];
//! assert_eq!(best.shop_count, 1);
//! assert_eq!(best.position, GridPosition::new(1, 0));
//! ```
//!
//! With the `parallel` feature, [`search::find_optimal_location_par`] and
//! [`simulator::Simulator::run_par`] spread the work over rayon and return
//! exactly the same results.

pub mod grid;
pub mod neighborhood;
pub mod position;
pub mod search;
pub mod simulator;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use grid::{GridError, ShopGrid};
pub use position::GridPosition;
pub use search::OptimalLocation;
pub use simulator::Simulator;
