//! Shared test helpers for integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests, integration tests, and benchmarks (via the
//! `test-utils` feature).

use std::collections::BTreeSet;

use crate::grid::ShopGrid;
use crate::position::GridPosition;
use crate::search::OptimalLocation;

// ===========================================================================
// Constructors
// ===========================================================================

pub fn pos(x: i32, y: i32) -> GridPosition {
    GridPosition::new(x, y)
}

/// Build a grid from `(x, y)` pairs. Panics on out-of-bounds shops.
pub fn grid_with(width: u32, height: u32, shops: &[(i32, i32)]) -> ShopGrid {
    ShopGrid::with_shops(width, height, shops.iter().map(|&(x, y)| pos(x, y)))
        .expect("test shops must be inside the grid")
}

/// Deterministically spread `count` shops over a grid.
///
/// Uses a fixed linear congruential sequence so benchmarks see the same city
/// on every run.
pub fn scattered_shops(width: u32, height: u32, count: usize) -> Vec<GridPosition> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) as u32
    };
    (0..count)
        .map(|_| {
            let x = next() % width;
            let y = next() % height;
            pos(x as i32, y as i32)
        })
        .collect()
}

// ===========================================================================
// Reference implementations
// ===========================================================================

/// Every in-bounds cell at taxicab distance `1..=radius` from `center`,
/// found by checking the whole grid.
pub fn brute_force_neighborhood(
    center: GridPosition,
    radius: u32,
    width: u32,
    height: u32,
) -> BTreeSet<GridPosition> {
    let mut out = BTreeSet::new();
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let p = pos(x, y);
            if (1..=radius).contains(&center.manhattan_distance(&p)) {
                out.insert(p);
            }
        }
    }
    out
}

/// Best location computed straight from the shop list: each empty cell is
/// scored by measuring its distance to every shop, and the winner is the
/// maximum under (score descending, position ascending), starting from the
/// `{0, (0,0)}` value.
pub fn brute_force_search(
    width: u32,
    height: u32,
    shops: &[GridPosition],
    radius: u32,
) -> OptimalLocation {
    let occupied: BTreeSet<GridPosition> = shops.iter().copied().collect();
    let mut candidates = vec![OptimalLocation::default()];
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let p = pos(x, y);
            if occupied.contains(&p) {
                continue;
            }
            let score = shops
                .iter()
                .filter(|s| (1..=radius).contains(&s.manhattan_distance(&p)))
                .count() as u32;
            candidates.push(OptimalLocation::new(score, p));
        }
    }
    candidates
        .into_iter()
        .max_by(|a, b| {
            a.shop_count
                .cmp(&b.shop_count)
                .then_with(|| b.position.cmp(&a.position))
        })
        .unwrap_or_default()
}
