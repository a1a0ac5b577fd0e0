//! Dense shop-count grid.
//!
//! A [`ShopGrid`] stores one shop counter per cell in row-major order. It is
//! filled once from a shop list and then only read by the search.

use std::ops::{Index, Range};

use serde::{Deserialize, Serialize};

use crate::neighborhood::Neighborhood;
use crate::position::GridPosition;

/// Errors from building a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions {width}x{height} must both be at least 1")]
    EmptyDimensions { width: u32, height: u32 },
    #[error("grid dimensions {width}x{height} exceed {max_cells} cells")]
    TooLarge {
        width: u32,
        height: u32,
        max_cells: u64,
    },
    #[error("position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        position: GridPosition,
        width: u32,
        height: u32,
    },
}

/// Shop counts for every cell of a `width` x `height` city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopGrid {
    width: u32,
    height: u32,
    counts: Vec<u32>,
}

impl ShopGrid {
    /// Largest number of cells a grid may hold. Also keeps every coordinate
    /// well inside `i32`.
    pub const MAX_CELLS: u64 = 1 << 26;

    /// Create an empty grid. Both dimensions must be non-zero and the grid
    /// may hold at most [`ShopGrid::MAX_CELLS`] cells.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let cells = u64::from(width) * u64::from(height);
        if cells > Self::MAX_CELLS {
            return Err(GridError::TooLarge {
                width,
                height,
                max_cells: Self::MAX_CELLS,
            });
        }
        Ok(Self {
            width,
            height,
            counts: vec![0; width as usize * height as usize],
        })
    }

    /// Create a grid and add every shop in `shops`. Shops sharing a cell
    /// accumulate.
    pub fn with_shops<I>(width: u32, height: u32, shops: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = GridPosition>,
    {
        let mut grid = Self::new(width, height)?;
        for shop in shops {
            grid.add_shop(shop)?;
        }
        Ok(grid)
    }

    /// Increment the shop counter at `position`.
    pub fn add_shop(&mut self, position: GridPosition) -> Result<(), GridError> {
        let idx = self.index_of(position).ok_or(GridError::OutOfBounds {
            position,
            width: self.width,
            height: self.height,
        })?;
        self.counts[idx] += 1;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `position` lies inside the grid.
    pub fn contains(&self, position: GridPosition) -> bool {
        in_bounds(position, self.width, self.height)
    }

    /// Shop count at `position`, or `None` when out of bounds.
    pub fn get(&self, position: GridPosition) -> Option<u32> {
        self.index_of(position).map(|idx| self.counts[idx])
    }

    /// Whether a shop already stands at `position`.
    pub fn is_occupied(&self, position: GridPosition) -> bool {
        self.get(position).is_some_and(|count| count > 0)
    }

    /// Total number of shops on the grid.
    pub fn shop_count(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Number of cells without a shop.
    pub fn eligible_count(&self) -> usize {
        self.counts.iter().filter(|&&c| c == 0).count()
    }

    /// Every cell in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = GridPosition> + '_ {
        self.rows().flat_map(move |y| self.row(y))
    }

    /// Row indices, top to bottom.
    pub fn rows(&self) -> Range<i32> {
        0..axis_len(self.height)
    }

    /// The cells of row `y`, left to right.
    pub fn row(&self, y: i32) -> impl Iterator<Item = GridPosition> + use<> {
        (0..axis_len(self.width)).map(move |x| GridPosition::new(x, y))
    }

    /// In-bounds cells within taxicab distance `1..=radius` of `center`.
    pub fn neighborhood(&self, center: GridPosition, radius: u32) -> Neighborhood {
        Neighborhood::new(center, radius, self.width, self.height)
    }

    /// Sum of shop counts over the neighborhood of `center`. The center's own
    /// count is never included.
    pub fn shops_within(&self, center: GridPosition, radius: u32) -> u32 {
        self.neighborhood(center, radius).map(|p| self[p]).sum()
    }

    fn index_of(&self, position: GridPosition) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        Some(position.y as usize * self.width as usize + position.x as usize)
    }
}

impl Index<GridPosition> for ShopGrid {
    type Output = u32;

    /// Panics if `position` is out of bounds.
    fn index(&self, position: GridPosition) -> &u32 {
        match self.index_of(position) {
            Some(idx) => &self.counts[idx],
            None => panic!(
                "position {position} is outside the {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

// `new` bounds both sides by MAX_CELLS, far below i32::MAX.
fn axis_len(len: u32) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

pub(crate) fn in_bounds(position: GridPosition, width: u32, height: u32) -> bool {
    position.x >= 0
        && position.y >= 0
        && (position.x as u32) < width
        && (position.y as u32) < height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = ShopGrid::new(4, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.shop_count(), 0);
        assert_eq!(grid.eligible_count(), 12);
        assert!(grid.positions().all(|p| grid[p] == 0));
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            ShopGrid::new(0, 5),
            Err(GridError::EmptyDimensions { width: 0, height: 5 })
        );
        assert!(ShopGrid::new(5, 0).is_err());
    }

    #[test]
    fn oversized_grid_rejected() {
        assert_eq!(
            ShopGrid::new(1, 3_000_000_000),
            Err(GridError::TooLarge {
                width: 1,
                height: 3_000_000_000,
                max_cells: ShopGrid::MAX_CELLS,
            })
        );
        assert!(ShopGrid::new(u32::MAX, u32::MAX).is_err());
        assert!(matches!(
            ShopGrid::new(8193, 8192),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn rows_cover_height() {
        let grid = ShopGrid::new(3, 4).unwrap();
        assert_eq!(grid.rows(), 0..4);
        assert_eq!(grid.row(2).count(), 3);
    }

    #[test]
    fn shops_accumulate() {
        let p = GridPosition::new(1, 2);
        let grid = ShopGrid::with_shops(3, 3, [p, p, GridPosition::new(0, 0)]).unwrap();
        assert_eq!(grid[p], 2);
        assert_eq!(grid.get(GridPosition::new(0, 0)), Some(1));
        assert_eq!(grid.shop_count(), 3);
        assert_eq!(grid.eligible_count(), 7);
    }

    #[test]
    fn out_of_bounds_shop_rejected() {
        let mut grid = ShopGrid::new(2, 2).unwrap();
        let err = grid.add_shop(GridPosition::new(2, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                position: GridPosition::new(2, 0),
                width: 2,
                height: 2,
            }
        );
        assert!(grid.add_shop(GridPosition::new(0, -1)).is_err());
        assert_eq!(grid.shop_count(), 0);
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let grid = ShopGrid::new(2, 3).unwrap();
        assert_eq!(grid.get(GridPosition::new(-1, 0)), None);
        assert_eq!(grid.get(GridPosition::new(0, 3)), None);
        assert_eq!(grid.get(GridPosition::new(1, 2)), Some(0));
    }

    #[test]
    #[should_panic(expected = "outside the 2x2 grid")]
    fn index_out_of_bounds_panics() {
        let grid = ShopGrid::new(2, 2).unwrap();
        let _ = grid[GridPosition::new(5, 5)];
    }

    #[test]
    fn is_occupied() {
        let grid = ShopGrid::with_shops(3, 1, [GridPosition::new(1, 0)]).unwrap();
        assert!(!grid.is_occupied(GridPosition::new(0, 0)));
        assert!(grid.is_occupied(GridPosition::new(1, 0)));
        assert!(!grid.is_occupied(GridPosition::new(9, 9)));
    }

    #[test]
    fn positions_are_row_major() {
        let grid = ShopGrid::new(2, 2).unwrap();
        let cells: Vec<_> = grid.positions().collect();
        assert_eq!(
            cells,
            vec![
                GridPosition::new(0, 0),
                GridPosition::new(1, 0),
                GridPosition::new(0, 1),
                GridPosition::new(1, 1),
            ]
        );
        assert!(cells.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn shops_within_excludes_center() {
        let center = GridPosition::new(1, 1);
        let grid = ShopGrid::with_shops(3, 3, [center, GridPosition::new(1, 0)]).unwrap();
        assert_eq!(grid.shops_within(center, 1), 1);
        assert_eq!(grid.shops_within(center, 0), 0);
        assert_eq!(grid.shops_within(GridPosition::new(0, 0), 2), 2);
    }
}
