//! Grid module - the bounded field of cells and the step rule.
//!
//! The grid is a fixed-size matrix where each cell is alive or dead, stored as
//! a flat row-major `Vec<bool>` for cache locality. Coordinates are
//! `(col, row)` with `(0, 0)` at the top-left. The boundary is clipped, not
//! toroidal: neighbor positions outside the field count as dead.

use std::error::Error;
use std::fmt;

/// Offsets to the 8 grid-adjacent cells. Adding one of these to a cell's
/// position yields a neighbor's position, possibly outside the field.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Errors from grid construction and direct cell access.
///
/// Interactive edits never surface `OutOfBounds`; the controller swallows
/// off-field coordinates because pointer positions routinely land on margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    InvalidDimensions { width: usize, height: usize },
    OutOfBounds { col: i32, row: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {}x{}", width, height)
            }
            GridError::OutOfBounds { col, row } => {
                write!(f, "cell ({}, {}) is outside the grid", col, row)
            }
        }
    }
}

impl Error for GridError {}

/// A bounded field of binary cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat cell storage, row-major (row * width + col).
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid. Fails on zero width or height.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Flat index for (col, row), or `None` outside the field.
    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return None;
        }
        Some((row as usize) * self.width + (col as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether (col, row) lies inside the field.
    pub fn contains(&self, col: i32, row: i32) -> bool {
        self.index(col, row).is_some()
    }

    /// Read one cell.
    pub fn get(&self, col: i32, row: i32) -> Result<bool, GridError> {
        self.index(col, row)
            .map(|i| self.cells[i])
            .ok_or(GridError::OutOfBounds { col, row })
    }

    /// Write one cell.
    pub fn set(&mut self, col: i32, row: i32, alive: bool) -> Result<(), GridError> {
        match self.index(col, row) {
            Some(i) => {
                self.cells[i] = alive;
                Ok(())
            }
            None => Err(GridError::OutOfBounds { col, row }),
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Count live cells among the 8 neighbors of (col, row).
    ///
    /// Neighbor positions outside the field count as dead (clipped boundary,
    /// no wrap-around).
    pub fn live_neighbors(&self, col: i32, row: i32) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dc, dr)| {
                self.index(col + dc, row + dr)
                    .is_some_and(|i| self.cells[i])
            })
            .count() as u8
    }

    /// Compute the next generation into a fresh grid of the same dimensions.
    ///
    /// Every cell is decided from this (frozen) generation only; no cell sees
    /// an already-updated neighbor. Rule: a live cell survives with 2 or 3
    /// live neighbors, a dead cell is born with exactly 3.
    pub fn step(&self) -> Grid {
        let mut next = Grid {
            width: self.width,
            height: self.height,
            cells: vec![false; self.width * self.height],
        };

        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                let i = (row as usize) * self.width + (col as usize);
                let neighbors = self.live_neighbors(col, row);
                next.cells[i] = if self.cells[i] {
                    neighbors == 2 || neighbors == 3
                } else {
                    neighbors == 3
                };
            }
        }

        next
    }

    /// Number of live cells on the field.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Flat row-major view of the cells, for rendering.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions { width: 0, height: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(GridError::InvalidDimensions { width: 5, height: 0 })
        );
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_index_bounds() {
        let grid = Grid::new(10, 20).unwrap();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(9, 0), Some(9));
        assert_eq!(grid.index(0, 1), Some(10));
        assert_eq!(grid.index(9, 19), Some(199));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(10, 0), None);
        assert_eq!(grid.index(0, 20), None);
    }

    #[test]
    fn test_get_set_round_trip_and_errors() {
        let mut grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.get(2, 1), Ok(false));
        grid.set(2, 1, true).unwrap();
        assert_eq!(grid.get(2, 1), Ok(true));
        assert_eq!(
            grid.get(4, 0),
            Err(GridError::OutOfBounds { col: 4, row: 0 })
        );
        assert_eq!(
            grid.set(0, -1, true),
            Err(GridError::OutOfBounds { col: 0, row: -1 })
        );
    }

    #[test]
    fn test_corner_neighbors_are_clipped_not_wrapped() {
        let mut grid = Grid::new(5, 5).unwrap();
        // A live cell at the far corner must not count as a neighbor of (0, 0).
        grid.set(4, 4, true).unwrap();
        assert_eq!(grid.live_neighbors(0, 0), 0);

        // Only the 3 in-field positions around a corner are ever counted.
        grid.set(1, 0, true).unwrap();
        grid.set(0, 1, true).unwrap();
        grid.set(1, 1, true).unwrap();
        assert_eq!(grid.live_neighbors(0, 0), 3);
    }

    #[test]
    fn test_neighbor_count_excludes_the_cell_itself() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, true).unwrap();
        assert_eq!(grid.live_neighbors(1, 1), 0);
    }
}
