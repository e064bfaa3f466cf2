//! Materialized number-spiral grid.
//!
//! ## Purpose
//!
//! This module builds the `n x n` number spiral cell by cell and sums its
//! diagonals directly. It is the reference the ring-based diagonal sum is
//! checked against.
//!
//! ## Design notes
//!
//! * **Layout**: Row-major `Vec<u64>`, row 0 at the top.
//! * **Walk**: From the center, move right 1, down 1, left 2, up 2, right 3,
//!   and so on, writing 1, 2, 3, ... until all `n^2` cells are filled.
//! * **Cost**: O(n^2) time and memory.
//!
//! ## Invariants
//!
//! * Every value in `1..=n^2` appears exactly once.
//! * The center holds 1 and the top-right corner holds `n^2`.
//!
//! ## Non-goals
//!
//! * This module is not meant for large `n`; use the algorithms layer.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::NumericError;

/// Walk order: right, down, left, up as (row, col) deltas.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

// ============================================================================
// Spiral Grid
// ============================================================================

/// A fully populated number spiral of odd side length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiralGrid {
    side: usize,
    cells: Vec<u64>,
}

impl SpiralGrid {
    /// Build the spiral of side `n` (odd, `>= 1`).
    pub fn new(n: usize) -> Result<Self, NumericError> {
        Validator::validate_side_length(n)?;

        let total = n
            .checked_mul(n)
            .ok_or(NumericError::Overflow { operation: "spiral_grid" })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(total)
            .map_err(|_| NumericError::Overflow { operation: "spiral_grid" })?;
        cells.resize(total, 0u64);

        let center = n / 2;
        let (mut row, mut col) = (center, center);
        let mut value = 1u64;
        cells[row * n + col] = value;

        let mut run = 1usize;
        let mut heading = 0usize;
        'fill: loop {
            // each run length is walked twice before it grows
            for _ in 0..2 {
                let (dr, dc) = DIRECTIONS[heading % 4];
                for _ in 0..run {
                    if value == total as u64 {
                        break 'fill;
                    }
                    row = row.wrapping_add_signed(dr);
                    col = col.wrapping_add_signed(dc);
                    value += 1;
                    cells[row * n + col] = value;
                }
                heading += 1;
            }
            run += 1;
        }

        Ok(Self { side: n, cells })
    }

    /// Side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Value at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        if row >= self.side || col >= self.side {
            return None;
        }
        Some(self.cells[row * self.side + col])
    }

    /// Row and column of the center cell.
    pub fn center(&self) -> (usize, usize) {
        (self.side / 2, self.side / 2)
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    /// Sum of both diagonals, counting the shared center once.
    pub fn diagonal_sum(&self) -> u64 {
        let n = self.side;
        let main: u64 = (0..n).map(|i| self.cells[i * n + i]).sum();
        let anti: u64 = (0..n).map(|i| self.cells[i * n + (n - 1 - i)]).sum();
        let (cr, cc) = self.center();

        main + anti - self.cells[cr * n + cc]
    }
}
