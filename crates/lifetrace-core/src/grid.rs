//! The life grid model: one cell per expected day of life.
//!
//! The grid is sized once at startup from the expected lifespan; the
//! lived/remaining split is a pure function of `(cell index, elapsed
//! days)` so the view can re-evaluate it on every redraw.

use crate::calendar::DAYS_PER_YEAR;

/// Cells per logical row, matching the reference layout.
pub const DEFAULT_CELLS_PER_ROW: usize = 300;

/// Binary state of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Day already lived.
    Lived,
    /// Day still ahead (or past the expected end, never reached).
    Remaining,
}

/// Fixed-size grid of expected life days in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeGrid {
    cell_count: usize,
    cells_per_row: usize,
}

impl LifeGrid {
    /// Size the grid from the expected lifespan:
    /// `round(expected_years * 365.25)` cells.
    #[must_use]
    pub fn new(expected_years: f64, cells_per_row: usize) -> Self {
        Self {
            cell_count: (expected_years * DAYS_PER_YEAR).round() as usize,
            cells_per_row: cells_per_row.max(1),
        }
    }

    /// Total number of day cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Cells in one logical row.
    #[must_use]
    pub fn cells_per_row(&self) -> usize {
        self.cells_per_row
    }

    /// Number of logical rows (last row may be partial).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cell_count.div_ceil(self.cells_per_row)
    }

    /// (row, column) of a cell index.
    #[must_use]
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cells_per_row, index % self.cells_per_row)
    }

    /// State of one cell given the elapsed day count at render time.
    #[must_use]
    pub fn cell_state(&self, index: usize, elapsed_days: i64) -> CellState {
        if (index as i64) < elapsed_days {
            CellState::Lived
        } else {
            CellState::Remaining
        }
    }

    /// Number of lived cells, clamped to the grid bounds.
    #[must_use]
    pub fn lived_cells(&self, elapsed_days: i64) -> usize {
        elapsed_days.clamp(0, self.cell_count as i64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_80_years() {
        let grid = LifeGrid::new(80.0, DEFAULT_CELLS_PER_ROW);
        assert_eq!(grid.cell_count(), 29_220);
        assert_eq!(grid.cells_per_row(), 300);
        assert_eq!(grid.rows(), 98);
    }

    #[test]
    fn test_grid_rounds_cell_count() {
        // 1.001 years = 365.615... days, rounds to 366
        let grid = LifeGrid::new(1.001, 300);
        assert_eq!(grid.cell_count(), 366);
        // 0.999 years = 364.88... days, rounds to 365
        let grid = LifeGrid::new(0.999, 300);
        assert_eq!(grid.cell_count(), 365);
    }

    #[test]
    fn test_grid_position() {
        let grid = LifeGrid::new(80.0, 300);
        assert_eq!(grid.position(0), (0, 0));
        assert_eq!(grid.position(299), (0, 299));
        assert_eq!(grid.position(300), (1, 0));
        assert_eq!(grid.position(29_219), (97, 119));
    }

    #[test]
    fn test_cell_state_threshold() {
        let grid = LifeGrid::new(80.0, 300);
        assert_eq!(grid.cell_state(0, 1), CellState::Lived);
        assert_eq!(grid.cell_state(0, 0), CellState::Remaining);
        assert_eq!(grid.cell_state(99, 100), CellState::Lived);
        assert_eq!(grid.cell_state(100, 100), CellState::Remaining);
    }

    #[test]
    fn test_lived_cells_clamped() {
        let grid = LifeGrid::new(1.0, 300);
        assert_eq!(grid.cell_count(), 365);
        assert_eq!(grid.lived_cells(-10), 0);
        assert_eq!(grid.lived_cells(0), 0);
        assert_eq!(grid.lived_cells(100), 100);
        assert_eq!(grid.lived_cells(1_000_000), 365);
    }

    #[test]
    fn test_lived_cells_matches_cell_state() {
        let grid = LifeGrid::new(1.0, 30);
        let elapsed = 100;
        let counted = (0..grid.cell_count())
            .filter(|&i| grid.cell_state(i, elapsed) == CellState::Lived)
            .count();
        assert_eq!(counted, grid.lived_cells(elapsed));
    }

    #[test]
    fn test_zero_width_row_clamped() {
        let grid = LifeGrid::new(1.0, 0);
        assert_eq!(grid.cells_per_row(), 1);
        assert_eq!(grid.rows(), grid.cell_count());
    }

    #[test]
    fn test_partial_last_row() {
        let grid = LifeGrid::new(1.0, 100);
        // 365 cells in rows of 100: 4 rows, last holds 65
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.position(364), (3, 64));
    }
}
