//! Life grid view: one colored cell per expected day of life.
//!
//! The logical grid (see `lifetrace_core::LifeGrid`) is usually far larger
//! than the terminal raster, so the view reflows it to the drawing area and
//! aggregates several days per drawn cell when needed. Half blocks give two
//! vertical subcells per character row. The lived/remaining threshold is
//! re-evaluated on every paint, so the grid always agrees with the report.

use lifetrace_core::{CellState, LifeGrid};

use crate::color::Rgb;
use crate::frame::{CellStyle, FrameBuffer, Rect};
use crate::theme::Theme;

/// Renders a `LifeGrid` with the elapsed-days threshold sampled at paint
/// time.
#[derive(Debug, Clone, Copy)]
pub struct LifeGridView<'a> {
    grid: &'a LifeGrid,
    elapsed_days: i64,
}

impl<'a> LifeGridView<'a> {
    #[must_use]
    pub fn new(grid: &'a LifeGrid, elapsed_days: i64) -> Self {
        Self { grid, elapsed_days }
    }

    /// Days represented by one subcell when `total` day cells reflow into
    /// `subcells` raster slots. At least 1.
    fn days_per_subcell(total: usize, subcells: usize) -> usize {
        if subcells == 0 {
            return total.max(1);
        }
        total.div_ceil(subcells).max(1)
    }

    /// Color of subcell `index`, or `None` past the end of the grid.
    ///
    /// A subcell covering several days takes the state of its first day,
    /// keeping the lived/remaining boundary monotone along the raster.
    fn subcell_color(&self, index: usize, days_per_subcell: usize, theme: &Theme) -> Option<Rgb> {
        let first_day = index * days_per_subcell;
        if first_day >= self.grid.cell_count() {
            return None;
        }
        Some(match self.grid.cell_state(first_day, self.elapsed_days) {
            CellState::Lived => theme.lived,
            CellState::Remaining => theme.remaining,
        })
    }

    /// Paint the grid into `area` using half blocks (two subcell rows per
    /// character row).
    pub fn paint(&self, buf: &mut FrameBuffer, area: Rect, theme: &Theme) {
        let total = self.grid.cell_count();
        if total == 0 || area.width == 0 || area.height == 0 {
            return;
        }

        let cols = usize::from(area.width);
        let subcell_rows = usize::from(area.height) * 2;
        let per_subcell = Self::days_per_subcell(total, cols * subcell_rows);

        for cy in 0..usize::from(area.height) {
            for cx in 0..cols {
                let top = (cy * 2) * cols + cx;
                let bottom = (cy * 2 + 1) * cols + cx;
                let top_color = self.subcell_color(top, per_subcell, theme);
                let bottom_color = self.subcell_color(bottom, per_subcell, theme);

                let x = area.x + cx as u16;
                let y = area.y + cy as u16;
                match (top_color, bottom_color) {
                    (Some(t), Some(b)) => buf.put(x, y, '▀', CellStyle::fg(t).with_bg(b)),
                    (Some(t), None) => buf.put(x, y, '▀', CellStyle::fg(t)),
                    (None, Some(b)) => buf.put(x, y, '▄', CellStyle::fg(b)),
                    (None, None) => {}
                }
            }
        }
    }

    /// Legend line: lived/total cell counts for the current threshold.
    #[must_use]
    pub fn legend(&self) -> String {
        format!(
            "{} of {} days lived",
            self.grid.lived_cells(self.elapsed_days),
            self.grid.cell_count()
        )
    }
}
