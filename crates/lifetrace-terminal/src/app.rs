//! Application state and frame composition.
//!
//! The original window had two tabs, Data and Visualization; the terminal
//! shell keeps both as switchable views. `refresh` recomputes the report
//! from an injected `now`; `draw` composes a full frame into the buffer.

use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyModifiers};

use lifetrace_core::{LifeGrid, LifePlan, LifespanReport};

use crate::frame::{CellStyle, FrameBuffer, Rect};
use crate::theme::Theme;
use crate::widgets::{LifeGridView, LifeMeter, ReportPanel};

/// Active view (tab).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Textual report.
    #[default]
    Data,
    /// Life grid visualization.
    Grid,
}

impl View {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Data => "Data",
            Self::Grid => "Grid",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Data => Self::Grid,
            Self::Grid => Self::Data,
        }
    }
}

/// UI state for the tick loop.
#[derive(Debug, Clone)]
pub struct App {
    plan: LifePlan,
    grid: LifeGrid,
    /// Latest report; recomputed every tick.
    pub report: LifespanReport,
    theme: Theme,
    /// Active view.
    pub view: View,
}

impl App {
    /// Build the app: the grid is sized once here and never resized.
    #[must_use]
    pub fn new(plan: LifePlan, cells_per_row: usize, theme: Theme, now: NaiveDateTime) -> Self {
        let grid = LifeGrid::new(plan.expected_years(), cells_per_row);
        let report = LifespanReport::compute(plan.birth_date(), now, plan.expected_years());
        Self {
            plan,
            grid,
            report,
            theme,
            view: View::default(),
        }
    }

    #[must_use]
    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Recompute the report for a freshly sampled instant.
    pub fn refresh(&mut self, now: NaiveDateTime) {
        self.report = LifespanReport::compute(self.plan.birth_date(), now, self.plan.expected_years());
    }

    /// Handle a key press. Returns `true` when the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Tab => self.view = self.view.toggled(),
            KeyCode::Char('1') => self.view = View::Data,
            KeyCode::Char('2') => self.view = View::Grid,
            _ => {}
        }
        false
    }

    /// Compose a full frame: title bar, active view, status line.
    pub fn draw(&self, buf: &mut FrameBuffer) {
        buf.fill(buf.area(), ' ', CellStyle::fg(self.theme.foreground));
        if buf.height() < 3 || buf.width() < 10 {
            return;
        }

        self.draw_title(buf);
        let content = Rect::new(1, 2, buf.width().saturating_sub(2), buf.height() - 3);
        match self.view {
            View::Data => self.draw_data(buf, content),
            View::Grid => self.draw_grid(buf, content),
        }
        self.draw_status(buf);
    }

    fn draw_title(&self, buf: &mut FrameBuffer) {
        let accent = CellStyle::fg(self.theme.accent).bold();
        buf.put_str(1, 0, "lifetrace", accent);
        let view_tag = format!("[{}]", self.view.title());
        let x = buf.width().saturating_sub(view_tag.len() as u16 + 1);
        buf.put_str(x, 0, &view_tag, CellStyle::fg(self.theme.dim));
    }

    fn draw_data(&self, buf: &mut FrameBuffer, area: Rect) {
        let panel = ReportPanel::new(&self.report);
        panel.paint(buf, area, &self.theme);

        // Meter below the report lines, spanning the content width
        let meter_y = area.y + 8;
        if meter_y < area.bottom() {
            let meter_area = Rect::new(area.x, meter_y, area.width.min(60), 1);
            LifeMeter::new(self.report.life_percentage).paint(buf, meter_area, &self.theme);
        }
    }

    fn draw_grid(&self, buf: &mut FrameBuffer, area: Rect) {
        if area.height < 2 {
            return;
        }
        let view = LifeGridView::new(&self.grid, self.report.elapsed_days);
        let grid_area = Rect::new(area.x, area.y, area.width, area.height - 2);
        view.paint(buf, grid_area, &self.theme);
        buf.put_str(
            area.x,
            area.bottom() - 1,
            &view.legend(),
            CellStyle::fg(self.theme.dim),
        );
    }

    fn draw_status(&self, buf: &mut FrameBuffer) {
        let y = buf.height() - 1;
        buf.put_str(
            1,
            y,
            "[Tab] switch view  [1] data  [2] grid  [q] quit",
            CellStyle::fg(self.theme.dim),
        );
    }
}
