//! Widgets for the lifespan display.

mod life_grid;
mod meter;
mod report_panel;

pub use life_grid::LifeGridView;
pub use meter::LifeMeter;
pub use report_panel::ReportPanel;
