//! Terminal front end for the lifetrace lifespan calculator.
//!
//! Direct crossterm rendering: widgets paint into an off-screen
//! [`FrameBuffer`], and an [`AnsiRenderer`] flushes either full frames or
//! dirty-cell diffs. Color depth is detected from the environment and
//! degrades from truecolor down to mono.

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod theme;
pub mod widgets;

pub use app::{App, View};
pub use color::{ColorMode, Rgb};
pub use config::AppConfig;
pub use error::TuiError;
pub use frame::{AnsiRenderer, Cell, CellStyle, FrameBuffer, Rect};
pub use theme::{Gradient, Theme};
