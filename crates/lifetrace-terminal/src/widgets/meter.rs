//! Horizontal life-percentage meter.

use crate::frame::{CellStyle, FrameBuffer, Rect};
use crate::theme::Theme;

/// Partial fill characters in eighths, index = eighths filled.
const PARTIAL_CHARS: [char; 8] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉'];

/// One-line gradient meter for the life percentage.
#[derive(Debug, Clone, Copy)]
pub struct LifeMeter {
    percent: f64,
}

impl LifeMeter {
    #[must_use]
    pub fn new(percent: f64) -> Self {
        Self { percent }
    }

    /// Number of full cells and the partial-cell character for a width.
    fn fill(&self, width: u16) -> (u16, char) {
        let frac = (self.percent / 100.0).clamp(0.0, 1.0);
        let eighths = (frac * f64::from(width) * 8.0).round() as u64;
        let full = (eighths / 8).min(u64::from(width)) as u16;
        let partial = if full < width {
            PARTIAL_CHARS[(eighths % 8) as usize]
        } else {
            ' '
        };
        (full, partial)
    }

    /// Paint the meter on the first row of `area`.
    pub fn paint(&self, buf: &mut FrameBuffer, area: Rect, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let color = theme.life_color(self.percent.clamp(0.0, 100.0));
        let filled = CellStyle::fg(color);
        let empty = CellStyle::fg(theme.remaining);

        let (full, partial) = self.fill(area.width);
        for i in 0..area.width {
            let x = area.x + i;
            if i < full {
                buf.put(x, area.y, '█', filled);
            } else if i == full && partial != ' ' {
                buf.put(x, area.y, partial, filled);
            } else {
                buf.put(x, area.y, '░', empty);
            }
        }
    }
}
