//! Data panel: the textual lifespan report.

use lifetrace_core::LifespanReport;

use crate::frame::{CellStyle, FrameBuffer, Rect};
use crate::theme::Theme;

/// Column where values start, leaving room for the longest label.
const VALUE_COLUMN: u16 = 20;

/// Renders the `LifespanReport` as labeled lines.
#[derive(Debug, Clone, Copy)]
pub struct ReportPanel<'a> {
    report: &'a LifespanReport,
}

impl<'a> ReportPanel<'a> {
    #[must_use]
    pub fn new(report: &'a LifespanReport) -> Self {
        Self { report }
    }

    /// The (label, value) pairs in display order.
    ///
    /// Values follow the report formatting contract: days and percentage
    /// with 2 decimals, end date as `YYYY-MM-DD`.
    #[must_use]
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        let r = self.report;
        vec![
            ("Current age", format!("{} years", r.age_years)),
            ("Days lived", format!("{:.2}", r.elapsed_days as f64)),
            ("Weeks lived", r.elapsed_weeks.to_string()),
            ("Time lived", r.elapsed.to_string()),
            ("Life percentage", format!("{:.2}%", r.life_percentage)),
            ("Time remaining", r.remaining.to_string()),
            (
                "Expected end date",
                r.expected_end_date.format("%Y-%m-%d").to_string(),
            ),
        ]
    }

    /// Paint the report into `area`, one line per field.
    pub fn paint(&self, buf: &mut FrameBuffer, area: Rect, theme: &Theme) {
        let label_style = CellStyle::fg(theme.dim);
        let value_style = CellStyle::fg(theme.foreground);
        let percent_style =
            CellStyle::fg(theme.life_color(self.report.life_percentage.clamp(0.0, 100.0))).bold();

        for (i, (label, value)) in self.lines().into_iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            buf.put_str(area.x, y, label, label_style);
            let style = if label == "Life percentage" {
                percent_style
            } else {
                value_style
            };
            buf.put_str(area.x + VALUE_COLUMN, y, &value, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn report() -> LifespanReport {
        let birth = NaiveDate::from_ymd_opt(1993, 9, 22).unwrap();
        let now = NaiveDate::from_ymd_opt(2026, 8, 29)
            .unwrap()
            .and_time(NaiveTime::MIN);
        LifespanReport::compute(birth, now, 80.0)
    }

    #[test]
    fn test_lines_order_and_count() {
        let r = report();
        let lines = ReportPanel::new(&r).lines();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0].0, "Current age");
        assert_eq!(lines[6].0, "Expected end date");
    }

    #[test]
    fn test_lines_formatting() {
        let r = report();
        let lines = ReportPanel::new(&r).lines();
        assert_eq!(lines[0].1, "32 years");
        assert_eq!(lines[1].1, "12029.00");
        assert_eq!(lines[2].1, "1718");
        assert_eq!(lines[3].1, "32y 11m 19d");
        assert_eq!(lines[6].1, "2073-09-14");
    }

    #[test]
    fn test_percentage_has_two_decimals_and_sign() {
        let r = report();
        let lines = ReportPanel::new(&r).lines();
        let pct = &lines[4].1;
        assert!(pct.ends_with('%'), "got {pct}");
        let numeric = &pct[..pct.len() - 1];
        assert_eq!(numeric.split('.').nth(1).map(str::len), Some(2));
    }

    #[test]
    fn test_paint_writes_labels_and_values() {
        let r = report();
        let mut buf = FrameBuffer::new(60, 10);
        let area = buf.area();
        ReportPanel::new(&r).paint(&mut buf, area, &Theme::default());
        let text = buf.plain_text();
        assert!(text.contains("Current age"));
        assert!(text.contains("32 years"));
        assert!(text.contains("2073-09-14"));
    }

    #[test]
    fn test_paint_clips_to_area() {
        let r = report();
        let mut buf = FrameBuffer::new(60, 10);
        // Area with room for only two lines
        ReportPanel::new(&r).paint(&mut buf, Rect::new(0, 0, 60, 2), &Theme::default());
        let text = buf.plain_text();
        assert!(text.contains("Current age"));
        assert!(!text.contains("Expected end date"));
    }
}
