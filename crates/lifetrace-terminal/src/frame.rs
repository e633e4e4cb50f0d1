//! Off-screen cell buffer and ANSI renderer.
//!
//! Widgets paint into a [`FrameBuffer`]; the [`AnsiRenderer`] turns the
//! buffer into batched crossterm commands, either as a full frame or as a
//! dirty-cells-only diff. The buffer can also dump itself as plain text,
//! which backs `--render-once` and the integration tests.

use bitvec::prelude::*;
use compact_str::CompactString;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use std::io::{self, Write};
use unicode_width::UnicodeWidthChar;

use crate::color::{ColorMode, Rgb};

/// Rectangular region of the frame, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    #[must_use]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Shrink by one cell on every side.
    #[must_use]
    pub fn inset(&self, margin: u16) -> Self {
        Self {
            x: self.x + margin,
            y: self.y + margin,
            width: self.width.saturating_sub(margin * 2),
            height: self.height.saturating_sub(margin * 2),
        }
    }
}

/// Style of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    /// Foreground color.
    pub fg: Rgb,
    /// Background color; `None` keeps the terminal default.
    pub bg: Option<Rgb>,
    /// Bold text.
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::WHITE,
            bg: None,
            bold: false,
        }
    }
}

impl CellStyle {
    #[must_use]
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: None,
            bold: false,
        }
    }

    #[must_use]
    pub fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = Some(bg);
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Displayed symbol (inlined for short graphemes).
    pub symbol: CompactString,
    /// Cell style.
    pub style: CellStyle,
    /// Display width: 1 normal, 2 wide, 0 continuation of a wide char.
    width: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: CompactString::const_new(" "),
            style: CellStyle::default(),
            width: 1,
        }
    }
}

impl Cell {
    #[must_use]
    pub fn new(ch: char, style: CellStyle) -> Self {
        let mut symbol = CompactString::default();
        symbol.push(ch);
        Self {
            symbol,
            style,
            width: UnicodeWidthChar::width(ch).unwrap_or(1).clamp(1, 2) as u8,
        }
    }

    #[must_use]
    pub const fn is_continuation(&self) -> bool {
        self.width == 0
    }

    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    fn make_continuation(&mut self) {
        self.symbol.clear();
        self.width = 0;
    }
}

/// Fixed-size cell grid with dirty tracking.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    dirty: BitVec,
}

impl FrameBuffer {
    /// Create a buffer of default (blank) cells, all marked dirty.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let len = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
            dirty: bitvec![1; len],
        }
    }

    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Full-frame area.
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// (x, y) coordinates of a flat cell index.
    #[must_use]
    pub fn coords(&self, idx: usize) -> (u16, u16) {
        (
            (idx % usize::from(self.width)) as u16,
            (idx / usize::from(self.width)) as u16,
        )
    }

    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Put a single character; out-of-bounds writes are ignored.
    pub fn put(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        let cell = Cell::new(ch, style);
        if self.cells[idx] != cell {
            // A wide char spills into the next column
            if cell.width() == 2 {
                if let Some(next) = self.index(x + 1, y) {
                    self.cells[next].make_continuation();
                    self.dirty.set(next, true);
                }
            }
            self.cells[idx] = cell;
            self.dirty.set(idx, true);
        }
    }

    /// Put a string left-to-right, clipping at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) {
        let mut col = x;
        for ch in text.chars() {
            if col >= self.width {
                break;
            }
            let w = UnicodeWidthChar::width(ch).unwrap_or(1).clamp(1, 2) as u16;
            self.put(col, y, ch, style);
            col += w;
        }
    }

    /// Fill a region with one character.
    pub fn fill(&mut self, area: Rect, ch: char, style: CellStyle) {
        for y in area.y..area.bottom().min(self.height) {
            for x in area.x..area.right().min(self.width) {
                self.put(x, y, ch, style);
            }
        }
    }

    /// Reset every cell to blank and mark the frame dirty.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
        self.dirty.fill(true);
    }

    /// Mark every cell dirty (e.g. after a terminal resize).
    pub fn mark_all_dirty(&mut self) {
        self.dirty.fill(true);
    }

    fn clear_dirty(&mut self) {
        self.dirty.fill(false);
    }

    /// Indices of dirty cells in row-major order.
    pub fn iter_dirty(&self) -> impl Iterator<Item = usize> + '_ {
        self.dirty.iter_ones()
    }

    /// Plain-text dump (one line per row, right-trimmed). Continuation
    /// cells are skipped so wide characters appear once.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + usize::from(self.height));
        for y in 0..self.height {
            let mut line = String::with_capacity(usize::from(self.width));
            for x in 0..self.width {
                if let Some(cell) = self.get(x, y) {
                    if cell.is_continuation() {
                        continue;
                    }
                    line.push_str(&cell.symbol);
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Renders a [`FrameBuffer`] as batched crossterm commands.
///
/// Caches the last emitted style so unchanged runs of cells cost only a
/// `Print`.
#[derive(Debug)]
pub struct AnsiRenderer {
    mode: ColorMode,
    last_style: Option<CellStyle>,
}

impl AnsiRenderer {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            mode,
            last_style: None,
        }
    }

    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        self.mode
    }

    /// Forget cached style state (after clear or resize).
    pub fn reset(&mut self) {
        self.last_style = None;
    }

    /// Render the whole frame, then clear the dirty flags.
    pub fn render_full<W: Write>(&mut self, buf: &mut FrameBuffer, out: &mut W) -> io::Result<()> {
        queue!(out, ResetColor)?;
        self.last_style = None;
        for y in 0..buf.height() {
            queue!(out, MoveTo(0, y))?;
            for x in 0..buf.width() {
                let Some(cell) = buf.get(x, y) else { continue };
                if cell.is_continuation() {
                    continue;
                }
                let (symbol, style) = (cell.symbol.clone(), cell.style);
                self.apply_style(out, style)?;
                queue!(out, Print(symbol))?;
            }
        }
        buf.clear_dirty();
        out.flush()
    }

    /// Render only dirty cells, then clear the dirty flags.
    ///
    /// Returns the number of cells written.
    pub fn render_dirty<W: Write>(
        &mut self,
        buf: &mut FrameBuffer,
        out: &mut W,
    ) -> io::Result<usize> {
        let mut written = 0usize;
        let dirty: Vec<usize> = buf.iter_dirty().collect();
        for idx in dirty {
            let (x, y) = buf.coords(idx);
            let Some(cell) = buf.get(x, y) else { continue };
            if cell.is_continuation() {
                continue;
            }
            let (symbol, style) = (cell.symbol.clone(), cell.style);
            queue!(out, MoveTo(x, y))?;
            self.apply_style(out, style)?;
            queue!(out, Print(symbol))?;
            written += 1;
        }
        buf.clear_dirty();
        out.flush()?;
        Ok(written)
    }

    fn apply_style<W: Write>(&mut self, out: &mut W, style: CellStyle) -> io::Result<()> {
        if self.last_style == Some(style) {
            return Ok(());
        }
        let bold_changed = self
            .last_style
            .map_or(true, |last| last.bold != style.bold);
        if bold_changed {
            let attr = if style.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            queue!(out, SetAttribute(attr))?;
        }
        queue!(
            out,
            SetForegroundColor(self.mode.to_crossterm(style.fg)),
            SetBackgroundColor(
                style
                    .bg
                    .map_or(CrosstermColor::Reset, |bg| self.mode.to_crossterm(bg))
            )
        )?;
        self.last_style = Some(style);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_blank() {
        let buf = FrameBuffer::new(4, 2);
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.get(0, 0).unwrap().symbol, " ");
    }

    #[test]
    fn test_put_and_get() {
        let mut buf = FrameBuffer::new(4, 2);
        buf.put(1, 1, 'x', CellStyle::default());
        assert_eq!(buf.get(1, 1).unwrap().symbol, "x");
    }

    #[test]
    fn test_put_out_of_bounds_ignored() {
        let mut buf = FrameBuffer::new(4, 2);
        buf.put(10, 10, 'x', CellStyle::default());
        assert!(buf.get(10, 10).is_none());
    }

    #[test]
    fn test_put_str_clips() {
        let mut buf = FrameBuffer::new(4, 1);
        buf.put_str(2, 0, "abcdef", CellStyle::default());
        assert_eq!(buf.get(2, 0).unwrap().symbol, "a");
        assert_eq!(buf.get(3, 0).unwrap().symbol, "b");
        // "c" onward clipped
    }

    #[test]
    fn test_wide_char_continuation() {
        let mut buf = FrameBuffer::new(4, 1);
        buf.put(0, 0, '年', CellStyle::default());
        assert_eq!(buf.get(0, 0).unwrap().width(), 2);
        assert!(buf.get(1, 0).unwrap().is_continuation());
    }

    #[test]
    fn test_fill() {
        let mut buf = FrameBuffer::new(4, 4);
        buf.fill(Rect::new(1, 1, 2, 2), '#', CellStyle::default());
        assert_eq!(buf.get(1, 1).unwrap().symbol, "#");
        assert_eq!(buf.get(2, 2).unwrap().symbol, "#");
        assert_eq!(buf.get(0, 0).unwrap().symbol, " ");
        assert_eq!(buf.get(3, 3).unwrap().symbol, " ");
    }

    #[test]
    fn test_dirty_tracking() {
        let mut buf = FrameBuffer::new(2, 1);
        let mut sink = Vec::new();
        let mut renderer = AnsiRenderer::new(ColorMode::Mono);
        renderer.render_full(&mut buf, &mut sink).unwrap();
        assert_eq!(buf.iter_dirty().count(), 0);

        buf.put(0, 0, 'x', CellStyle::default());
        assert_eq!(buf.iter_dirty().count(), 1);
    }

    #[test]
    fn test_put_same_cell_stays_clean() {
        let mut buf = FrameBuffer::new(2, 1);
        let mut sink = Vec::new();
        let mut renderer = AnsiRenderer::new(ColorMode::Mono);
        buf.put(0, 0, 'x', CellStyle::default());
        renderer.render_full(&mut buf, &mut sink).unwrap();

        buf.put(0, 0, 'x', CellStyle::default());
        assert_eq!(buf.iter_dirty().count(), 0, "identical write must not dirty");
    }

    #[test]
    fn test_plain_text_dump() {
        let mut buf = FrameBuffer::new(5, 2);
        buf.put_str(0, 0, "ab", CellStyle::default());
        buf.put_str(1, 1, "cd", CellStyle::default());
        assert_eq!(buf.plain_text(), "ab\n cd\n");
    }

    #[test]
    fn test_render_dirty_counts_cells() {
        let mut buf = FrameBuffer::new(3, 1);
        let mut renderer = AnsiRenderer::new(ColorMode::Mono);
        let mut sink = Vec::new();
        renderer.render_full(&mut buf, &mut sink).unwrap();

        buf.put(0, 0, 'a', CellStyle::default());
        buf.put(2, 0, 'b', CellStyle::default());
        let written = renderer.render_dirty(&mut buf, &mut sink).unwrap();
        assert_eq!(written, 2);
        assert_eq!(buf.iter_dirty().count(), 0);
    }

    #[test]
    fn test_render_full_emits_symbols() {
        let mut buf = FrameBuffer::new(3, 1);
        buf.put_str(0, 0, "hey", CellStyle::fg(Rgb::new(10, 20, 30)));
        let mut renderer = AnsiRenderer::new(ColorMode::TrueColor);
        let mut sink = Vec::new();
        renderer.render_full(&mut buf, &mut sink).unwrap();
        let out = String::from_utf8(sink).unwrap();
        assert!(out.contains("hey") || (out.contains('h') && out.contains('y')));
    }

    #[test]
    fn test_rect_inset() {
        let r = Rect::new(0, 0, 10, 6).inset(1);
        assert_eq!(r, Rect::new(1, 1, 8, 4));
    }

    #[test]
    fn test_rect_inset_underflow() {
        let r = Rect::new(0, 0, 1, 1).inset(1);
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 0);
    }

    #[test]
    fn test_cell_style_builders() {
        let s = CellStyle::fg(Rgb::BLACK).with_bg(Rgb::WHITE).bold();
        assert_eq!(s.fg, Rgb::BLACK);
        assert_eq!(s.bg, Some(Rgb::WHITE));
        assert!(s.bold);
    }

    #[test]
    fn test_coords_roundtrip() {
        let buf = FrameBuffer::new(7, 3);
        for idx in [0usize, 6, 7, 20] {
            let (x, y) = buf.coords(idx);
            assert_eq!(usize::from(y) * 7 + usize::from(x), idx);
        }
    }
}
