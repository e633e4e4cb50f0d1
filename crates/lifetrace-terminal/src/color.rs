//! Terminal color representation, capability detection and conversion.

use crossterm::style::Color as CrosstermColor;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string, falling back to white on malformed
    /// input (theme tables stay infallible).
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return Self::WHITE;
        }
        let channel = |range| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        Self::new(channel(0..2), channel(2..4), channel(4..6))
    }

    /// Linear blend toward `other` by `t` in 0.0..=1.0.
    #[must_use]
    pub fn blend(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (f64::from(a) + t * (f64::from(b) - f64::from(a))).round() as u8;
        Self::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }
}

/// Terminal color capability mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// 24-bit true color (COLORTERM=truecolor or 24bit).
    #[default]
    TrueColor,
    /// 256 color palette.
    Color256,
    /// 16 ANSI colors.
    Color16,
    /// Monochrome (no color).
    Mono,
}

impl ColorMode {
    /// Auto-detect terminal color capabilities from the environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_with_env(std::env::var("COLORTERM").ok(), std::env::var("TERM").ok())
    }

    /// Detect color mode from environment variable values.
    /// This is the testable core of `detect()`.
    #[must_use]
    pub fn detect_with_env(colorterm: Option<String>, term: Option<String>) -> Self {
        if let Some(ref ct) = colorterm {
            if ct == "truecolor" || ct == "24bit" {
                return Self::TrueColor;
            }
        }
        match term.as_deref() {
            Some(t) if t.contains("256color") => Self::Color256,
            Some(t) if t.contains("color") || t.contains("xterm") => Self::Color16,
            Some("dumb") | None => Self::Mono,
            _ => Self::Color16,
        }
    }

    /// Convert an RGB color to the closest crossterm color for this mode.
    #[must_use]
    pub fn to_crossterm(self, color: Rgb) -> CrosstermColor {
        match self {
            Self::TrueColor => CrosstermColor::Rgb {
                r: color.r,
                g: color.g,
                b: color.b,
            },
            Self::Color256 => CrosstermColor::AnsiValue(rgb_to_256(color)),
            Self::Color16 => rgb_to_16(color),
            Self::Mono => CrosstermColor::Reset,
        }
    }
}

/// Map RGB to the xterm 256-color palette.
fn rgb_to_256(c: Rgb) -> u8 {
    // Grayscale ramp (232-255) for near-gray colors
    if c.r == c.g && c.g == c.b {
        if c.r < 8 {
            return 16;
        }
        if c.r > 248 {
            return 231;
        }
        return 232 + ((c.r - 8) / 10).min(23);
    }
    // 6x6x6 color cube (16-231)
    let idx = |v: u8| (u16::from(v) * 5 / 255) as u8;
    16 + 36 * idx(c.r) + 6 * idx(c.g) + idx(c.b)
}

/// Map RGB to the 16 ANSI colors by dominant channels and luminance.
fn rgb_to_16(c: Rgb) -> CrosstermColor {
    let luminance = (u32::from(c.r) * 299 + u32::from(c.g) * 587 + u32::from(c.b) * 114) / 1000;
    let bright = luminance > 127;
    let threshold = c.r.max(c.g).max(c.b) / 2;
    let (has_r, has_g, has_b) = (c.r > threshold, c.g > threshold, c.b > threshold);

    match (has_r, has_g, has_b, bright) {
        (false, false, false, false) => CrosstermColor::Black,
        (false, false, false, true) => CrosstermColor::DarkGrey,
        (true, false, false, false) => CrosstermColor::DarkRed,
        (true, false, false, true) => CrosstermColor::Red,
        (false, true, false, false) => CrosstermColor::DarkGreen,
        (false, true, false, true) => CrosstermColor::Green,
        (true, true, false, false) => CrosstermColor::DarkYellow,
        (true, true, false, true) => CrosstermColor::Yellow,
        (false, false, true, false) => CrosstermColor::DarkBlue,
        (false, false, true, true) => CrosstermColor::Blue,
        (true, false, true, false) => CrosstermColor::DarkMagenta,
        (true, false, true, true) => CrosstermColor::Magenta,
        (false, true, true, false) => CrosstermColor::DarkCyan,
        (false, true, true, true) => CrosstermColor::Cyan,
        (true, true, true, false) => CrosstermColor::Grey,
        (true, true, true, true) => CrosstermColor::White,
    }
}
