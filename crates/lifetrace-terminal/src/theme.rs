//! Color themes for the lifespan display.

use crate::color::Rgb;

/// A small gradient with linear sRGB interpolation between stops.
#[derive(Debug, Clone)]
pub struct Gradient {
    stops: Vec<Rgb>,
}

impl Gradient {
    /// Create a gradient from hex stops.
    #[must_use]
    pub fn from_hex(stops: &[&str]) -> Self {
        Self {
            stops: stops.iter().map(|s| Rgb::from_hex(s)).collect(),
        }
    }

    /// Sample the gradient at position t (0.0 - 1.0).
    #[must_use]
    pub fn sample(&self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        match self.stops.len() {
            0 => Rgb::WHITE,
            1 => self.stops[0],
            n => {
                let segments = n - 1;
                let scaled = t * segments as f64;
                let seg = (scaled as usize).min(segments - 1);
                self.stops[seg].blend(self.stops[seg + 1], scaled - seg as f64)
            }
        }
    }

    /// Get color for a percentage value (0-100).
    #[must_use]
    pub fn for_percent(&self, percent: f64) -> Rgb {
        self.sample(percent / 100.0)
    }
}

impl Default for Gradient {
    fn default() -> Self {
        // Blue -> amber -> red, tracks life percentage
        Self::from_hex(&["#7aa2f7", "#e0af68", "#f7768e"])
    }
}

/// Theme for the data panel and the life grid.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name.
    pub name: &'static str,
    /// Background color.
    pub background: Rgb,
    /// Foreground (text) color.
    pub foreground: Rgb,
    /// Dim color for labels and hints.
    pub dim: Rgb,
    /// Accent color for the title bar and highlights.
    pub accent: Rgb,
    /// Color of lived grid cells.
    pub lived: Rgb,
    /// Color of remaining grid cells.
    pub remaining: Rgb,
    /// Gradient for the life-percentage meter.
    pub life: Gradient,
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme (dark, modern).
    #[must_use]
    pub fn tokyo_night() -> Self {
        Self {
            name: "tokyo_night",
            background: Rgb::from_hex("#1a1b26"),
            foreground: Rgb::from_hex("#c0caf5"),
            dim: Rgb::from_hex("#565f89"),
            accent: Rgb::from_hex("#7aa2f7"),
            lived: Rgb::from_hex("#00bfff"),
            remaining: Rgb::from_hex("#3b4261"),
            life: Gradient::from_hex(&["#7aa2f7", "#e0af68", "#f7768e"]),
        }
    }

    /// Dracula theme (dark, purple).
    #[must_use]
    pub fn dracula() -> Self {
        Self {
            name: "dracula",
            background: Rgb::from_hex("#282a36"),
            foreground: Rgb::from_hex("#f8f8f2"),
            dim: Rgb::from_hex("#6272a4"),
            accent: Rgb::from_hex("#bd93f9"),
            lived: Rgb::from_hex("#8be9fd"),
            remaining: Rgb::from_hex("#44475a"),
            life: Gradient::from_hex(&["#50fa7b", "#f1fa8c", "#ff5555"]),
        }
    }

    /// Nord theme (cool, arctic).
    #[must_use]
    pub fn nord() -> Self {
        Self {
            name: "nord",
            background: Rgb::from_hex("#2e3440"),
            foreground: Rgb::from_hex("#eceff4"),
            dim: Rgb::from_hex("#4c566a"),
            accent: Rgb::from_hex("#88c0d0"),
            lived: Rgb::from_hex("#88c0d0"),
            remaining: Rgb::from_hex("#3b4252"),
            life: Gradient::from_hex(&["#a3be8c", "#ebcb8b", "#bf616a"]),
        }
    }

    /// Look up a theme by name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "tokyo_night" => Some(Self::tokyo_night()),
            "dracula" => Some(Self::dracula()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }

    /// Color for a life percentage (0-100, clamped).
    #[must_use]
    pub fn life_color(&self, percent: f64) -> Rgb {
        self.life.for_percent(percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        let g = Gradient::from_hex(&["#000000", "#ffffff"]);
        assert_eq!(g.sample(0.0), Rgb::BLACK);
        assert_eq!(g.sample(1.0), Rgb::WHITE);
    }

    #[test]
    fn test_gradient_three_stop_midpoint() {
        let g = Gradient::from_hex(&["#ff0000", "#00ff00", "#0000ff"]);
        let mid = g.sample(0.5);
        assert!(mid.g > mid.r && mid.g > mid.b);
    }

    #[test]
    fn test_gradient_empty() {
        let g = Gradient { stops: vec![] };
        assert_eq!(g.sample(0.5), Rgb::WHITE);
    }

    #[test]
    fn test_gradient_single_stop() {
        let g = Gradient::from_hex(&["#123456"]);
        assert_eq!(g.sample(0.7), Rgb::from_hex("#123456"));
    }

    #[test]
    fn test_gradient_clamps() {
        let g = Gradient::default();
        assert_eq!(g.sample(-1.0), g.sample(0.0));
        assert_eq!(g.sample(2.0), g.sample(1.0));
    }

    #[test]
    fn test_for_percent() {
        let g = Gradient::from_hex(&["#000000", "#ffffff"]);
        assert_eq!(g.for_percent(100.0), Rgb::WHITE);
    }

    #[test]
    fn test_theme_default_is_tokyo_night() {
        assert_eq!(Theme::default().name, "tokyo_night");
    }

    #[test]
    fn test_theme_by_name() {
        assert_eq!(Theme::by_name("dracula").unwrap().name, "dracula");
        assert_eq!(Theme::by_name("nord").unwrap().name, "nord");
        assert!(Theme::by_name("solarized").is_none());
    }

    #[test]
    fn test_lived_and_remaining_differ() {
        for theme in [Theme::tokyo_night(), Theme::dracula(), Theme::nord()] {
            assert_ne!(theme.lived, theme.remaining, "{}", theme.name);
        }
    }

    #[test]
    fn test_life_color_moves_with_percent() {
        let t = Theme::default();
        assert_ne!(t.life_color(0.0), t.life_color(100.0));
    }
}
