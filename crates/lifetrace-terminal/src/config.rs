//! XDG-compliant configuration loading for the lifetrace binary.
//!
//! The config file is a flat key/value subset of YAML handled by a small
//! line parser (no serde); invalid values warn to stderr and fall back to
//! defaults. CLI flags override anything loaded here.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use lifetrace_core::DEFAULT_CELLS_PER_ROW;

/// Date format accepted for `birth_date`.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Main lifetrace configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Birth date; required at startup but optional here so the CLI flag
    /// can supply it.
    pub birth_date: Option<NaiveDate>,
    /// Expected lifespan in years (fractional allowed).
    pub expected_lifespan_years: f64,
    /// Refresh interval in milliseconds.
    pub refresh_ms: u64,
    /// Cells per logical grid row.
    pub cells_per_row: usize,
    /// Theme name.
    pub theme: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            birth_date: None,
            expected_lifespan_years: 80.0,
            refresh_ms: 1000,
            cells_per_row: DEFAULT_CELLS_PER_ROW,
            theme: "tokyo_night".to_string(),
        }
    }
}

impl AppConfig {
    /// XDG config paths to search, in order:
    /// `$XDG_CONFIG_HOME/lifetrace/config.yaml`, then
    /// `~/.config/lifetrace/config.yaml`.
    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join("lifetrace/config.yaml"));
        }
        if let Ok(home) = std::env::var("HOME") {
            paths.push(PathBuf::from(home).join(".config/lifetrace/config.yaml"));
        }
        paths
    }

    /// Load configuration from the first existing config path, falling
    /// back to defaults.
    pub fn load() -> Self {
        for path in Self::config_paths() {
            if let Some(config) = Self::load_from_file(&path) {
                return config;
            }
        }
        Self::default()
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> Option<Self> {
        let contents = fs::read_to_string(path).ok()?;
        Some(Self::parse_yaml(&contents))
    }

    /// Default configuration as a YAML string (for `--dump-config`).
    #[must_use]
    pub fn default_yaml() -> String {
        r"# lifetrace configuration file
# Location: ~/.config/lifetrace/config.yaml

# Birth date (YYYY-MM-DD); can also be passed as --birth-date
#birth_date: 1993-09-22

# Expected lifespan in years (fractional allowed)
expected_lifespan_years: 80

# Refresh interval in milliseconds
refresh_ms: 1000

# Cells per logical grid row
cells_per_row: 300

# Theme: tokyo_night | dracula | nord
theme: tokyo_night
"
        .to_string()
    }

    /// Parse a flat key/value YAML subset. Unknown keys and invalid values
    /// warn to stderr; parsing itself never fails.
    #[must_use]
    pub fn parse_yaml(contents: &str) -> Self {
        let mut config = Self::default();
        let mut warnings: Vec<String> = Vec::new();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "birth_date" => match NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT) {
                    Ok(date) => config.birth_date = Some(date),
                    Err(_) => warnings.push(format!("invalid birth_date: {value}")),
                },
                "expected_lifespan_years" => match value.parse::<f64>() {
                    Ok(years) if years.is_finite() && years > 0.0 => {
                        config.expected_lifespan_years = years;
                    }
                    _ => warnings.push(format!("invalid expected_lifespan_years: {value}")),
                },
                "refresh_ms" => {
                    if let Ok(ms) = value.parse::<u64>() {
                        config.refresh_ms = ms;
                    } else {
                        warnings.push(format!("invalid refresh_ms: {value}"));
                    }
                }
                "cells_per_row" => match value.parse::<usize>() {
                    Ok(cells) if cells > 0 => config.cells_per_row = cells,
                    _ => warnings.push(format!("invalid cells_per_row: {value}")),
                },
                "theme" => {
                    config.theme = value.to_string();
                }
                _ => {
                    if !value.is_empty() {
                        warnings.push(format!("unknown config field: {key}"));
                    }
                }
            }
        }

        for warning in warnings {
            eprintln!("[lifetrace config] warning: {warning}");
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.birth_date.is_none());
        assert_eq!(config.expected_lifespan_years, 80.0);
        assert_eq!(config.refresh_ms, 1000);
        assert_eq!(config.cells_per_row, 300);
        assert_eq!(config.theme, "tokyo_night");
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = "
birth_date: 1993-09-22
expected_lifespan_years: 79.5
refresh_ms: 500
cells_per_row: 365
theme: nord
";
        let config = AppConfig::parse_yaml(yaml);
        assert_eq!(
            config.birth_date,
            NaiveDate::from_ymd_opt(1993, 9, 22)
        );
        assert_eq!(config.expected_lifespan_years, 79.5);
        assert_eq!(config.refresh_ms, 500);
        assert_eq!(config.cells_per_row, 365);
        assert_eq!(config.theme, "nord");
    }

    #[test]
    fn test_parse_partial_merges_defaults() {
        let config = AppConfig::parse_yaml("refresh_ms: 250");
        assert_eq!(config.refresh_ms, 250);
        assert_eq!(config.expected_lifespan_years, 80.0);
        assert_eq!(config.theme, "tokyo_night");
    }

    #[test]
    fn test_parse_invalid_values_keep_defaults() {
        let yaml = "
birth_date: not-a-date
expected_lifespan_years: -4
refresh_ms: soon
cells_per_row: 0
";
        let config = AppConfig::parse_yaml(yaml);
        assert!(config.birth_date.is_none());
        assert_eq!(config.expected_lifespan_years, 80.0);
        assert_eq!(config.refresh_ms, 1000);
        assert_eq!(config.cells_per_row, 300);
    }

    #[test]
    fn test_parse_impossible_date_rejected() {
        let config = AppConfig::parse_yaml("birth_date: 2000-02-30");
        assert!(config.birth_date.is_none());
    }

    #[test]
    fn test_parse_comments_and_blanks_ignored() {
        let yaml = "
# a comment

refresh_ms: 2000
";
        let config = AppConfig::parse_yaml(yaml);
        assert_eq!(config.refresh_ms, 2000);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(AppConfig::parse_yaml(""), AppConfig::default());
    }

    #[test]
    fn test_default_yaml_roundtrips() {
        let config = AppConfig::parse_yaml(&AppConfig::default_yaml());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_missing_file() {
        assert!(AppConfig::load_from_file(Path::new("/nonexistent/config.yaml")).is_none());
    }

    #[test]
    fn test_config_paths_name_lifetrace() {
        for path in AppConfig::config_paths() {
            assert!(path.to_string_lossy().contains("lifetrace"));
        }
    }
}
