//! Optional TOML configuration.
//!
//! Every key is optional; anything left out keeps the built-in layout.
//!
//! ```toml
//! [window]
//! width = 1500.0
//! height = 900.0
//!
//! [captions]
//! bills = "Rent & Bills"
//!
//! [chart]
//! x = 900.0
//! y = 200.0
//!
//! [legend]
//! group_spacing = 40.0
//! ```

use std::{fs, path::Path, path::PathBuf};

use pie_core::LegendCaptions;
use pie_core::calculations::{ChartLayout, LegendStyle, PieStyle};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Expense Pie Chart".to_string(),
            width: 1500.0,
            height: 900.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub captions: LegendCaptions,
    pub chart: PieStyle,
    pub legend: LegendStyle,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    pub fn layout(&self) -> ChartLayout {
        ChartLayout {
            chart: self.chart,
            legend: self.legend,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.layout(), ChartLayout::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [captions]
            bills = "Rent"

            [legend]
            group_spacing = 40.0
            "#,
        )
        .unwrap();

        assert_eq!(config.captions.bills, "Rent");
        assert_eq!(config.captions.gas, "Gas");
        assert_eq!(config.legend.group_spacing, 40.0);
        assert_eq!(config.legend.swatch_size, 30.0);
        assert_eq!(config.chart, PieStyle::default());
    }

    #[test]
    fn window_size_override() {
        let config: AppConfig = toml::from_str("[window]\nwidth = 1600.0\nheight = 1000.0\n").unwrap();

        assert_eq!(config.window.width, 1600.0);
        assert_eq!(config.window.height, 1000.0);
        assert_eq!(config.window.title, "Expense Pie Chart");
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[chart]\nwidth = \"wide\"\n");

        assert!(result.is_err());
    }

    #[test]
    fn load_missing_file_reports_path() {
        let error = AppConfig::load(Path::new("does/not/exist.toml")).unwrap_err();

        assert!(matches!(error, ConfigError::Read { .. }));
        assert!(error.to_string().contains("does/not/exist.toml"));
    }
}
