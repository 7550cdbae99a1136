//! Dashboard layout settings, optionally read from a JSON file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::filter::{MASS_MAX, MASS_MIN};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "PENGUIN_DASH_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// A sidebar hyperlink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    pub window_size: [f32; 2],

    // Mass slider
    pub mass_min: f64,
    pub mass_max: f64,
    pub mass_default: f64,

    /// Background colours of the three value boxes, `#rrggbb`.
    pub value_box_colors: [String; 3],

    pub links: Vec<Link>,

    /// Read the table from this CSV instead of the bundled one.
    pub data_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Penguins dashboard".to_string(),
            window_size: [1280.0, 860.0],
            mass_min: MASS_MIN,
            mass_max: MASS_MAX,
            mass_default: MASS_MAX,
            value_box_colors: [
                "#EA39B7".to_string(),
                "#45D9E8".to_string(),
                "#6F42C1".to_string(),
            ],
            links: vec![
                Link::new(
                    "GitHub Source",
                    "https://github.com/meldstonerogers/cintel-07-tdash",
                ),
                Link::new(
                    "GitHub App",
                    "https://meldstonerogers.github.io/cintel-07-tdash/",
                ),
                Link::new(
                    "GitHub Issues",
                    "https://github.com/meldstonerogers/cintel-07-tdash/issues",
                ),
                Link::new("PyShiny", "https://shiny.posit.co/py/"),
                Link::new(
                    "Template: Basic Dashboard",
                    "https://shiny.posit.co/py/templates/dashboard/",
                ),
                Link::new(
                    "See also",
                    "https://github.com/denisecase/pyshiny-penguins-dashboard-express",
                ),
            ],
            data_path: None,
        }
    }
}

impl DashboardConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Config from `$PENGUIN_DASH_CONFIG`, or defaults when it is unset or
    /// cannot be used.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        let path = PathBuf::from(path);
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass_min.is_finite() && self.mass_max.is_finite()) {
            return Err(ConfigError::Invalid("mass bounds must be finite".into()));
        }
        if self.mass_min >= self.mass_max {
            return Err(ConfigError::Invalid(format!(
                "mass_min ({}) must be below mass_max ({})",
                self.mass_min, self.mass_max
            )));
        }
        if !self.mass_default.is_finite() {
            return Err(ConfigError::Invalid("mass_default must be finite".into()));
        }
        Ok(())
    }

    /// Initial slider position, clamped into the slider range.
    pub fn initial_mass(&self) -> f64 {
        self.mass_default.clamp(self.mass_min, self.mass_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "penguin-dash-{}-{name}.json",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_match_dashboard() {
        let c = DashboardConfig::default();
        assert_eq!(c.mass_min, 2000.0);
        assert_eq!(c.mass_max, 6000.0);
        assert_eq!(c.initial_mass(), 6000.0);
        assert_eq!(c.links.len(), 6);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = write_temp("partial", r#"{ "title": "Birds", "mass_default": 4500 }"#);
        let c = DashboardConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(c.title, "Birds");
        assert_eq!(c.initial_mass(), 4500.0);
        assert_eq!(c.links, DashboardConfig::default().links);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let path = write_temp("inverted", r#"{ "mass_min": 6000, "mass_max": 2000 }"#);
        let err = DashboardConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn bad_json_and_missing_file() {
        let path = write_temp("bad", "{ not json");
        let err = DashboardConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Json { .. }));

        let err = DashboardConfig::load(Path::new("/nonexistent/dash.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn default_outside_range_is_clamped() {
        let c = DashboardConfig {
            mass_default: 9000.0,
            ..DashboardConfig::default()
        };
        assert_eq!(c.initial_mass(), 6000.0);
    }
}
