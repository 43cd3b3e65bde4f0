//! Tunables for depth map generation.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! environment overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BathyError, BathyResult};

/// Configuration for the load -> sanitize -> interpolate -> render pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthMapConfig {
    /// Samples with `|depth|` at or above this are out-of-water artifacts.
    /// The transducer reports 1,000,000 in its error state.
    pub depth_sanity_constraint: f64,

    /// Grid points along the longitude axis.
    pub num_longitude_points: usize,

    /// Grid points along the latitude axis.
    pub num_latitude_points: usize,

    /// Tick count on each of the longitude and latitude axes.
    pub lat_lon_ticks: usize,

    /// Number of contour lines.
    pub line_levels: usize,

    /// Number of filled color bands.
    pub color_levels: usize,

    /// Number of colorbar tick labels.
    pub color_label_ticks: usize,

    /// Decimal places in axis tick labels.
    pub tick_precision: usize,
}

impl Default for DepthMapConfig {
    fn default() -> Self {
        Self {
            depth_sanity_constraint: 1000.0,
            num_longitude_points: 100,
            num_latitude_points: 100,
            lat_lon_ticks: 10,
            line_levels: 7,
            color_levels: 30,
            color_label_ticks: 30,
            tick_precision: 6,
        }
    }
}

impl DepthMapConfig {
    /// Parse configuration from a YAML document. Missing fields keep defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> BathyResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BathyError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_yaml_str(&content).map_err(|source| BathyError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Apply overrides from environment variables.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(val) = env_parse::<f64>("DEPTH_SANITY_CONSTRAINT") {
            self.depth_sanity_constraint = val;
        }

        if let Some(val) = env_parse::<usize>("GRID_LON_POINTS") {
            self.num_longitude_points = val;
        }

        if let Some(val) = env_parse::<usize>("GRID_LAT_POINTS") {
            self.num_latitude_points = val;
        }

        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> BathyResult<()> {
        if self.depth_sanity_constraint.is_nan() || self.depth_sanity_constraint <= 0.0 {
            return Err(BathyError::invalid_config(format!(
                "depth_sanity_constraint must be positive, got {}",
                self.depth_sanity_constraint
            )));
        }

        if self.num_longitude_points < 2 || self.num_latitude_points < 2 {
            return Err(BathyError::invalid_config(format!(
                "grid needs at least 2 points per axis, got {}x{}",
                self.num_longitude_points, self.num_latitude_points
            )));
        }

        if self.lat_lon_ticks == 0 {
            return Err(BathyError::invalid_config("lat_lon_ticks must be at least 1"));
        }

        if self.color_levels == 0 {
            return Err(BathyError::invalid_config("color_levels must be at least 1"));
        }

        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(val) => Some(val),
        Err(_) => {
            tracing::warn!(key = %key, value = %raw, "Ignoring unparseable environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = DepthMapConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.num_longitude_points, 100);
        assert_eq!(config.color_levels, 30);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = DepthMapConfig::from_yaml_str("num_longitude_points: 50\n").unwrap();
        assert_eq!(config.num_longitude_points, 50);
        assert_eq!(config.num_latitude_points, 100);
        assert_eq!(config.depth_sanity_constraint, 1000.0);
    }
}
