//! Run configuration for the depth map service.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use bathy_common::DepthMapConfig;
use renderer::FigureConfig;

/// Everything one run needs, resolved from CLI, file and environment.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub grid_json: Option<PathBuf>,
    pub depth_map: DepthMapConfig,
    pub figure: FigureConfig,
}

impl RunOptions {
    /// Options with defaults for everything but the input file.
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        Self {
            output: default_output_path(&input),
            input,
            grid_json: None,
            depth_map: DepthMapConfig::default(),
            figure: FigureConfig::default(),
        }
    }
}

/// `survey.csv` -> `survey.png`, next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("png")
}

/// Layer defaults, an optional YAML file and environment overrides, then
/// validate the result.
pub fn load_depth_map_config(path: Option<&Path>) -> Result<DepthMapConfig> {
    let config = match path {
        Some(path) => DepthMapConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => DepthMapConfig::default(),
    };

    let config = config.with_env_overrides();
    config.validate().context("Invalid configuration")?;

    debug!(?config, "Resolved depth map configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("data/survey.csv")),
            PathBuf::from("data/survey.png")
        );
        assert_eq!(default_output_path(Path::new("survey")), PathBuf::from("survey.png"));
    }

    #[test]
    fn test_for_input_defaults() {
        let options = RunOptions::for_input("lake.csv");
        assert_eq!(options.output, PathBuf::from("lake.png"));
        assert!(options.grid_json.is_none());
        assert_eq!(options.figure.width, 1200);
        assert_eq!(options.figure.height, 900);
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_depth_map_config(Some(Path::new("/nonexistent/depth.yaml"))).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/depth.yaml"));
    }
}
