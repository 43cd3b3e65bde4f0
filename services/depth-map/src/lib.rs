//! Depth map generation service.
//!
//! Wires the library crates into one batch run:
//! load CSV -> sanitize -> bounding box -> interpolate -> render PNG.

pub mod config;
pub mod pipeline;

pub use config::{default_output_path, load_depth_map_config, RunOptions};
pub use pipeline::{build_depth_map_from_csv, run, RunSummary, SurveyMap};
