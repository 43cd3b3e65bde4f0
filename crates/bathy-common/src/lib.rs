//! Common types and utilities shared across the bathymetry workspace.

pub mod bbox;
pub mod config;
pub mod depth_map;
pub mod error;
pub mod grid;
pub mod sample;

pub use bbox::BoundingBox;
pub use config::DepthMapConfig;
pub use depth_map::DepthMap;
pub use error::{BathyError, BathyResult};
pub use grid::{axis_ticks, GridAxis, Tick};
pub use sample::Sample;
