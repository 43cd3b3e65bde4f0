//! Figure rendering for interpolated depth maps.
//!
//! Implements the drawing layers:
//! - Filled depth bands (colormap)
//! - Contour lines (marching squares)
//! - Stroke glyph text for ticks and titles
//! - PNG encoding

pub mod contour;
pub mod error;
pub mod figure;
pub mod glyphs;
pub mod gradient;
pub mod png;

pub use error::{RenderError, Result};
pub use figure::{depth_bands, isoline_levels, render_depth_map, render_depth_map_png, Area, FigureConfig, Layout};
