//! Scattered-to-grid interpolation for bathymetric surveys.
//!
//! Soundings arrive as an irregular point cloud along boat tracks. This
//! crate projects them onto a regular longitude/latitude grid by linear
//! interpolation over their Delaunay triangulation.
//!
//! # Architecture
//!
//! ```text
//! sanitized samples
//!      │
//!      ▼
//! BoundingBox::from_samples ──► GridAxis::linspace (lon, lat)
//!      │
//!      ▼
//! Triangulation::new (delaunator)
//!      │
//!      ├─► R-tree of triangle envelopes (rstar)
//!      │
//!      └─► per grid node: locate triangle, barycentric weights
//!               │
//!               ▼
//!          DepthGrid (NaN outside the convex hull)
//!               │
//!               ▼
//!          DepthMap (grid + bbox + tick metadata) ──► renderer
//! ```
//!
//! # Example
//!
//! ```ignore
//! use grid_processor::build_depth_map;
//!
//! let map = build_depth_map(samples, &DepthMapConfig::default())?;
//! assert_eq!(map.depths.len(), 100 * 100);
//! ```

pub mod builder;
pub mod error;
pub mod interpolation;
pub mod triangulation;
pub mod types;

// Re-export commonly used types at crate root
pub use builder::build_depth_map;
pub use error::{GridProcessorError, Result};
pub use interpolation::{interpolate_linear, LinearInterpolator};
pub use triangulation::Triangulation;
pub use types::DepthGrid;
