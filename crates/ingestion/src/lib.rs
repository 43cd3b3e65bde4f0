//! Sounding ingestion library.
//!
//! Loads transducer exports (CSV, one sounding per row) and drops the
//! out-of-water readings the sensor emits when it loses the bottom.
//!
//! # Architecture
//!
//! ```text
//! survey.csv ──► loader::load_samples ──► sanitize::sanitize ──► Vec<Sample>
//! ```
//!
//! [`Ingester`] bundles both steps and reports what was dropped.

pub mod error;
pub mod ingester;
pub mod loader;
pub mod sanitize;

// Re-exports
pub use error::{IngestionError, Result};
pub use ingester::{Ingester, IngestionResult};
pub use loader::{load_samples, read_samples, DEPTH_COLUMN, LATITUDE_COLUMN, LONGITUDE_COLUMN};
pub use sanitize::{sanitize, Sanitized};
