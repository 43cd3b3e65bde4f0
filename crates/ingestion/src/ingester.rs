//! Load-and-sanitize entry point.

use std::path::Path;

use tracing::{info, warn};

use bathy_common::Sample;

use crate::error::{IngestionError, Result};
use crate::loader::load_samples;
use crate::sanitize::sanitize;

/// Result of ingesting one survey file.
#[derive(Debug, Clone)]
pub struct IngestionResult {
    /// Samples that passed the depth sanity check, in file order
    pub samples: Vec<Sample>,
    /// Data rows read (header excluded)
    pub rows_read: usize,
    /// Rows discarded as out-of-water readings
    pub rows_dropped: usize,
}

/// Reads survey exports and discards sensor error readings.
#[derive(Debug, Clone, Copy)]
pub struct Ingester {
    depth_sanity_constraint: f64,
}

impl Ingester {
    /// Create an ingester that drops samples with `|depth| >= depth_sanity_constraint`.
    pub fn new(depth_sanity_constraint: f64) -> Self {
        Self {
            depth_sanity_constraint,
        }
    }

    pub fn depth_sanity_constraint(&self) -> f64 {
        self.depth_sanity_constraint
    }

    /// Load `path` and sanitize its samples.
    ///
    /// Fails with [`IngestionError::NoValidSamples`] when nothing survives.
    pub fn ingest_file(&self, path: impl AsRef<Path>) -> Result<IngestionResult> {
        let path = path.as_ref();
        let raw = load_samples(path)?;
        self.ingest_samples(raw, &path.display().to_string())
    }

    /// Sanitize already-loaded samples. `source_name` is used in diagnostics.
    pub fn ingest_samples(&self, raw: Vec<Sample>, source_name: &str) -> Result<IngestionResult> {
        let clean = sanitize(raw, self.depth_sanity_constraint);

        if clean.dropped() > 0 {
            warn!(
                source = %source_name,
                dropped = clean.dropped(),
                threshold = self.depth_sanity_constraint,
                "Discarded out-of-water samples"
            );
        }

        if clean.is_empty() {
            return Err(IngestionError::NoValidSamples {
                path: source_name.to_string(),
                total: clean.total(),
                threshold: self.depth_sanity_constraint,
            });
        }

        info!(
            source = %source_name,
            rows = clean.total(),
            kept = clean.kept(),
            "Ingested survey"
        );

        Ok(IngestionResult {
            rows_read: clean.total(),
            rows_dropped: clean.dropped(),
            samples: clean.into_samples(),
        })
    }
}
