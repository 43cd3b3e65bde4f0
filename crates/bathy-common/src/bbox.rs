//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::Sample;

/// Geographic bounding box of a survey, in degrees.
///
/// `x` is longitude and `y` is latitude, matching the axis layout of the
/// rendered map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Minimal box containing every sample, or `None` for an empty slice.
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        let first = samples.first()?;
        let init = Self::new(
            first.longitude,
            first.latitude,
            first.longitude,
            first.latitude,
        );

        Some(samples[1..].iter().fold(init, |bbox, s| Self {
            min_lon: bbox.min_lon.min(s.longitude),
            min_lat: bbox.min_lat.min(s.latitude),
            max_lon: bbox.max_lon.max(s.longitude),
            max_lat: bbox.max_lat.max(s.latitude),
        }))
    }

    /// Longitude extent in degrees.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Latitude extent in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// True when either axis has zero extent.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Check if a point is contained within this bbox (edges inclusive).
    pub fn contains_point(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }
}
