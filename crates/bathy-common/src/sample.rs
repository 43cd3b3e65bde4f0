//! Geotagged depth soundings.

use serde::{Deserialize, Serialize};

/// One depth measurement taken by the transducer.
///
/// Coordinates are WGS84 degrees, depth is in metres as reported by the
/// sensor (sign convention is whatever the sensor emits).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub latitude: f64,
    pub longitude: f64,
    pub depth: f64,
}

impl Sample {
    /// Create a new sample.
    pub fn new(latitude: f64, longitude: f64, depth: f64) -> Self {
        Self {
            latitude,
            longitude,
            depth,
        }
    }

    /// Position as `[longitude, latitude]`, the (x, y) order used for gridding.
    pub fn position(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Whether the depth magnitude is strictly below `threshold`.
    ///
    /// NaN depths never pass.
    pub fn is_within_depth(&self, threshold: f64) -> bool {
        self.depth.abs() < threshold
    }
}
