//! The finished depth map handed to renderers.

use serde::Serialize;

use crate::{BoundingBox, Sample, Tick};

/// Interpolated depth grid plus everything needed to draw it.
///
/// `depths` is row-major with `height` rows of `width` values; row `j`
/// corresponds to `latitudes[j]` and column `i` to `longitudes[i]`.
/// Cells outside the convex hull of the samples are NaN (`null` in JSON).
#[derive(Debug, Clone, Serialize)]
pub struct DepthMap {
    pub bbox: BoundingBox,
    pub width: usize,
    pub height: usize,
    pub longitudes: Vec<f64>,
    pub latitudes: Vec<f64>,
    pub depths: Vec<f32>,
    /// Sanitized samples, drawn as measurement markers.
    pub samples: Vec<Sample>,
    pub longitude_ticks: Vec<Tick>,
    pub latitude_ticks: Vec<Tick>,
    /// Colorbar tick values from `+limit` down to `-limit`.
    pub colorbar_ticks: Vec<f64>,
    /// `max(|depth|)` over non-missing cells; `None` if every cell is missing.
    pub color_limit: Option<f64>,
    pub line_levels: usize,
    pub color_levels: usize,
}

impl DepthMap {
    /// Depth at column `i`, row `j`.
    pub fn depth_at(&self, i: usize, j: usize) -> Option<f32> {
        if i >= self.width || j >= self.height {
            return None;
        }
        self.depths.get(j * self.width + i).copied()
    }

    /// Number of cells with a defined depth.
    pub fn valid_cells(&self) -> usize {
        self.depths.iter().filter(|v| !v.is_nan()).count()
    }

    /// `(min, max)` over non-missing depths; `None` if every cell is missing.
    pub fn depth_range(&self) -> Option<(f32, f32)> {
        self.depths
            .iter()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((v.min(lo), v.max(hi))),
            })
    }

    /// Symmetric color scale bounds `(-limit, +limit)`.
    pub fn color_range(&self) -> Option<(f64, f64)> {
        self.color_limit.map(|m| (-m, m))
    }

    /// Pretty-printed JSON; missing depths become `null`.
    pub fn to_json_pretty(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }
}
