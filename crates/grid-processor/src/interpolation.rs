//! Linear interpolation of scattered soundings onto a regular grid.

use bathy_common::{GridAxis, Sample};

use crate::triangulation::Triangulation;
use crate::types::DepthGrid;

/// Piecewise-linear interpolant over the Delaunay triangulation of samples.
///
/// Undefined (None/NaN) outside the convex hull of the sample positions.
pub struct LinearInterpolator {
    depths: Vec<f64>,
    triangulation: Triangulation,
}

impl LinearInterpolator {
    /// Triangulate the `(longitude, latitude)` positions of `samples`.
    pub fn new(samples: &[Sample]) -> Self {
        let positions: Vec<[f64; 2]> = samples.iter().map(Sample::position).collect();
        Self {
            depths: samples.iter().map(|s| s.depth).collect(),
            triangulation: Triangulation::new(&positions),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangulation.triangle_count()
    }

    /// Interpolated depth at `(lon, lat)`, `None` outside the hull.
    pub fn value_at(&self, lon: f64, lat: f64) -> Option<f64> {
        let (vertices, weights) = self.triangulation.locate(lon, lat)?;
        Some(
            vertices
                .iter()
                .zip(weights.iter())
                .map(|(&v, &w)| self.depths[v] * w)
                .sum(),
        )
    }

    /// Evaluate on every node of the `lon_axis` x `lat_axis` grid.
    pub fn grid(&self, lon_axis: &GridAxis, lat_axis: &GridAxis) -> DepthGrid {
        let width = lon_axis.len();
        let height = lat_axis.len();

        if self.triangulation.is_empty() {
            tracing::warn!(
                samples = self.depths.len(),
                "Samples do not span an area; every grid cell is undefined"
            );
            return DepthGrid::missing(width, height);
        }

        let mut values = Vec::with_capacity(width * height);
        for &lat in lat_axis.values() {
            for &lon in lon_axis.values() {
                let value = self.value_at(lon, lat).map_or(f32::NAN, |v| v as f32);
                values.push(value);
            }
        }

        DepthGrid {
            width,
            height,
            values,
        }
    }
}

/// Linearly interpolate `samples` onto the grid spanned by the two axes.
pub fn interpolate_linear(samples: &[Sample], lon_axis: &GridAxis, lat_axis: &GridAxis) -> DepthGrid {
    let grid = LinearInterpolator::new(samples).grid(lon_axis, lat_axis);

    tracing::debug!(
        width = grid.width,
        height = grid.height,
        valid = grid.valid_count(),
        "Interpolated depth grid"
    );

    grid
}
