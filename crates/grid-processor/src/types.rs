//! Core types for gridded depth data.

/// Interpolated depths on a regular grid.
///
/// Row-major: `values[j * width + i]` is the depth at longitude index `i`,
/// latitude index `j`. Missing cells are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthGrid {
    pub width: usize,
    pub height: usize,
    pub values: Vec<f32>,
}

impl DepthGrid {
    /// A grid with every cell missing.
    pub fn missing(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            values: vec![f32::NAN; width * height],
        }
    }

    /// Raw cell value (NaN when missing), `None` when out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        if i >= self.width || j >= self.height {
            return None;
        }
        self.values.get(j * self.width + i).copied()
    }

    /// Cell value, `None` when missing or out of range.
    pub fn value(&self, i: usize, j: usize) -> Option<f32> {
        self.get(i, j).filter(|v| !v.is_nan())
    }

    /// Number of cells with a defined depth.
    pub fn valid_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_nan()).count()
    }

    /// `(min, max)` over defined cells.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        self.values
            .iter()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// `max(|depth|)` over defined cells.
    pub fn max_abs(&self) -> Option<f32> {
        self.value_range().map(|(lo, hi)| lo.abs().max(hi.abs()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
