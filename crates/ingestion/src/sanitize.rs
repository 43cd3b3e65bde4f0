//! Removal of out-of-water readings.

use bathy_common::Sample;

/// Samples that passed the depth sanity check, with drop statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Sanitized {
    samples: Vec<Sample>,
    total: usize,
}

impl Sanitized {
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }

    /// Samples before filtering.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn kept(&self) -> usize {
        self.samples.len()
    }

    pub fn dropped(&self) -> usize {
        self.total - self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.latitude)
    }

    pub fn longitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.longitude)
    }

    pub fn depths(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.depth)
    }
}

/// Keep samples with `|depth| < depth_sanity_constraint`, preserving order.
pub fn sanitize(samples: Vec<Sample>, depth_sanity_constraint: f64) -> Sanitized {
    let total = samples.len();
    let samples: Vec<Sample> = samples
        .into_iter()
        .filter(|s| s.is_within_depth(depth_sanity_constraint))
        .collect();

    Sanitized { samples, total }
}
