//! Regular grid axes and tick metadata.

use serde::{Deserialize, Serialize};

/// One axis of a regular grid: evenly spaced coordinates from `start` to `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridAxis {
    values: Vec<f64>,
}

impl GridAxis {
    /// `count` evenly spaced values over `[start, end]`.
    ///
    /// The first value is exactly `start` and the last exactly `end`.
    /// `count == 1` yields `[start]`, `count == 0` an empty axis.
    pub fn linspace(start: f64, end: f64, count: usize) -> Self {
        let values = match count {
            0 => Vec::new(),
            1 => vec![start],
            n => {
                let step = (end - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| if i == n - 1 { end } else { start + i as f64 * step })
                    .collect()
            }
        };
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// A labelled axis tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// `count` evenly spaced ticks over `[min, max]`, labelled with `precision`
/// decimal places.
pub fn axis_ticks(min: f64, max: f64, count: usize, precision: usize) -> Vec<Tick> {
    GridAxis::linspace(min, max, count)
        .values()
        .iter()
        .map(|&value| Tick {
            value,
            label: format!("{:.*}", precision, value),
        })
        .collect()
}
