//! Synthetic survey generators.
//!
//! Each generator returns `(latitude, longitude, depth)` tuples laid out
//! the way a boat would collect them, with predictable depths so tests can
//! check interpolated values.

/// Origin used by the generators (a small lake).
pub const ORIGIN_LAT: f64 = 45.50;
pub const ORIGIN_LON: f64 = -122.70;

/// Spacing between survey lines in degrees (~55 m of latitude).
pub const LINE_SPACING: f64 = 0.0005;

/// Out-of-water reading emitted by the transducer.
pub const SENSOR_ERROR_DEPTH: f64 = 1_000_000.0;

/// Samples on a straight transect.
///
/// Starts at `(lat, lon)` and steps by `(dlat, dlon)`; depth is 2 m plus
/// 0.1 m per step.
pub fn create_survey_line(
    lat: f64,
    lon: f64,
    dlat: f64,
    dlon: f64,
    count: usize,
) -> Vec<(f64, f64, f64)> {
    (0..count)
        .map(|i| {
            let k = i as f64;
            (lat + k * dlat, lon + k * dlon, 2.0 + 0.1 * k)
        })
        .collect()
}

/// A lawnmower survey over a bowl-shaped basin.
///
/// `cols` samples per line, `rows` lines. Depth is deepest (20 m) at the
/// centre and shallowest (2 m) in the corners.
pub fn create_bowl_survey(cols: usize, rows: usize) -> Vec<(f64, f64, f64)> {
    let mut samples = Vec::with_capacity(cols * rows);
    let cx = (cols.max(2) - 1) as f64 / 2.0;
    let cy = (rows.max(2) - 1) as f64 / 2.0;
    let max_r2 = cx * cx + cy * cy;

    for row in 0..rows {
        // Alternate direction on each line like a real boat track
        let cols_iter: Box<dyn Iterator<Item = usize>> = if row % 2 == 0 {
            Box::new(0..cols)
        } else {
            Box::new((0..cols).rev())
        };

        for col in cols_iter {
            let dx = col as f64 - cx;
            let dy = row as f64 - cy;
            let r2 = (dx * dx + dy * dy) / max_r2.max(f64::EPSILON);
            let depth = 20.0 - 18.0 * r2;
            samples.push((
                ORIGIN_LAT + row as f64 * LINE_SPACING,
                ORIGIN_LON + col as f64 * LINE_SPACING,
                depth,
            ));
        }
    }

    samples
}

/// A survey over a planar bed: `depth = a + b * dlon + c * dlat`.
///
/// `dlon`/`dlat` are offsets from the origin in units of `LINE_SPACING`.
/// Linear interpolation must reproduce this field exactly inside the hull.
pub fn create_planar_survey(
    cols: usize,
    rows: usize,
    a: f64,
    b: f64,
    c: f64,
) -> Vec<(f64, f64, f64)> {
    let mut samples = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            samples.push((
                ORIGIN_LAT + row as f64 * LINE_SPACING,
                ORIGIN_LON + col as f64 * LINE_SPACING,
                a + b * col as f64 + c * row as f64,
            ));
        }
    }
    samples
}

/// Replace every `stride`-th sample's depth with the sensor error value.
///
/// Returns the number of samples corrupted.
pub fn inject_sensor_errors(samples: &mut [(f64, f64, f64)], stride: usize) -> usize {
    if stride == 0 {
        return 0;
    }
    let mut corrupted = 0;
    for (i, sample) in samples.iter_mut().enumerate() {
        if i % stride == 0 {
            sample.2 = SENSOR_ERROR_DEPTH;
            corrupted += 1;
        }
    }
    corrupted
}
