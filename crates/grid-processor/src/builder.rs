//! Assembly of the render-ready depth map.

use bathy_common::{axis_ticks, BoundingBox, DepthMap, DepthMapConfig, GridAxis, Sample};
use tracing::{debug, info, warn};

use crate::error::{GridProcessorError, Result};
use crate::interpolation::interpolate_linear;

/// Bound, grid and interpolate `samples`, and attach axis/colorbar metadata.
///
/// `samples` are expected to be sanitized already.
pub fn build_depth_map(samples: Vec<Sample>, config: &DepthMapConfig) -> Result<DepthMap> {
    config.validate()?;

    if let Some((index, s)) = samples
        .iter()
        .enumerate()
        .find(|(_, s)| !(s.latitude.is_finite() && s.longitude.is_finite() && s.depth.is_finite()))
    {
        return Err(GridProcessorError::NonFiniteSample {
            index,
            latitude: s.latitude,
            longitude: s.longitude,
            depth: s.depth,
        });
    }

    let bbox = BoundingBox::from_samples(&samples).ok_or(GridProcessorError::NoSamples)?;
    if bbox.is_degenerate() {
        warn!(
            lon_extent = bbox.width(),
            lat_extent = bbox.height(),
            "Survey has zero extent on at least one axis"
        );
    }

    let lon_axis = GridAxis::linspace(bbox.min_lon, bbox.max_lon, config.num_longitude_points);
    let lat_axis = GridAxis::linspace(bbox.min_lat, bbox.max_lat, config.num_latitude_points);

    let grid = interpolate_linear(&samples, &lon_axis, &lat_axis);
    let color_limit = grid.max_abs().map(f64::from);

    let colorbar_ticks = match color_limit {
        Some(limit) => GridAxis::linspace(limit, -limit, config.color_label_ticks)
            .values()
            .to_vec(),
        None => {
            warn!("No grid cell lies inside the survey hull; depth map will be empty");
            Vec::new()
        }
    };

    debug!(
        min_lon = bbox.min_lon,
        max_lon = bbox.max_lon,
        min_lat = bbox.min_lat,
        max_lat = bbox.max_lat,
        color_limit = ?color_limit,
        "Depth map bounds"
    );

    info!(
        samples = samples.len(),
        width = grid.width,
        height = grid.height,
        valid_cells = grid.valid_count(),
        "Built depth map"
    );

    Ok(DepthMap {
        bbox,
        width: grid.width,
        height: grid.height,
        longitudes: lon_axis.values().to_vec(),
        latitudes: lat_axis.values().to_vec(),
        depths: grid.values,
        longitude_ticks: axis_ticks(
            bbox.min_lon,
            bbox.max_lon,
            config.lat_lon_ticks,
            config.tick_precision,
        ),
        latitude_ticks: axis_ticks(
            bbox.min_lat,
            bbox.max_lat,
            config.lat_lon_ticks,
            config.tick_precision,
        ),
        colorbar_ticks,
        color_limit,
        line_levels: config.line_levels,
        color_levels: config.color_levels,
        samples,
    })
}
