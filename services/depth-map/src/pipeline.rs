//! Batch pipeline: one survey file in, one figure out.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use bathy_common::{DepthMap, DepthMapConfig};
use grid_processor::build_depth_map;
use ingestion::Ingester;
use renderer::render_depth_map_png;

use crate::config::RunOptions;

/// Counts reported after a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub valid_cells: usize,
    pub png_bytes: usize,
}

/// An interpolated survey plus the ingestion row counts.
#[derive(Debug, Clone)]
pub struct SurveyMap {
    pub map: DepthMap,
    /// Data rows in the CSV, header excluded
    pub rows_read: usize,
    /// Rows removed by the depth sanity filter
    pub rows_dropped: usize,
}

/// Load, sanitize and interpolate `input`.
pub fn build_depth_map_from_csv(input: &Path, config: &DepthMapConfig) -> Result<SurveyMap> {
    let ingested = Ingester::new(config.depth_sanity_constraint).ingest_file(input)?;
    let (rows_read, rows_dropped) = (ingested.rows_read, ingested.rows_dropped);

    let map = build_depth_map(ingested.samples, config)
        .with_context(|| format!("Failed to interpolate {}", input.display()))?;

    Ok(SurveyMap {
        map,
        rows_read,
        rows_dropped,
    })
}

/// Run the whole pipeline and write the figure (and optional JSON dump).
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    let start = Instant::now();

    let SurveyMap {
        map,
        rows_read,
        rows_dropped,
    } = build_depth_map_from_csv(&options.input, &options.depth_map)?;

    let png = render_depth_map_png(&map, &options.figure).context("Failed to render depth map")?;
    fs::write(&options.output, &png)
        .with_context(|| format!("Failed to write {}", options.output.display()))?;

    if let Some(path) = &options.grid_json {
        let json = map.to_json_pretty().context("Failed to serialize depth map")?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "Wrote depth map JSON");
    }

    let summary = RunSummary {
        rows_read,
        rows_dropped,
        valid_cells: map.valid_cells(),
        png_bytes: png.len(),
    };

    info!(
        input = %options.input.display(),
        output = %options.output.display(),
        rows_read = summary.rows_read,
        rows_dropped = summary.rows_dropped,
        valid_cells = summary.valid_cells,
        png_bytes = summary.png_bytes,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Depth map written"
    );

    Ok(summary)
}
