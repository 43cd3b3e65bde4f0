//! End-to-end figure rendering from interpolated depth maps.

use std::collections::HashSet;

use bathy_common::{DepthMapConfig, Sample};
use grid_processor::build_depth_map;
use renderer::gradient::Colormap;
use renderer::{
    depth_bands, isoline_levels, render_depth_map, render_depth_map_png, FigureConfig, Layout, RenderError,
};
use test_utils::{create_bowl_survey, create_survey_line};
use tiny_skia::Pixmap;

fn to_samples(rows: &[(f64, f64, f64)]) -> Vec<Sample> {
    rows.iter()
        .map(|&(lat, lon, depth)| Sample::new(lat, lon, depth))
        .collect()
}

fn small_figure() -> FigureConfig {
    FigureConfig::default().with_size(600, 450)
}

fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> [u8; 4] {
    let idx = ((y * pixmap.width() + x) * 4) as usize;
    pixmap.data()[idx..idx + 4].try_into().unwrap()
}

/// Pixels strictly inside the plot frame.
fn plot_pixels<'a>(pixmap: &'a Pixmap, layout: &Layout) -> impl Iterator<Item = [u8; 4]> + 'a {
    let plot = layout.plot;
    let (x0, x1) = (plot.left as u32 + 2, plot.right as u32 - 2);
    let (y0, y1) = (plot.top as u32 + 2, plot.bottom as u32 - 2);
    (y0..y1).flat_map(move |y| (x0..x1).map(move |x| pixel(pixmap, x, y)))
}

fn is_blue(px: [u8; 4]) -> bool {
    px[2] > px[0].saturating_add(5)
}

// ============================================================================
// Filled survey
// ============================================================================

#[test]
fn test_survey_fills_plot_area() {
    let map = build_depth_map(to_samples(&create_bowl_survey(12, 12)), &DepthMapConfig::default()).unwrap();
    let config = small_figure();
    let layout = Layout::new(&config).unwrap();
    let pixmap = render_depth_map(&map, &config).unwrap();

    let total = plot_pixels(&pixmap, &layout).count();
    let blue = plot_pixels(&pixmap, &layout).filter(|&px| is_blue(px)).count();
    assert!(blue * 10 > total * 7, "only {} of {} plot pixels filled", blue, total);
}

#[test]
fn test_background_outside_plot_is_white() {
    let map = build_depth_map(to_samples(&create_bowl_survey(12, 12)), &DepthMapConfig::default()).unwrap();
    let pixmap = render_depth_map(&map, &small_figure()).unwrap();

    assert_eq!(pixel(&pixmap, 1, 1), [255, 255, 255, 255]);
    assert_eq!(pixel(&pixmap, 598, 1), [255, 255, 255, 255]);
}

#[test]
fn test_colorbar_runs_dark_to_light_downwards() {
    let map = build_depth_map(to_samples(&create_bowl_survey(12, 12)), &DepthMapConfig::default()).unwrap();
    let config = small_figure();
    let layout = Layout::new(&config).unwrap();
    let pixmap = render_depth_map(&map, &config).unwrap();

    let bar = layout.colorbar;
    let limit = map.color_limit.unwrap() as f32;
    let y_of = |depth: f32| (bar.bottom + (depth + limit) / (2.0 * limit) * (bar.top - bar.bottom)) as u32;
    let x = bar.center().x as u32;

    // +M (top) maps to the dark end of the ramp
    let lum = |p: [u8; 4]| p[0] as u32 + p[1] as u32 + p[2] as u32;
    let deep = pixel(&pixmap, x, y_of(18.0));
    let shallow = pixel(&pixmap, x, y_of(4.0));
    assert!(lum(deep) < lum(shallow), "{:?} vs {:?}", deep, shallow);

    // No cell is above the surface, so the lower half of the bar stays empty
    assert_eq!(pixel(&pixmap, x, y_of(-limit / 2.0)), [255, 255, 255, 255]);
}

#[test]
fn test_every_depth_band_is_painted() {
    let map = build_depth_map(to_samples(&create_bowl_survey(12, 10)), &DepthMapConfig::default()).unwrap();
    let config = FigureConfig::default();
    let layout = Layout::new(&config).unwrap();
    let pixmap = render_depth_map(&map, &config).unwrap();

    let bands = depth_bands(&map).unwrap();
    let (min, max) = map.depth_range().unwrap();
    assert_eq!((bands.min, bands.max), (min, max));

    let (lo, hi) = map.color_range().unwrap();
    let palette: Vec<[u8; 4]> = bands
        .palette_over(&Colormap::blues(), lo as f32, hi as f32)
        .into_iter()
        .map(|c| c.to_array())
        .collect();

    let painted: HashSet<usize> = plot_pixels(&pixmap, &layout)
        .filter_map(|px| palette.iter().position(|&c| c == px))
        .collect();
    assert!(
        painted.len() >= map.color_levels - 1,
        "only {} of {} bands painted",
        painted.len(),
        map.color_levels
    );
}

#[test]
fn test_isolines_follow_negated_depths() {
    let map = build_depth_map(to_samples(&create_bowl_survey(12, 10)), &DepthMapConfig::default()).unwrap();
    let (min, max) = map.depth_range().unwrap();
    assert!(min > 0.0);

    let levels = isoline_levels(&map);
    assert_eq!(levels.len(), map.line_levels);
    for level in &levels {
        assert!(*level > -max && *level < -min, "level {} outside ({}, {})", level, -max, -min);
    }
}

#[test]
fn test_markers_drawn_at_samples() {
    let samples = to_samples(&create_bowl_survey(6, 6));
    let map = build_depth_map(samples, &DepthMapConfig::default()).unwrap();
    let config = small_figure();
    let layout = Layout::new(&config).unwrap();
    let pixmap = render_depth_map(&map, &config).unwrap();

    // The south-west sample sits on the lower-left corner of the frame
    let corner = pixel(&pixmap, layout.plot.left as u32, layout.plot.bottom as u32 - 1);
    assert!(corner[0] < 80 && corner[1] < 80 && corner[2] < 80, "{:?}", corner);
}

#[test]
fn test_render_is_deterministic() {
    let samples = to_samples(&create_bowl_survey(10, 8));
    let map = build_depth_map(samples, &DepthMapConfig::default()).unwrap();

    let a = render_depth_map_png(&map, &small_figure()).unwrap();
    let b = render_depth_map_png(&map, &small_figure()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_png_has_requested_size() {
    let map = build_depth_map(to_samples(&create_bowl_survey(8, 8)), &DepthMapConfig::default()).unwrap();
    let png = render_depth_map_png(&map, &small_figure()).unwrap();

    assert_eq!(&png[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    assert_eq!(u32::from_be_bytes(png[16..20].try_into().unwrap()), 600);
    assert_eq!(u32::from_be_bytes(png[20..24].try_into().unwrap()), 450);
}

// ============================================================================
// Empty and degenerate grids
// ============================================================================

#[test]
fn test_collinear_survey_leaves_plot_unfilled() {
    let samples = to_samples(&create_survey_line(0.0, 0.0, 0.5, 0.5, 10));
    let map = build_depth_map(samples, &DepthMapConfig::default()).unwrap();
    assert!(map.color_limit.is_none());

    let config = small_figure();
    let layout = Layout::new(&config).unwrap();
    let pixmap = render_depth_map(&map, &config).unwrap();

    assert_eq!(plot_pixels(&pixmap, &layout).filter(|&px| is_blue(px)).count(), 0);
    // Upper-left quadrant is away from the diagonal of markers
    let x = (layout.plot.left + layout.plot.width() * 0.25) as u32;
    let y = (layout.plot.top + layout.plot.height() * 0.25) as u32;
    assert_eq!(pixel(&pixmap, x, y), [255, 255, 255, 255]);
}

#[test]
fn test_degenerate_extent_renders() {
    let samples = to_samples(&create_survey_line(10.0, 20.0, 0.0, 0.01, 5));
    let map = build_depth_map(samples, &DepthMapConfig::default()).unwrap();
    assert!(map.bbox.is_degenerate());

    let png = render_depth_map_png(&map, &small_figure()).unwrap();
    assert!(!png.is_empty());
}

// ============================================================================
// Configuration errors
// ============================================================================

#[test]
fn test_margins_larger_than_canvas() {
    let map = build_depth_map(to_samples(&create_bowl_survey(4, 4)), &DepthMapConfig::default()).unwrap();
    let err = render_depth_map(&map, &FigureConfig::default().with_size(200, 150)).unwrap_err();
    assert!(matches!(err, RenderError::Layout { width: 200, height: 150 }));
}
