//! Depth map figure: filled bands, isolines, sample markers, axes and a
//! colorbar on a white canvas.
//!
//! Layers are painted bottom to top in that order, so markers stay visible
//! above both contour layers.

use std::f32::consts::FRAC_PI_2;

use bathy_common::DepthMap;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};
use tracing::debug;

use crate::contour::{contour_levels, generate_all_contours, stroke_contours, ContourStyle, Point};
use crate::error::{RenderError, Result};
use crate::glyphs::{draw_text, text_width, Align, TextStyle};
use crate::gradient::{sample_bilinear, BandedScale, Color, Colormap};
use crate::png::create_png_auto;

/// Figure geometry and styling.
#[derive(Debug, Clone)]
pub struct FigureConfig {
    pub width: u32,
    pub height: u32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    /// Space between the plot frame and the colorbar
    pub colorbar_gap: f32,
    pub colorbar_width: f32,
    /// Tick label cap height in pixels
    pub font_size: f32,
    /// Axis title cap height in pixels
    pub title_font_size: f32,
    pub tick_length: f32,
    pub contour_style: ContourStyle,
    pub marker_radius: f32,
    pub marker_color: [u8; 4],
    /// Decimal places for colorbar tick labels
    pub colorbar_precision: usize,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 900,
            margin_left: 130.0,
            margin_right: 190.0,
            margin_top: 40.0,
            margin_bottom: 150.0,
            colorbar_gap: 30.0,
            colorbar_width: 24.0,
            font_size: 10.0,
            title_font_size: 13.0,
            tick_length: 5.0,
            contour_style: ContourStyle::default(),
            marker_radius: 2.0,
            marker_color: [0, 0, 0, 255],
            colorbar_precision: 2,
        }
    }
}

impl FigureConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// A rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Area {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    fn rect(&self) -> Option<Rect> {
        Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

/// Placement of the plot frame and the colorbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub plot: Area,
    pub colorbar: Area,
}

impl Layout {
    pub fn new(config: &FigureConfig) -> Result<Self> {
        let plot = Area {
            left: config.margin_left,
            top: config.margin_top,
            right: config.width as f32 - config.margin_right,
            bottom: config.height as f32 - config.margin_bottom,
        };

        let colorbar_left = plot.right + config.colorbar_gap;
        let colorbar = Area {
            left: colorbar_left,
            top: plot.top,
            right: colorbar_left + config.colorbar_width,
            bottom: plot.bottom,
        };

        if plot.width() < 1.0 || plot.height() < 1.0 || colorbar.right > config.width as f32 {
            return Err(RenderError::Layout {
                width: config.width,
                height: config.height,
            });
        }

        Ok(Self { plot, colorbar })
    }
}

/// Linear map from data values to pixel positions.
///
/// A zero-width data range collapses onto the middle of the pixel range.
#[derive(Debug, Clone, Copy)]
struct LinearScale {
    data_min: f64,
    data_max: f64,
    pixel_start: f32,
    pixel_end: f32,
}

impl LinearScale {
    fn map(&self, value: f64) -> f32 {
        let span = self.data_max - self.data_min;
        if span == 0.0 || !span.is_finite() {
            return (self.pixel_start + self.pixel_end) / 2.0;
        }
        let t = ((value - self.data_min) / span) as f32;
        self.pixel_start + t * (self.pixel_end - self.pixel_start)
    }
}

/// Render the depth map to an RGBA pixmap.
pub fn render_depth_map(map: &DepthMap, config: &FigureConfig) -> Result<Pixmap> {
    let layout = Layout::new(config)?;
    let mut pixmap = Pixmap::new(config.width, config.height).ok_or(RenderError::Canvas {
        width: config.width,
        height: config.height,
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let x_scale = LinearScale {
        data_min: map.bbox.min_lon,
        data_max: map.bbox.max_lon,
        pixel_start: layout.plot.left,
        pixel_end: layout.plot.right,
    };
    // Latitude grows upwards
    let y_scale = LinearScale {
        data_min: map.bbox.min_lat,
        data_max: map.bbox.max_lat,
        pixel_start: layout.plot.bottom,
        pixel_end: layout.plot.top,
    };

    let colormap = Colormap::blues();
    let filled = match (depth_bands(map), map.color_range()) {
        (Some(bands), Some((lo, hi))) => {
            let palette = bands.palette_over(&colormap, lo as f32, hi as f32);
            Some((bands, palette))
        }
        _ => None,
    };

    if let Some((bands, palette)) = &filled {
        fill_bands(&mut pixmap, map, &layout.plot, bands, palette);
        draw_isolines(&mut pixmap, map, &layout.plot, &config.contour_style);
    }
    draw_markers(&mut pixmap, map, x_scale, y_scale, config);
    draw_axes(&mut pixmap, map, &layout.plot, x_scale, y_scale, config);
    draw_colorbar(&mut pixmap, map, &layout.colorbar, filled.as_ref(), config);

    debug!(
        width = config.width,
        height = config.height,
        valid_cells = map.valid_cells(),
        samples = map.samples.len(),
        "Rendered depth map figure"
    );

    Ok(pixmap)
}

/// Render the depth map and encode it as PNG.
pub fn render_depth_map_png(map: &DepthMap, config: &FigureConfig) -> Result<Vec<u8>> {
    let pixmap = render_depth_map(map, config)?;
    create_png_auto(pixmap.data(), pixmap.width() as usize, pixmap.height() as usize)
}

/// Fill bands spanning the defined depths, `None` when every cell is
/// missing.
///
/// Band colors are taken relative to the symmetric `[-limit, +limit]`
/// color range, so a survey that never reaches negative depths uses only
/// the darker half of the ramp.
pub fn depth_bands(map: &DepthMap) -> Option<BandedScale> {
    let (min, max) = map.depth_range()?;
    Some(BandedScale::new(min, max, map.color_levels))
}

/// Levels of the isolines traced over the negated depth grid.
pub fn isoline_levels(map: &DepthMap) -> Vec<f32> {
    match map.depth_range() {
        Some((min, max)) => contour_levels(-max, -min, map.line_levels),
        None => vec![],
    }
}

/// Paint each plot pixel with the band color of the bilinearly resampled
/// depth. Pixels over missing cells keep the background.
fn fill_bands(pixmap: &mut Pixmap, map: &DepthMap, plot: &Area, bands: &BandedScale, palette: &[Color]) {
    if map.width < 2 || map.height < 2 {
        return;
    }

    let canvas_width = pixmap.width() as usize;
    let canvas_height = pixmap.height() as usize;
    let grid_w = (map.width - 1) as f32;
    let grid_h = (map.height - 1) as f32;

    let x_start = plot.left.floor().max(0.0) as usize;
    let x_end = (plot.right.ceil() as usize).min(canvas_width);
    let y_start = plot.top.floor().max(0.0) as usize;
    let y_end = (plot.bottom.ceil() as usize).min(canvas_height);

    let data = pixmap.data_mut();
    for py in y_start..y_end {
        let cy = py as f32 + 0.5;
        let gy = (plot.bottom - cy) / plot.height() * grid_h;

        for px in x_start..x_end {
            let cx = px as f32 + 0.5;
            let gx = (cx - plot.left) / plot.width() * grid_w;

            let value = sample_bilinear(&map.depths, map.width, map.height, gx, gy);
            let Some(band) = bands.band_of(value) else {
                continue;
            };

            let idx = (py * canvas_width + px) * 4;
            data[idx..idx + 4].copy_from_slice(&palette[band].to_array());
        }
    }
}

/// Isolines of the negated depth grid.
fn draw_isolines(pixmap: &mut Pixmap, map: &DepthMap, plot: &Area, style: &ContourStyle) {
    if map.width < 2 || map.height < 2 {
        return;
    }

    let negated: Vec<f32> = map.depths.iter().map(|d| -d).collect();
    let levels = isoline_levels(map);
    let contours = generate_all_contours(&negated, map.width, map.height, &levels);

    let grid_w = (map.width - 1) as f32;
    let grid_h = (map.height - 1) as f32;
    stroke_contours(pixmap, &contours, style, |p| {
        Point::new(
            plot.left + p.x / grid_w * plot.width(),
            plot.bottom - p.y / grid_h * plot.height(),
        )
    });
}

fn draw_markers(pixmap: &mut Pixmap, map: &DepthMap, x_scale: LinearScale, y_scale: LinearScale, config: &FigureConfig) {
    let mut pb = PathBuilder::new();
    for sample in &map.samples {
        pb.push_circle(
            x_scale.map(sample.longitude),
            y_scale.map(sample.latitude),
            config.marker_radius,
        );
    }
    let Some(path) = pb.finish() else {
        return;
    };

    let paint = solid_paint(config.marker_color);
    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
}

fn draw_axes(
    pixmap: &mut Pixmap,
    map: &DepthMap,
    plot: &Area,
    x_scale: LinearScale,
    y_scale: LinearScale,
    config: &FigureConfig,
) {
    let label_style = TextStyle::new(config.font_size);
    let title_style = TextStyle::new(config.title_font_size);
    let tick = config.tick_length;
    let pad = 3.0;

    let mut marks = Vec::new();

    // Longitude labels run vertically, hanging below their tick
    let mut longest_lon = 0.0f32;
    for t in &map.longitude_ticks {
        let x = x_scale.map(t.value);
        marks.push((Point::new(x, plot.bottom), Point::new(x, plot.bottom + tick)));
        draw_text(
            pixmap,
            &t.label,
            Point::new(x, plot.bottom + tick + pad),
            Align::Right,
            -FRAC_PI_2,
            &label_style,
        );
        longest_lon = longest_lon.max(text_width(&t.label, label_style.size));
    }

    let mut longest_lat = 0.0f32;
    for t in &map.latitude_ticks {
        let y = y_scale.map(t.value);
        marks.push((Point::new(plot.left - tick, y), Point::new(plot.left, y)));
        draw_text(
            pixmap,
            &t.label,
            Point::new(plot.left - tick - pad, y),
            Align::Right,
            0.0,
            &label_style,
        );
        longest_lat = longest_lat.max(text_width(&t.label, label_style.size));
    }

    stroke_segments(pixmap, &marks, 1.0);
    stroke_frame(pixmap, plot);

    let gap = title_style.size;
    draw_text(
        pixmap,
        "Longitude",
        Point::new(plot.center().x, plot.bottom + tick + pad + longest_lon + gap + title_style.size / 2.0),
        Align::Center,
        0.0,
        &title_style,
    );
    draw_text(
        pixmap,
        "Latitude",
        Point::new(plot.left - tick - pad - longest_lat - gap - title_style.size / 2.0, plot.center().y),
        Align::Center,
        -FRAC_PI_2,
        &title_style,
    );
}

fn draw_colorbar(
    pixmap: &mut Pixmap,
    map: &DepthMap,
    bar: &Area,
    filled: Option<&(BandedScale, Vec<Color>)>,
    config: &FigureConfig,
) {
    let label_style = TextStyle::new(config.font_size);
    let title_style = TextStyle::new(config.title_font_size);
    let tick = config.tick_length;
    let pad = 3.0;
    let mut longest = 0.0f32;

    if let (Some((bands, palette)), Some((lo, hi))) = (filled, map.color_range()) {
        // The bar spans the full color range; only the bands that occur are filled
        let scale = LinearScale {
            data_min: lo,
            data_max: hi,
            pixel_start: bar.bottom,
            pixel_end: bar.top,
        };

        for (band, &color) in palette.iter().enumerate() {
            let lower = scale.map(bands.edge(band) as f64);
            let upper = scale.map(bands.edge(band + 1) as f64);
            let area = Area {
                left: bar.left,
                top: upper.min(lower),
                right: bar.right,
                bottom: upper.max(lower),
            };
            fill_area(pixmap, &area, color);
        }

        let mut marks = Vec::new();
        for &value in &map.colorbar_ticks {
            let y = scale.map(value);
            marks.push((Point::new(bar.right, y), Point::new(bar.right + tick, y)));

            let label = format!("{:.*}", config.colorbar_precision, value);
            draw_text(
                pixmap,
                &label,
                Point::new(bar.right + tick + pad, y),
                Align::Left,
                0.0,
                &label_style,
            );
            longest = longest.max(text_width(&label, label_style.size));
        }
        stroke_segments(pixmap, &marks, 1.0);
    }

    stroke_frame(pixmap, bar);

    draw_text(
        pixmap,
        "Depth (m)",
        Point::new(
            bar.right + tick + pad + longest + title_style.size + title_style.size / 2.0,
            bar.center().y,
        ),
        Align::Center,
        -FRAC_PI_2,
        &title_style,
    );
}

fn solid_paint(color: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    let [r, g, b, a] = color;
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn fill_area(pixmap: &mut Pixmap, area: &Area, color: Color) {
    let Some(rect) = area.rect() else {
        return;
    };
    let mut paint = solid_paint(color.to_array());
    // Adjacent bands must not leave seams
    paint.anti_alias = false;
    pixmap.fill_rect(rect, &paint, Transform::identity(), None);
}

fn stroke_segments(pixmap: &mut Pixmap, segments: &[(Point, Point)], width: f32) {
    let mut pb = PathBuilder::new();
    for (a, b) in segments {
        pb.move_to(a.x, a.y);
        pb.line_to(b.x, b.y);
    }
    let Some(path) = pb.finish() else {
        return;
    };

    let stroke = Stroke {
        width,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &solid_paint(Color::BLACK.to_array()), &stroke, Transform::identity(), None);
}

fn stroke_frame(pixmap: &mut Pixmap, area: &Area) {
    let Some(rect) = area.rect() else {
        return;
    };
    let path = PathBuilder::from_rect(rect);
    let stroke = Stroke {
        width: 1.0,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &solid_paint(Color::BLACK.to_array()), &stroke, Transform::identity(), None);
}
