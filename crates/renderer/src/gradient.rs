//! Color ramps and banded value scales for filled depth contours.

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Linear color interpolation
fn interpolate_color(color1: Color, color2: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let t_inv = 1.0 - t;

    Color::new(
        ((color1.r as f32 * t_inv) + (color2.r as f32 * t)).round() as u8,
        ((color1.g as f32 * t_inv) + (color2.g as f32 * t)).round() as u8,
        ((color1.b as f32 * t_inv) + (color2.b as f32 * t)).round() as u8,
        ((color1.a as f32 * t_inv) + (color2.a as f32 * t)).round() as u8,
    )
}

/// A piecewise-linear color ramp over the normalized range `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Colormap {
    stops: Vec<Color>,
}

impl Colormap {
    /// Evenly spaced stops from 0 to 1. Needs at least one color.
    pub fn new(stops: Vec<Color>) -> Option<Self> {
        if stops.is_empty() {
            return None;
        }
        Some(Self { stops })
    }

    /// ColorBrewer sequential "Blues": near-white at 0, navy at 1.
    pub fn blues() -> Self {
        Self {
            stops: vec![
                Color::rgb(247, 251, 255),
                Color::rgb(222, 235, 247),
                Color::rgb(198, 219, 239),
                Color::rgb(158, 202, 225),
                Color::rgb(107, 174, 214),
                Color::rgb(66, 146, 198),
                Color::rgb(33, 113, 181),
                Color::rgb(8, 81, 156),
                Color::rgb(8, 48, 107),
            ],
        }
    }

    /// Color at normalized position `t` (clamped to `[0, 1]`).
    pub fn at(&self, t: f32) -> Color {
        if self.stops.len() == 1 || t.is_nan() {
            return self.stops[0];
        }

        let t = t.clamp(0.0, 1.0);
        let segments = (self.stops.len() - 1) as f32;
        let pos = t * segments;
        let idx = (pos.floor() as usize).min(self.stops.len() - 2);
        interpolate_color(self.stops[idx], self.stops[idx + 1], pos - idx as f32)
    }
}

/// `bands` equal-width value intervals over `[min, max]`.
///
/// Each band is painted with the colormap at its midpoint, which gives the
/// stepped look of filled contours. The midpoint may be normalized over a
/// wider color range than the bands themselves cover (see
/// [`BandedScale::palette_over`]).
#[derive(Debug, Clone, Copy)]
pub struct BandedScale {
    pub min: f32,
    pub max: f32,
    pub bands: usize,
}

impl BandedScale {
    pub fn new(min: f32, max: f32, bands: usize) -> Self {
        Self {
            min,
            max,
            bands: bands.max(1),
        }
    }

    /// Value at the lower edge of `band` (`band == bands` gives `max`).
    pub fn edge(&self, band: usize) -> f32 {
        if band >= self.bands {
            return self.max;
        }
        self.min + (self.max - self.min) * band as f32 / self.bands as f32
    }

    /// Band containing `value`; values outside `[min, max]` clamp to the
    /// outermost band. `None` for NaN.
    pub fn band_of(&self, value: f32) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        let range = self.max - self.min;
        if range <= 0.0 {
            return Some(self.bands / 2);
        }
        let t = (value - self.min) / range;
        Some(((t * self.bands as f32).floor().max(0.0) as usize).min(self.bands - 1))
    }

    /// Value halfway between the edges of `band`.
    pub fn midpoint(&self, band: usize) -> f32 {
        (self.edge(band) + self.edge(band + 1)) / 2.0
    }

    /// Colors of every band, lowest first, with each midpoint placed on the
    /// colormap relative to `[lo, hi]`. A zero-width range maps to 0.5.
    pub fn palette_over(&self, colormap: &Colormap, lo: f32, hi: f32) -> Vec<Color> {
        let range = hi - lo;
        (0..self.bands)
            .map(|b| {
                let t = if range > 0.0 { (self.midpoint(b) - lo) / range } else { 0.5 };
                colormap.at(t)
            })
            .collect()
    }
}

/// Sample row-major grid data at fractional index `(x, y)` with bilinear
/// interpolation.
///
/// Returns NaN outside the grid or when any of the four neighbours is NaN,
/// so undefined cells never bleed into defined ones.
pub fn sample_bilinear(data: &[f32], width: usize, height: usize, x: f32, y: f32) -> f32 {
    if width == 0 || height == 0 || data.len() != width * height {
        return f32::NAN;
    }
    if x < 0.0 || y < 0.0 || x > (width - 1) as f32 || y > (height - 1) as f32 {
        return f32::NAN;
    }

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(width - 1);
    let y1 = (y0 + 1).min(height - 1);

    let dx = x - x0 as f32;
    let dy = y - y0 as f32;

    let v00 = data[y0 * width + x0];
    let v10 = data[y0 * width + x1];
    let v01 = data[y1 * width + x0];
    let v11 = data[y1 * width + x1];

    if v00.is_nan() || v10.is_nan() || v01.is_nan() || v11.is_nan() {
        return f32::NAN;
    }

    let top = v00 * (1.0 - dx) + v10 * dx;
    let bottom = v01 * (1.0 - dx) + v11 * dx;
    top * (1.0 - dy) + bottom * dy
}
