//! Stroke-drawn text for axis labels and titles.
//!
//! Each glyph is a set of polylines on a unit cell: `u` runs left to right
//! over `[0, 1]`, `v` runs from the cap line (0) to the baseline (1), with
//! descenders reaching 1.25. Glyphs are stroked with tiny-skia, so text can be
//! placed at any angle without a font file.

use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::contour::Point;

type Polyline = &'static [(f32, f32)];

/// Glyph cell width relative to font size
const CHAR_WIDTH: f32 = 0.6;
/// Gap between glyph cells relative to font size
const CHAR_SPACING: f32 = 0.15;

/// Horizontal anchoring of text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Text appearance.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    /// Cap height in pixels
    pub size: f32,
    pub color: [u8; 4],
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            color: [0, 0, 0, 255],
        }
    }

    fn stroke_width(&self) -> f32 {
        (self.size * 0.1).max(1.0)
    }
}

/// Polylines for `ch`, or `None` when there is no drawing for it.
#[rustfmt::skip]
pub fn glyph(ch: char) -> Option<&'static [Polyline]> {
    let strokes: &'static [Polyline] = match ch {
        '0' => &[&[
            (0.25, 0.0), (0.75, 0.0), (1.0, 0.2), (1.0, 0.8), (0.75, 1.0),
            (0.25, 1.0), (0.0, 0.8), (0.0, 0.2), (0.25, 0.0),
        ]],
        '1' => &[&[(0.2, 0.2), (0.5, 0.0), (0.5, 1.0)], &[(0.2, 1.0), (0.8, 1.0)]],
        '2' => &[&[
            (0.0, 0.2), (0.25, 0.0), (0.75, 0.0), (1.0, 0.2), (1.0, 0.4),
            (0.0, 1.0), (1.0, 1.0),
        ]],
        '3' => &[
            &[
                (0.0, 0.1), (0.25, 0.0), (0.75, 0.0), (1.0, 0.15), (1.0, 0.35),
                (0.75, 0.5), (0.35, 0.5),
            ],
            &[
                (0.75, 0.5), (1.0, 0.65), (1.0, 0.85), (0.75, 1.0), (0.25, 1.0),
                (0.0, 0.9),
            ],
        ],
        '4' => &[&[(0.75, 1.0), (0.75, 0.0), (0.0, 0.7), (1.0, 0.7)]],
        '5' => &[&[
            (1.0, 0.0), (0.0, 0.0), (0.0, 0.45), (0.7, 0.45), (1.0, 0.6),
            (1.0, 0.85), (0.75, 1.0), (0.25, 1.0), (0.0, 0.9),
        ]],
        '6' => &[&[
            (0.9, 0.05), (0.6, 0.0), (0.3, 0.0), (0.0, 0.3), (0.0, 0.8),
            (0.25, 1.0), (0.75, 1.0), (1.0, 0.8), (1.0, 0.65), (0.75, 0.45),
            (0.25, 0.45), (0.0, 0.6),
        ]],
        '7' => &[&[(0.0, 0.0), (1.0, 0.0), (0.35, 1.0)]],
        '8' => &[&[
            (0.25, 0.5), (0.0, 0.3), (0.0, 0.15), (0.25, 0.0), (0.75, 0.0),
            (1.0, 0.15), (1.0, 0.3), (0.75, 0.5), (0.25, 0.5), (0.0, 0.7),
            (0.0, 0.85), (0.25, 1.0), (0.75, 1.0), (1.0, 0.85), (1.0, 0.7),
            (0.75, 0.5),
        ]],
        '9' => &[&[
            (0.1, 0.95), (0.4, 1.0), (0.7, 1.0), (1.0, 0.7), (1.0, 0.2),
            (0.75, 0.0), (0.25, 0.0), (0.0, 0.2), (0.0, 0.35), (0.25, 0.55),
            (0.75, 0.55), (1.0, 0.4),
        ]],
        '-' => &[&[(0.15, 0.55), (0.85, 0.55)]],
        '+' => &[&[(0.1, 0.55), (0.9, 0.55)], &[(0.5, 0.25), (0.5, 0.85)]],
        '.' => &[&[(0.45, 0.93), (0.55, 0.93), (0.55, 1.0), (0.45, 1.0), (0.45, 0.93)]],
        '(' => &[&[(0.7, -0.05), (0.4, 0.25), (0.4, 0.85), (0.7, 1.15)]],
        ')' => &[&[(0.3, -0.05), (0.6, 0.25), (0.6, 0.85), (0.3, 1.15)]],
        'D' => &[&[
            (0.0, 0.0), (0.0, 1.0), (0.6, 1.0), (1.0, 0.7), (1.0, 0.3),
            (0.6, 0.0), (0.0, 0.0),
        ]],
        'L' => &[&[(0.0, 0.0), (0.0, 1.0), (0.9, 1.0)]],
        'a' => &[
            &[(0.1, 0.55), (0.3, 0.5), (0.75, 0.5), (0.9, 0.6), (0.9, 1.0)],
            &[
                (0.9, 0.72), (0.25, 0.72), (0.05, 0.8), (0.05, 0.92), (0.25, 1.0),
                (0.7, 1.0), (0.9, 0.9),
            ],
        ],
        'd' => &[
            &[(1.0, 0.0), (1.0, 1.0)],
            &[
                (1.0, 0.6), (0.75, 0.5), (0.25, 0.5), (0.0, 0.65), (0.0, 0.85),
                (0.25, 1.0), (0.75, 1.0), (1.0, 0.9),
            ],
        ],
        'e' => &[&[
            (0.0, 0.75), (1.0, 0.75), (1.0, 0.6), (0.75, 0.5), (0.25, 0.5),
            (0.0, 0.65), (0.0, 0.85), (0.25, 1.0), (0.9, 1.0),
        ]],
        'g' => &[
            &[(1.0, 0.5), (1.0, 1.15), (0.75, 1.25), (0.15, 1.25)],
            &[
                (1.0, 0.6), (0.75, 0.5), (0.25, 0.5), (0.0, 0.65), (0.0, 0.8),
                (0.25, 0.95), (0.75, 0.95), (1.0, 0.85),
            ],
        ],
        'h' => &[
            &[(0.0, 0.0), (0.0, 1.0)],
            &[(0.0, 0.6), (0.3, 0.5), (0.75, 0.5), (1.0, 0.65), (1.0, 1.0)],
        ],
        'i' => &[&[(0.5, 0.5), (0.5, 1.0)], &[(0.5, 0.25), (0.5, 0.3)]],
        'm' => &[
            &[(0.0, 0.5), (0.0, 1.0)],
            &[(0.0, 0.6), (0.15, 0.5), (0.35, 0.5), (0.5, 0.6), (0.5, 1.0)],
            &[(0.5, 0.6), (0.65, 0.5), (0.85, 0.5), (1.0, 0.6), (1.0, 1.0)],
        ],
        'n' => &[
            &[(0.0, 0.5), (0.0, 1.0)],
            &[(0.0, 0.6), (0.3, 0.5), (0.75, 0.5), (1.0, 0.65), (1.0, 1.0)],
        ],
        'o' => &[&[
            (0.25, 0.5), (0.75, 0.5), (1.0, 0.65), (1.0, 0.85), (0.75, 1.0),
            (0.25, 1.0), (0.0, 0.85), (0.0, 0.65), (0.25, 0.5),
        ]],
        'p' => &[
            &[(0.0, 0.5), (0.0, 1.25)],
            &[
                (0.0, 0.6), (0.25, 0.5), (0.75, 0.5), (1.0, 0.65), (1.0, 0.85),
                (0.75, 1.0), (0.25, 1.0), (0.0, 0.9),
            ],
        ],
        't' => &[
            &[(0.4, 0.15), (0.4, 0.9), (0.55, 1.0), (0.9, 1.0)],
            &[(0.1, 0.5), (0.85, 0.5)],
        ],
        'u' => &[
            &[(0.0, 0.5), (0.0, 0.85), (0.25, 1.0), (0.7, 1.0), (1.0, 0.9)],
            &[(1.0, 0.5), (1.0, 1.0)],
        ],
        ' ' => &[],
        _ => return None,
    };
    Some(strokes)
}

/// Horizontal advance of `text` in pixels at font size `size`.
pub fn text_width(text: &str, size: f32) -> f32 {
    let count = text.chars().count();
    if count == 0 {
        return 0.0;
    }
    count as f32 * (CHAR_WIDTH + CHAR_SPACING) * size - CHAR_SPACING * size
}

/// Draw `text` with its vertical centre on `anchor`, rotated by `angle`
/// radians around the anchor (negative turns counter-clockwise on screen, so
/// `-π/2` reads bottom to top).
///
/// Characters without a glyph still take up space.
pub fn draw_text(pixmap: &mut Pixmap, text: &str, anchor: Point, align: Align, angle: f32, style: &TextStyle) {
    let size = style.size;
    let width = text_width(text, size);
    let offset = match align {
        Align::Left => 0.0,
        Align::Center => -width / 2.0,
        Align::Right => -width,
    };

    let (sin_a, cos_a) = angle.sin_cos();
    let place = |lx: f32, ly: f32| -> (f32, f32) {
        (
            anchor.x + lx * cos_a - ly * sin_a,
            anchor.y + lx * sin_a + ly * cos_a,
        )
    };

    let mut pb = PathBuilder::new();
    for (i, ch) in text.chars().enumerate() {
        let Some(strokes) = glyph(ch) else {
            continue;
        };
        let cell_x = offset + i as f32 * (CHAR_WIDTH + CHAR_SPACING) * size;

        for polyline in strokes {
            for (k, &(u, v)) in polyline.iter().enumerate() {
                let (x, y) = place(cell_x + u * CHAR_WIDTH * size, (v - 0.5) * size);
                if k == 0 {
                    pb.move_to(x, y);
                } else {
                    pb.line_to(x, y);
                }
            }
        }
    }

    let Some(path) = pb.finish() else {
        return;
    };

    let mut paint = Paint::default();
    let [r, g, b, a] = style.color;
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;

    let stroke = Stroke {
        width: style.stroke_width(),
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };

    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}
