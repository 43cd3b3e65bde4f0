//! Contour line (isoline) generation using the marching squares algorithm.
//!
//! Contours are traced in grid index space (`x` = column, `y` = row) and
//! mapped to pixels by the caller, so the same polylines can be placed in
//! any plot area.

use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// A point in 2D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn distance(&self, other: &Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A line segment between two points
#[derive(Debug, Clone)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// A complete contour line (polyline)
#[derive(Debug, Clone)]
pub struct Contour {
    pub level: f32,
    pub points: Vec<Point>,
    pub closed: bool,
}

/// Stroke style for contour lines
#[derive(Debug, Clone)]
pub struct ContourStyle {
    /// Line width in pixels
    pub line_width: f32,
    /// Line color [R, G, B, A]
    pub line_color: [u8; 4],
}

impl Default for ContourStyle {
    fn default() -> Self {
        Self {
            line_width: 0.8,
            line_color: [0, 0, 0, 255],
        }
    }
}

/// `count` evenly spaced levels strictly inside `(min_value, max_value)`.
///
/// The extremes are excluded because an isoline at the exact minimum or
/// maximum degenerates to isolated points.
pub fn contour_levels(min_value: f32, max_value: f32, count: usize) -> Vec<f32> {
    if count == 0 || min_value.is_nan() || max_value.is_nan() || max_value <= min_value {
        return vec![];
    }

    let step = (max_value - min_value) / (count + 1) as f32;
    (1..=count).map(|k| min_value + step * k as f32).collect()
}

/// Marching squares algorithm to generate contour lines
///
/// # Arguments
/// * `data` - Grid data in row-major order
/// * `width` - Grid width
/// * `height` - Grid height
/// * `level` - Contour level to extract
///
/// # Returns
/// Vector of line segments representing the contour
pub fn march_squares(data: &[f32], width: usize, height: usize, level: f32) -> Vec<Segment> {
    if width < 2 || height < 2 || data.len() != width * height {
        return vec![];
    }

    let mut segments = Vec::new();

    for y in 0..(height - 1) {
        for x in 0..(width - 1) {
            let tl = data[y * width + x];
            let tr = data[y * width + x + 1];
            let bl = data[(y + 1) * width + x];
            let br = data[(y + 1) * width + x + 1];

            // Cells touching a missing value have no defined surface
            if tl.is_nan() || tr.is_nan() || bl.is_nan() || br.is_nan() {
                continue;
            }

            let mut cell_index = 0;
            if tl >= level {
                cell_index |= 1;
            }
            if tr >= level {
                cell_index |= 2;
            }
            if br >= level {
                cell_index |= 4;
            }
            if bl >= level {
                cell_index |= 8;
            }

            segments.extend(get_cell_segments(
                cell_index,
                x as f32,
                y as f32,
                [tl, tr, br, bl],
                level,
            ));
        }
    }

    segments
}

/// Get line segments for a marching squares cell
///
/// Corners are ordered top-left, top-right, bottom-right, bottom-left.
fn get_cell_segments(cell_index: u8, x: f32, y: f32, corners: [f32; 4], level: f32) -> Vec<Segment> {
    let [tl, tr, br, bl] = corners;

    let top = interpolate_edge(x, y, x + 1.0, y, tl, tr, level);
    let right = interpolate_edge(x + 1.0, y, x + 1.0, y + 1.0, tr, br, level);
    let bottom = interpolate_edge(x, y + 1.0, x + 1.0, y + 1.0, bl, br, level);
    let left = interpolate_edge(x, y, x, y + 1.0, tl, bl, level);

    let seg = |start, end| Segment { start, end };

    match cell_index {
        0 | 15 => vec![],
        1 | 14 => vec![seg(left, top)],
        2 | 13 => vec![seg(top, right)],
        3 | 12 => vec![seg(left, right)],
        4 | 11 => vec![seg(right, bottom)],
        // Saddles: resolve using the cell centre average
        5 => {
            if (tl + tr + br + bl) / 4.0 >= level {
                vec![seg(left, bottom), seg(top, right)]
            } else {
                vec![seg(left, top), seg(right, bottom)]
            }
        }
        6 | 9 => vec![seg(top, bottom)],
        7 | 8 => vec![seg(left, bottom)],
        10 => {
            if (tl + tr + br + bl) / 4.0 >= level {
                vec![seg(left, top), seg(right, bottom)]
            } else {
                vec![seg(top, right), seg(left, bottom)]
            }
        }
        _ => vec![],
    }
}

/// Linearly interpolate between two edge points based on data values
fn interpolate_edge(x1: f32, y1: f32, x2: f32, y2: f32, val1: f32, val2: f32, level: f32) -> Point {
    if (val2 - val1).abs() < 1e-6 {
        return Point::new((x1 + x2) / 2.0, (y1 + y2) / 2.0);
    }

    let t = ((level - val1) / (val2 - val1)).clamp(0.0, 1.0);

    Point::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1))
}

/// Connect line segments into continuous polylines
///
/// Takes a collection of unordered segments and chains them end to end,
/// growing each polyline at both ends.
pub fn connect_segments(segments: Vec<Segment>) -> Vec<Contour> {
    const EPSILON: f32 = 0.001;

    let mut contours = Vec::new();
    let mut used = vec![false; segments.len()];

    for start_idx in 0..segments.len() {
        if used[start_idx] {
            continue;
        }
        used[start_idx] = true;

        let mut points = vec![segments[start_idx].start, segments[start_idx].end];

        // Extend the tail, then reverse and extend what was the head
        for _ in 0..2 {
            loop {
                let Some(current_end) = points.last().copied() else {
                    break;
                };

                let next = segments.iter().enumerate().find_map(|(i, seg)| {
                    if used[i] {
                        None
                    } else if seg.start.distance(&current_end) < EPSILON {
                        Some((i, seg.end))
                    } else if seg.end.distance(&current_end) < EPSILON {
                        Some((i, seg.start))
                    } else {
                        None
                    }
                });

                match next {
                    Some((i, point)) => {
                        used[i] = true;
                        points.push(point);
                    }
                    None => break,
                }
            }
            points.reverse();
        }

        let closed = points.len() > 2
            && match (points.first(), points.last()) {
                (Some(first), Some(last)) => first.distance(last) < EPSILON,
                _ => false,
            };

        contours.push(Contour {
            level: 0.0, // Set by caller
            points,
            closed,
        });
    }

    contours
}

/// Generate all contours for the given levels
pub fn generate_all_contours(data: &[f32], width: usize, height: usize, levels: &[f32]) -> Vec<Contour> {
    let mut all_contours = Vec::new();

    for &level in levels {
        let segments = march_squares(data, width, height, level);
        let mut contours = connect_segments(segments);

        for contour in &mut contours {
            contour.level = level;
        }

        all_contours.extend(contours);
    }

    tracing::debug!(
        levels = levels.len(),
        num_contours = all_contours.len(),
        total_points = all_contours.iter().map(|c| c.points.len()).sum::<usize>(),
        "Generated contours"
    );

    all_contours
}

/// Stroke contours onto an existing pixmap.
///
/// `to_pixel` maps grid index space to pixel coordinates.
pub fn stroke_contours<F>(pixmap: &mut Pixmap, contours: &[Contour], style: &ContourStyle, to_pixel: F)
where
    F: Fn(Point) -> Point,
{
    let mut paint = Paint::default();
    let [r, g, b, a] = style.line_color;
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;

    let stroke = Stroke {
        width: style.line_width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };

    for contour in contours {
        let mut points = contour.points.iter().map(|&p| to_pixel(p));
        let Some(first) = points.next() else {
            continue;
        };

        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for point in points {
            pb.line_to(point.x, point.y);
        }
        if contour.closed {
            pb.close();
        }

        if let Some(path) = pb.finish() {
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }
}
