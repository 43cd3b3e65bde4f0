//! Delaunay triangulation of sample positions with point location.

use rstar::{Envelope, PointDistance, RTree, RTreeObject, AABB};

/// Tolerance for barycentric containment, in normalized coordinates.
///
/// Grid nodes that fall on a hull edge or a sample position must count as
/// inside.
const CONTAINMENT_EPS: f64 = 1e-10;

/// A triangle of the triangulation, indexed into the input points.
#[derive(Debug, Clone)]
pub struct Facet {
    vertices: [usize; 3],
    corners: [[f64; 2]; 3],
    /// Twice the signed area, cached for barycentric weights
    det: f64,
}

impl Facet {
    fn new(vertices: [usize; 3], corners: [[f64; 2]; 3]) -> Self {
        let [a, b, c] = corners;
        let det = (b[1] - c[1]) * (a[0] - c[0]) + (c[0] - b[0]) * (a[1] - c[1]);
        Self {
            vertices,
            corners,
            det,
        }
    }

    pub fn vertices(&self) -> [usize; 3] {
        self.vertices
    }

    /// Barycentric weights of `p` with respect to the three corners.
    pub fn barycentric(&self, p: &[f64; 2]) -> [f64; 3] {
        let [a, b, c] = self.corners;
        let l1 = ((b[1] - c[1]) * (p[0] - c[0]) + (c[0] - b[0]) * (p[1] - c[1])) / self.det;
        let l2 = ((c[1] - a[1]) * (p[0] - c[0]) + (a[0] - c[0]) * (p[1] - c[1])) / self.det;
        [l1, l2, 1.0 - l1 - l2]
    }

    fn is_degenerate(&self) -> bool {
        self.det == 0.0 || !self.det.is_finite()
    }
}

impl RTreeObject for Facet {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let [a, b, c] = self.corners;
        AABB::from_corners(
            [
                a[0].min(b[0]).min(c[0]) - CONTAINMENT_EPS,
                a[1].min(b[1]).min(c[1]) - CONTAINMENT_EPS,
            ],
            [
                a[0].max(b[0]).max(c[0]) + CONTAINMENT_EPS,
                a[1].max(b[1]).max(c[1]) + CONTAINMENT_EPS,
            ],
        )
    }
}

impl PointDistance for Facet {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        if self.contains_point(point) {
            return 0.0;
        }
        self.envelope().distance_2(point)
    }

    fn contains_point(&self, point: &[f64; 2]) -> bool {
        self.barycentric(point)
            .iter()
            .all(|&w| w >= -CONTAINMENT_EPS)
    }
}

/// Delaunay triangulation in normalized coordinates.
///
/// Positions are translated to the origin of their bounding box and divided
/// by its larger side, which keeps the aspect ratio (and therefore the
/// Delaunay property) while conditioning small survey extents.
pub struct Triangulation {
    origin: [f64; 2],
    scale: f64,
    tree: RTree<Facet>,
}

impl Triangulation {
    /// Triangulate `positions` given as `[x, y]`.
    ///
    /// Fewer than three non-collinear positions yield an empty triangulation.
    pub fn new(positions: &[[f64; 2]]) -> Self {
        let (origin, scale) = normalization(positions);

        let points: Vec<delaunator::Point> = positions
            .iter()
            .map(|p| delaunator::Point {
                x: (p[0] - origin[0]) / scale,
                y: (p[1] - origin[1]) / scale,
            })
            .collect();

        let triangulation = delaunator::triangulate(&points);
        let corner = |i: usize| [points[i].x, points[i].y];

        let facets: Vec<Facet> = triangulation
            .triangles
            .chunks_exact(3)
            .map(|t| Facet::new([t[0], t[1], t[2]], [corner(t[0]), corner(t[1]), corner(t[2])]))
            .filter(|f| !f.is_degenerate())
            .collect();

        tracing::debug!(
            points = positions.len(),
            triangles = facets.len(),
            hull = triangulation.hull.len(),
            "Built triangulation"
        );

        Self {
            origin,
            scale,
            tree: RTree::bulk_load(facets),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Triangle containing `(x, y)` and the barycentric weights of the point.
    ///
    /// `None` outside the convex hull. When the point lies on a shared edge
    /// the first triangle found is used; both give the same value there.
    pub fn locate(&self, x: f64, y: f64) -> Option<([usize; 3], [f64; 3])> {
        let p = [
            (x - self.origin[0]) / self.scale,
            (y - self.origin[1]) / self.scale,
        ];

        self.tree
            .locate_all_at_point(&p)
            .next()
            .map(|facet| (facet.vertices(), facet.barycentric(&p)))
    }
}

fn normalization(positions: &[[f64; 2]]) -> ([f64; 2], f64) {
    let Some(first) = positions.first() else {
        return ([0.0, 0.0], 1.0);
    };

    let (min, max) = positions.iter().fold((*first, *first), |(min, max), p| {
        (
            [min[0].min(p[0]), min[1].min(p[1])],
            [max[0].max(p[0]), max[1].max(p[1])],
        )
    });

    let extent = (max[0] - min[0]).max(max[1] - min[1]);
    let scale = if extent > 0.0 && extent.is_finite() {
        extent
    } else {
        1.0
    };
    (min, scale)
}
