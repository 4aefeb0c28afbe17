//! World-space polygon geometry
//!
//! A polygon is a closed ring of vertices (first vertex not repeated) with a
//! consistent winding. Bounding boxes and edges are derived on demand and
//! never cached alongside the polygon.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A piece silhouette in world space
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<DVec2>,
}

/// Axis-aligned bounds (y grows downward, so `top <= bottom`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Whether an edge runs along the piece's local axes or across them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Straight,
    Diagonal,
}

/// One side of a polygon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: DVec2,
    pub end: DVec2,
    /// Unit vector from `start` to `end`
    pub direction: DVec2,
    pub length: f64,
    pub kind: EdgeKind,
}

impl Edge {
    pub fn new(start: DVec2, end: DVec2, kind: EdgeKind) -> Self {
        let delta = end - start;
        Self {
            start,
            end,
            direction: delta.normalize_or_zero(),
            length: delta.length(),
            kind,
        }
    }

    pub fn midpoint(&self) -> DVec2 {
        (self.start + self.end) * 0.5
    }
}

impl Polygon {
    /// Wrap a vertex ring. Callers supply at least three vertices.
    pub fn new(points: Vec<DVec2>) -> Self {
        debug_assert!(points.len() >= 3, "polygon needs at least 3 vertices");
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive vertex pairs, closing back to the first vertex
    pub fn segments(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Min/max reduction over the vertices
    pub fn bounding_box(&self) -> BoundingBox {
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        for &p in &self.points {
            min = min.min(p);
            max = max.max(p);
        }
        BoundingBox {
            left: min.x,
            top: min.y,
            right: max.x,
            bottom: max.y,
        }
    }

    /// Signed shoelace area (sign gives the winding)
    pub fn signed_area(&self) -> f64 {
        self.segments().map(|(a, b)| a.perp_dot(b)).sum::<f64>() * 0.5
    }

    /// Unit normals of every edge, used as separating-axis candidates
    pub fn edge_normals(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.segments()
            .map(|(a, b)| (b - a).perp().normalize_or_zero())
            .filter(|n| *n != DVec2::ZERO)
    }

    /// Project onto an axis, returning (min, max)
    pub fn project(&self, axis: DVec2) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &p in &self.points {
            let d = p.dot(axis);
            lo = lo.min(d);
            hi = hi.max(d);
        }
        (lo, hi)
    }

    /// Shortest distance from a point to the polygon boundary
    pub fn distance_to_point(&self, p: DVec2) -> f64 {
        self.segments()
            .map(|(a, b)| point_segment_distance(p, a, b))
            .fold(f64::INFINITY, f64::min)
    }

    /// Mirror across the vertical line `x = line_x`
    ///
    /// Vertex order is reversed so the winding matches the original.
    pub fn reflected_x(&self, line_x: f64) -> Polygon {
        let points = self
            .points
            .iter()
            .rev()
            .map(|p| DVec2::new(2.0 * line_x - p.x, p.y))
            .collect();
        Polygon::new(points)
    }

    /// True if both rings hold the same vertices (any start, same order) within `tolerance`
    pub fn matches(&self, other: &Polygon, tolerance: f64) -> bool {
        let n = self.points.len();
        if n != other.points.len() {
            return false;
        }
        (0..n).any(|offset| {
            (0..n).all(|i| self.points[i].distance(other.points[(i + offset) % n]) <= tolerance)
        })
    }
}

impl BoundingBox {
    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }
}

/// Distance from `p` to segment `a`-`b`
pub fn point_segment_distance(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let seg = b - a;
    let len_sq = seg.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(seg) / len_sq).clamp(0.0, 1.0);
    p.distance(a + seg * t)
}
