//! Overlap, penetration and touching between placed pieces
//!
//! Overlap uses the Separating Axis Theorem over the edge normals of both
//! silhouettes (the templates are convex). Touching is a separate
//! classification: two pieces touch when they do not overlap and are either
//! in boundary contact or sit in one of the template adjacency patterns.
//!
//! Patterns are read in the pieces' shared local frame, so they only apply to
//! pieces with the same rotation. At rotation 0 the local frame is the world
//! frame.

use std::f64::consts::SQRT_2;

use super::piece::Piece;
use super::polygon::Polygon;
use super::transform::{body_center, bounding_box, vertices};
use crate::area::GameArea;
use crate::consts::SIGNIFICANT_PENETRATION;
use crate::{normalize_rotation, rotate_deg};

/// Rotation difference in degrees under which two pieces share a frame
const SHARED_FRAME_TOLERANCE: f64 = 1e-6;

/// Which adjacency pattern two pieces' body centres form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency {
    /// Side by side, centres one unit apart along the local x axis
    Horizontal,
    /// Stacked, centres one unit apart along the local y axis
    Vertical,
    /// Corner to corner on a local diagonal at one of the pattern distances
    Diagonal,
}

/// Minimum translation along any candidate axis that separates `a` and `b`
///
/// Zero (or negative, clamped to zero) when some axis already separates them.
fn polygon_penetration(a: &Polygon, b: &Polygon) -> f64 {
    let mut depth = f64::INFINITY;
    for axis in a.edge_normals().chain(b.edge_normals()) {
        let (a_min, a_max) = a.project(axis);
        let (b_min, b_max) = b.project(axis);
        let push = (a_max - b_min).min(b_max - a_min);
        if push <= 0.0 {
            return 0.0;
        }
        depth = depth.min(push);
    }
    if depth.is_finite() { depth } else { 0.0 }
}

/// Penetration depth between two pieces (>= 0)
pub fn penetration_depth(p1: &Piece, p2: &Piece, area: &GameArea) -> f64 {
    polygon_penetration(&vertices(p1, area), &vertices(p2, area))
}

/// True if the two silhouettes share positive area
///
/// Shared edges or corners are not an overlap.
pub fn overlaps(p1: &Piece, p2: &Piece, area: &GameArea) -> bool {
    penetration_depth(p1, p2, area) > area.overlap_epsilon()
}

/// Overlap deep enough to be meaningful rather than grazing contact
pub fn overlaps_significantly(p1: &Piece, p2: &Piece, area: &GameArea) -> bool {
    penetration_depth(p1, p2, area) > SIGNIFICANT_PENETRATION * area.piece_unit()
}

/// Shortest boundary-to-boundary distance (0 when overlapping)
pub fn separation(p1: &Piece, p2: &Piece, area: &GameArea) -> f64 {
    let a = vertices(p1, area);
    let b = vertices(p2, area);
    if polygon_penetration(&a, &b) > area.overlap_epsilon() {
        return 0.0;
    }
    let a_to_b = a
        .points()
        .iter()
        .map(|&p| b.distance_to_point(p))
        .fold(f64::INFINITY, f64::min);
    let b_to_a = b
        .points()
        .iter()
        .map(|&p| a.distance_to_point(p))
        .fold(f64::INFINITY, f64::min);
    a_to_b.min(b_to_a)
}

fn share_rotation(p1: &Piece, p2: &Piece) -> bool {
    let diff = normalize_rotation(p1.rotation() - p2.rotation());
    diff.min(360.0 - diff) <= SHARED_FRAME_TOLERANCE
}

/// Classify the body-centre offset against the adjacency patterns
///
/// Horizontal and vertical edge-to-edge at one unit, diagonal corner-to-corner
/// at `unit`, `unit * sqrt(2)` or `unit * sqrt(2) / 2`, all within the touching
/// tolerance. The offset is taken in the local frame of `p1`; pieces with
/// different rotations match no pattern. A pattern match says nothing about
/// overlap, see [`touch`].
pub fn adjacency(p1: &Piece, p2: &Piece, area: &GameArea) -> Option<Adjacency> {
    if !share_rotation(p1, p2) {
        return None;
    }
    let unit = area.piece_unit();
    let tol = area.touch_tolerance();
    let d = rotate_deg(body_center(p2, area) - body_center(p1, area), -p1.rotation());

    if d.y.abs() <= tol && (d.x.abs() - unit).abs() <= tol {
        return Some(Adjacency::Horizontal);
    }
    if d.x.abs() <= tol && (d.y.abs() - unit).abs() <= tol {
        return Some(Adjacency::Vertical);
    }
    if (d.x.abs() - d.y.abs()).abs() > tol {
        return None;
    }
    let dist = d.length();
    [unit, unit * SQRT_2, unit * SQRT_2 / 2.0]
        .iter()
        .any(|&expected| (dist - expected).abs() <= tol)
        .then_some(Adjacency::Diagonal)
}

/// True if the pieces are adjacent without overlapping
pub fn touch(p1: &Piece, p2: &Piece, area: &GameArea) -> bool {
    if overlaps(p1, p2, area) {
        return false;
    }
    separation(p1, p2, area) <= area.touch_tolerance() || adjacency(p1, p2, area).is_some()
}

/// True if the piece's right edge reaches the mirror line without crossing it
///
/// The touching tolerance only applies on the piece's own side of the line.
pub fn touches_mirror(piece: &Piece, area: &GameArea) -> bool {
    let right = bounding_box(piece, area).right;
    let m = area.mirror_line_x();
    right >= m - area.touch_tolerance() && right <= m + area.overlap_epsilon()
}

/// True if the piece's right edge crosses into the mirrored half-plane
pub fn enters_mirror(piece: &Piece, area: &GameArea) -> bool {
    bounding_box(piece, area).right > area.mirror_line_x() + area.overlap_epsilon()
}
