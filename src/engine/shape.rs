//! Piece shape templates
//!
//! Each kind owns a fixed outline in local unit coordinates (multiply by
//! `pieceUnit` for world units), origin at the piece anchor. Both outlines
//! are built around the same unit body square
//! `[BODY_OFFSET_X, BODY_OFFSET_X + 1] x [-0.5, 0.5]` and are convex, with a
//! vertical principal axis 2.5 units long. The two are modeled separately:
//! A is mirror-symmetric about its vertical axis, B is chiral.

use glam::DVec2;

use super::piece::PieceKind;
use super::polygon::EdgeKind;
use crate::rotate_deg;

/// Horizontal distance from the anchor to the body's left edge
pub const BODY_OFFSET_X: f64 = 2.695;

/// Height of A's triangular caps above and below the body
pub const A_CAP_HEIGHT: f64 = 0.75;

/// Length of B's hanging extension below the body
pub const B_TAIL_LENGTH: f64 = 1.5;

const L: f64 = BODY_OFFSET_X;

/// A: body square with isosceles caps top and bottom (hexagon)
static TEMPLATE_A: [DVec2; 6] = [
    DVec2::new(L + 0.5, -0.5 - A_CAP_HEIGHT),
    DVec2::new(L + 1.0, -0.5),
    DVec2::new(L + 1.0, 0.5),
    DVec2::new(L + 0.5, 0.5 + A_CAP_HEIGHT),
    DVec2::new(L, 0.5),
    DVec2::new(L, -0.5),
];

/// B: body square with a right-triangle tail under the left side (quadrilateral)
static TEMPLATE_B: [DVec2; 4] = [
    DVec2::new(L, -0.5),
    DVec2::new(L + 1.0, -0.5),
    DVec2::new(L + 1.0, 0.5),
    DVec2::new(L, 0.5 + B_TAIL_LENGTH),
];

/// Local-space outline for a kind
#[inline]
pub fn template(kind: PieceKind) -> &'static [DVec2] {
    match kind {
        PieceKind::A => &TEMPLATE_A,
        PieceKind::B => &TEMPLATE_B,
    }
}

/// Centre of the unit body square in local units (same for every kind)
#[inline]
pub fn body_center(_kind: PieceKind) -> DVec2 {
    DVec2::new(L + 0.5, 0.0)
}

/// Straight/diagonal classification of each template edge, in vertex order
pub fn edge_kinds(kind: PieceKind) -> Vec<EdgeKind> {
    let t = template(kind);
    let n = t.len();
    (0..n)
        .map(|i| {
            let d = t[(i + 1) % n] - t[i];
            if d.x == 0.0 || d.y == 0.0 {
                EdgeKind::Straight
            } else {
                EdgeKind::Diagonal
            }
        })
        .collect()
}

/// Rightmost local x of the rotated outline, in units
///
/// This is the rotation-specific extension from the anchor to the piece's
/// right bounding edge.
pub fn right_extent(kind: PieceKind, rotation: f64) -> f64 {
    template(kind)
        .iter()
        .map(|&v| rotate_deg(v, rotation).x)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// True if the outline equals its own reflection up to rotation
pub fn is_mirror_symmetric(kind: PieceKind) -> bool {
    match kind {
        PieceKind::A => true,
        PieceKind::B => false,
    }
}
