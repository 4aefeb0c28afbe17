//! Template -> world-space transforms
//!
//! Rotate the kind's template about its local origin, scale by `pieceUnit`,
//! then translate to the piece anchor.

use glam::DVec2;

use super::piece::Piece;
use super::polygon::{BoundingBox, Edge, Polygon};
use super::shape;
use crate::area::GameArea;
use crate::rotate_deg;

/// Map one local template point into world space
#[inline]
fn to_world(piece: &Piece, local: DVec2, unit: f64) -> DVec2 {
    piece.anchor() + rotate_deg(local * unit, piece.rotation())
}

/// World-space silhouette of a placed piece
pub fn vertices(piece: &Piece, area: &GameArea) -> Polygon {
    let unit = area.piece_unit();
    Polygon::new(
        shape::template(piece.kind())
            .iter()
            .map(|&v| to_world(piece, v, unit))
            .collect(),
    )
}

/// Axis-aligned bounds of the world-space silhouette
pub fn bounding_box(piece: &Piece, area: &GameArea) -> BoundingBox {
    vertices(piece, area).bounding_box()
}

/// World-space edges, tagged straight/diagonal by their template edge
pub fn edges(piece: &Piece, area: &GameArea) -> Vec<Edge> {
    let poly = vertices(piece, area);
    poly.segments()
        .zip(shape::edge_kinds(piece.kind()))
        .map(|((a, b), kind)| Edge::new(a, b, kind))
        .collect()
}

/// World-space centre of the piece's unit body square
pub fn body_center(piece: &Piece, area: &GameArea) -> DVec2 {
    to_world(piece, shape::body_center(piece.kind()), area.piece_unit())
}
