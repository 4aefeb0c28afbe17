//! Placement helpers for authoring tools
//!
//! Snapping, edge alignment and the inverse "touch the mirror" solve. These
//! read the transform and collision outputs but never feed the validator.
//! Each call is bounded by its inputs; callers probing many candidate
//! positions should cap how many they try.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::polygon::Edge;
use super::shape;
use super::transform::{body_center, edges};
use crate::area::GameArea;
use crate::consts::DIRECTION_EPSILON;
use crate::error::{EngineError, Result};
use crate::normalize_rotation;

/// An anchor position in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Pull a piece into exact unit adjacency with the nearest compatible neighbor
///
/// A neighbor qualifies when its body centre is within `snap_distance` of a
/// horizontal or vertical one-unit offset. The piece is returned unchanged
/// when nothing qualifies.
pub fn snap_to_nearby(
    piece: &Piece,
    others: &[Piece],
    snap_distance: f64,
    area: &GameArea,
) -> Piece {
    let unit = area.piece_unit();
    let center = body_center(piece, area);

    let mut best: Option<DVec2> = None;
    for other in others {
        let d = body_center(other, area) - center;
        let targets = [
            DVec2::new(unit.copysign(d.x), 0.0),
            DVec2::new(0.0, unit.copysign(d.y)),
        ];
        for target in targets {
            let correction = d - target;
            if correction.x.abs() > snap_distance || correction.y.abs() > snap_distance {
                continue;
            }
            if best.is_none_or(|b| correction.length_squared() < b.length_squared()) {
                best = Some(correction);
            }
        }
    }

    match best {
        Some(c) => piece.with_anchor_rotation(piece.x() + c.x, piece.y() + c.y, piece.rotation()),
        None => *piece,
    }
}

/// Edge pairs that could sit flush: antiparallel and of equal length
pub fn compatible_edges(p1: &Piece, p2: &Piece, area: &GameArea) -> Vec<(Edge, Edge)> {
    let e1 = edges(p1, area);
    let e2 = edges(p2, area);
    let length_tol = area.snap_tolerance();

    let mut pairs = Vec::new();
    for a in &e1 {
        for b in &e2 {
            let antiparallel = a.direction.dot(b.direction) <= -1.0 + DIRECTION_EPSILON;
            if antiparallel && (a.length - b.length).abs() <= length_tol {
                pairs.push((*a, *b));
            }
        }
    }
    pairs
}

/// Anchor that puts the piece's right bounding edge exactly on the mirror line
///
/// The result only satisfies the mirror rules. When the mirror line is also
/// the area's right edge (the default area), the piece ends exactly on
/// `x = width`, which the in-area check treats as outside; pull it left by up
/// to the touching tolerance before handing it to a challenge.
pub fn position_touching_mirror(
    y: f64,
    rotation: f64,
    kind: PieceKind,
    area: &GameArea,
) -> Result<Position> {
    if !y.is_finite() {
        return Err(EngineError::NonFinite { field: "y", value: y });
    }
    if !rotation.is_finite() {
        return Err(EngineError::NonFinite {
            field: "rotation",
            value: rotation,
        });
    }
    let extent = shape::right_extent(kind, normalize_rotation(rotation)) * area.piece_unit();
    Ok(Position {
        x: area.mirror_line_x() - extent,
        y,
    })
}
