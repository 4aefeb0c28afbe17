//! Reflection across the mirror line
//!
//! Two separate operations that are not interchangeable:
//! - [`reflect_exact`] places a piece so its footprint is the mirror image of
//!   the original footprint (used for overlap math).
//! - [`reflect_for_display`] is the cheap card-rendering approximation
//!   `x' = 2 * mirrorLineX - x - pieceUnit`, which ignores the silhouette's
//!   true extent.
//!
//! The two generally disagree and must not be substituted for each other.
//!
//! Kind B is chiral, so no rotation of B reproduces its true mirror image.
//! `reflect_exact` still returns a B aligned to the mirrored bounding box;
//! [`reflection_is_exact`] reports where that placement departs from the
//! true reflection.

use super::piece::Piece;
use super::transform::{bounding_box, vertices};
use crate::area::GameArea;
use crate::normalize_rotation;

/// Vertex match tolerance for [`reflection_is_exact`], in units
const REFLECTION_MATCH_TOLERANCE: f64 = 1e-6;

/// Mirror a piece so its bounding box reflects exactly across the mirror line
///
/// The rotation is mirrored (`360 - rotation`) and the anchor is solved from
/// the original's rightmost extent, so that
/// `bounding_box(result).left == 2 * mirrorLineX - bounding_box(piece).right`
/// and the vertical extent is unchanged.
pub fn reflect_exact(piece: &Piece, area: &GameArea) -> Piece {
    let original = bounding_box(piece, area);
    let rotation = normalize_rotation(360.0 - piece.rotation());
    let probe = piece.with_anchor_rotation(0.0, piece.y(), rotation);
    let probe_box = bounding_box(&probe, area);

    let target_left = 2.0 * area.mirror_line_x() - original.right;
    let x = target_left - probe_box.left;
    let y = piece.y() + (original.top - probe_box.top);
    piece.with_anchor_rotation(x, y, rotation)
}

/// Simplified reflection for static card display
pub fn reflect_for_display(piece: &Piece, area: &GameArea) -> Piece {
    let x = 2.0 * area.mirror_line_x() - piece.x() - area.piece_unit();
    let rotation = normalize_rotation(360.0 - piece.rotation());
    piece.with_anchor_rotation(x, piece.y(), rotation)
}

/// Display reflections of a whole piece set, in input order
pub fn mirror_card(pieces: &[Piece], area: &GameArea) -> Vec<Piece> {
    pieces
        .iter()
        .map(|p| reflect_for_display(p, area))
        .collect()
}

/// True if `reflect_exact` reproduces the true mirror image of the silhouette
pub fn reflection_is_exact(piece: &Piece, area: &GameArea) -> bool {
    let truth = vertices(piece, area).reflected_x(area.mirror_line_x());
    let placed = vertices(&reflect_exact(piece, area), area);
    placed.matches(&truth, REFLECTION_MATCH_TOLERANCE * area.piece_unit())
}
