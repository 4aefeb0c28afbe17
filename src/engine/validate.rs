//! Challenge card validation
//!
//! Six placement rules are evaluated independently and then combined, so a
//! caller can report every failing rule, not just the first.

use serde::Serialize;

use super::collision::{self, overlaps};
use super::connectivity::connected_groups;
use super::mirror::reflect_exact;
use super::piece::Piece;
use super::transform::vertices;
use crate::area::GameArea;

/// Per-rule outcome of validating a piece set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// At least one piece touches the mirror line
    pub touches_mirror: bool,
    /// Some pair of pieces overlaps
    pub has_piece_overlaps: bool,
    /// Some piece overlaps its own reflection
    pub has_reflection_overlaps: bool,
    /// Some piece crosses the mirror line
    pub enters_mirror: bool,
    /// All pieces form a single touching group
    pub pieces_connected: bool,
    /// Every vertex lies inside the area
    pub pieces_in_area: bool,
}

/// The placement rules, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    TouchMirror,
    NoPieceOverlap,
    StayOutOfMirror,
    Connected,
    NoReflectionOverlap,
    InsideArea,
}

impl Rule {
    pub const ALL: [Rule; 6] = [
        Rule::TouchMirror,
        Rule::NoPieceOverlap,
        Rule::StayOutOfMirror,
        Rule::Connected,
        Rule::NoReflectionOverlap,
        Rule::InsideArea,
    ];

    /// Player-facing feedback line
    pub fn message(&self) -> &'static str {
        match self {
            Rule::TouchMirror => "A piece must touch the mirror",
            Rule::NoPieceOverlap => "Pieces must not overlap each other",
            Rule::StayOutOfMirror => "Pieces must not cross the mirror",
            Rule::Connected => "All pieces must be connected",
            Rule::NoReflectionOverlap => "Pieces must not overlap their reflection",
            Rule::InsideArea => "Pieces must stay inside the play area",
        }
    }
}

impl ValidationResult {
    /// Whether this result satisfies one rule
    pub fn passes(&self, rule: Rule) -> bool {
        match rule {
            Rule::TouchMirror => self.touches_mirror,
            Rule::NoPieceOverlap => !self.has_piece_overlaps,
            Rule::StayOutOfMirror => !self.enters_mirror,
            Rule::Connected => self.pieces_connected,
            Rule::NoReflectionOverlap => !self.has_reflection_overlaps,
            Rule::InsideArea => self.pieces_in_area,
        }
    }

    /// Rules this result violates, in reporting order
    pub fn failing_rules(&self) -> Vec<Rule> {
        Rule::ALL
            .into_iter()
            .filter(|&rule| !self.passes(rule))
            .collect()
    }
}

fn any_pair_overlaps(pieces: &[Piece], area: &GameArea) -> bool {
    pieces
        .iter()
        .enumerate()
        .any(|(i, a)| pieces[i + 1..].iter().any(|b| overlaps(a, b, area)))
}

/// Near edges are inclusive, far edges exclusive
fn piece_in_area(piece: &Piece, area: &GameArea) -> bool {
    vertices(piece, area).points().iter().all(|v| {
        v.x >= 0.0 && v.x < area.width() && v.y >= 0.0 && v.y < area.height()
    })
}

/// Evaluate a challenge card against the placement rules
///
/// An empty piece list is vacuously invalid with every flag false.
pub fn validate_challenge_card(pieces: &[Piece], area: &GameArea) -> ValidationResult {
    if pieces.is_empty() {
        return ValidationResult::default();
    }

    let touches_mirror = pieces.iter().any(|p| collision::touches_mirror(p, area));
    let has_piece_overlaps = any_pair_overlaps(pieces, area);
    let enters_mirror = pieces.iter().any(|p| collision::enters_mirror(p, area));
    let groups = connected_groups(pieces, area);
    let pieces_connected = groups.len() == 1 && groups[0].len() == pieces.len();
    let has_reflection_overlaps = pieces
        .iter()
        .any(|p| overlaps(p, &reflect_exact(p, area), area));
    let pieces_in_area = pieces.iter().all(|p| piece_in_area(p, area));

    let is_valid = touches_mirror
        && !has_piece_overlaps
        && !enters_mirror
        && pieces_connected
        && !has_reflection_overlaps
        && pieces_in_area;

    ValidationResult {
        is_valid,
        touches_mirror,
        has_piece_overlaps,
        has_reflection_overlaps,
        enters_mirror,
        pieces_connected,
        pieces_in_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::piece::{Face, PieceKind};

    fn piece(kind: PieceKind, x: f64, y: f64, rot: f64) -> Piece {
        Piece::new(kind, Face::Front, x, y, rot).unwrap()
    }

    #[test]
    fn test_empty_is_invalid() {
        let r = validate_challenge_card(&[], &GameArea::default());
        assert_eq!(r, ValidationResult::default());
        assert!(!r.is_valid);
        assert!(!r.touches_mirror);
        assert_eq!(
            r.failing_rules(),
            vec![Rule::TouchMirror, Rule::Connected, Rule::InsideArea]
        );
    }

    #[test]
    fn test_single_piece_minimal_valid() {
        let area = GameArea::default();
        let r = validate_challenge_card(&[piece(PieceKind::A, 330.0, 300.0, 0.0)], &area);
        assert!(r.touches_mirror);
        assert!(!r.enters_mirror);
        assert!(r.pieces_in_area);
        assert!(r.pieces_connected);
        assert!(!r.has_reflection_overlaps);
        assert!(r.is_valid);
        assert!(r.failing_rules().is_empty());
    }

    #[test]
    fn test_overlapping_pair() {
        let area = GameArea::default();
        let r = validate_challenge_card(
            &[
                piece(PieceKind::A, 550.0, 300.0, 0.0),
                piece(PieceKind::A, 600.0, 320.0, 0.0),
            ],
            &area,
        );
        assert!(r.has_piece_overlaps);
        assert!(!r.is_valid);
    }

    #[test]
    fn test_connected_chain_to_mirror() {
        let area = GameArea::default();
        let pieces = [
            piece(PieceKind::A, 130.0, 300.0, 0.0),
            piece(PieceKind::B, 230.0, 300.0, 0.0),
            piece(PieceKind::A, 330.0, 300.0, 0.0),
        ];
        let r = validate_challenge_card(&pieces, &area);
        assert!(r.is_valid, "{r:?}");
    }

    #[test]
    fn test_disconnected_reports_only_connectivity() {
        let area = GameArea::default();
        let pieces = [
            piece(PieceKind::A, 330.0, 300.0, 0.0),
            piece(PieceKind::A, 0.0, 300.0, 0.0),
        ];
        let r = validate_challenge_card(&pieces, &area);
        assert!(!r.pieces_connected);
        assert!(r.touches_mirror);
        assert_eq!(r.failing_rules(), vec![Rule::Connected]);
    }

    #[test]
    fn test_crossing_piece_overlaps_reflection() {
        let area = GameArea::default();
        let r = validate_challenge_card(&[piece(PieceKind::A, 360.0, 300.0, 0.0)], &area);
        assert!(r.enters_mirror);
        assert!(r.has_reflection_overlaps);
        assert!(!r.pieces_in_area);
        assert!(!r.touches_mirror);
        assert_eq!(
            r.failing_rules(),
            vec![
                Rule::TouchMirror,
                Rule::StayOutOfMirror,
                Rule::NoReflectionOverlap,
                Rule::InsideArea
            ]
        );
    }

    #[test]
    fn test_slight_crossing_flags_agree() {
        // Right edge at 700.4
        let area = GameArea::default();
        let r = validate_challenge_card(&[piece(PieceKind::A, 330.9, 300.0, 0.0)], &area);
        assert!(r.enters_mirror);
        assert!(!r.touches_mirror);
        assert!(r.has_reflection_overlaps);
        assert!(!r.is_valid);
    }

    #[test]
    fn test_far_boundary_counts_as_outside() {
        // Bottom cap apex lands exactly on y = height
        let area = GameArea::default();
        let on_edge = piece(PieceKind::A, 100.0, 475.0, 0.0);
        let r = validate_challenge_card(&[on_edge], &area);
        assert!(!r.pieces_in_area);

        let inside = piece(PieceKind::A, 100.0, 474.0, 0.0);
        let r = validate_challenge_card(&[inside], &area);
        assert!(r.pieces_in_area);
    }

    #[test]
    fn test_concurrent_callers_share_area() {
        let area = GameArea::default();
        let pieces = [
            piece(PieceKind::A, 230.0, 300.0, 0.0),
            piece(PieceKind::A, 330.0, 300.0, 0.0),
        ];
        let expected = validate_challenge_card(&pieces, &area);
        let (pieces, area) = (&pieces[..], &area);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || validate_challenge_card(pieces, area)))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
        assert!(expected.is_valid);
    }

    #[test]
    fn test_serializes_camel_case() {
        let area = GameArea::default();
        let r = validate_challenge_card(&[piece(PieceKind::A, 330.0, 300.0, 0.0)], &area);
        let v = serde_json::to_value(r).unwrap();
        assert_eq!(v["isValid"], true);
        assert_eq!(v["hasReflectionOverlaps"], false);
        assert_eq!(v["piecesInArea"], true);
    }
}
