//! Challenge definitions
//!
//! Challenge files are JSON arrays of objects carrying an
//! `objective.playerPieces` array of piece records and a `piecesNeeded`
//! count. Other fields belong to the authoring tools and are ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::area::GameArea;
use crate::engine::{Piece, PieceRecord, ValidationResult, validate_challenge_card};
use crate::error::ChallengeError;

/// A challenge as it appears on disk
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChallengeRecord {
    objective: ObjectiveRecord,
    #[serde(default)]
    pieces_needed: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectiveRecord {
    #[serde(default)]
    player_pieces: Vec<PieceRecord>,
}

/// A decoded challenge
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeDefinition {
    pub player_pieces: Vec<Piece>,
    /// Pieces the player is expected to place (defaults to the solution size)
    pub pieces_needed: usize,
}

/// Outcome of checking one challenge's solution
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeReport {
    pub index: usize,
    pub validation: ValidationResult,
    pub pieces_needed: usize,
    pub piece_count_matches: bool,
}

impl ChallengeReport {
    /// Solution passes every rule and uses the advertised piece count
    pub fn is_ok(&self) -> bool {
        self.validation.is_valid && self.piece_count_matches
    }
}

/// Decode a challenge file's JSON text
pub fn load_challenges(json: &str) -> Result<Vec<ChallengeDefinition>, ChallengeError> {
    let records: Vec<ChallengeRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let player_pieces = record
                .objective
                .player_pieces
                .into_iter()
                .map(Piece::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| ChallengeError::Challenge { index, source })?;
            let pieces_needed = record.pieces_needed.unwrap_or(player_pieces.len());
            Ok(ChallengeDefinition {
                player_pieces,
                pieces_needed,
            })
        })
        .collect()
}

/// Read and decode a challenge file
pub fn load_challenges_file(path: impl AsRef<Path>) -> Result<Vec<ChallengeDefinition>, ChallengeError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let challenges = load_challenges(&json)?;
    log::info!("Loaded {} challenges from {}", challenges.len(), path.display());
    Ok(challenges)
}

/// Validate one challenge's solution pieces
pub fn check_challenge(index: usize, def: &ChallengeDefinition, area: &GameArea) -> ChallengeReport {
    let validation = validate_challenge_card(&def.player_pieces, area);
    let piece_count_matches = def.player_pieces.len() == def.pieces_needed;

    log::debug!(
        "Challenge {}: {} pieces, valid={}",
        index,
        def.player_pieces.len(),
        validation.is_valid
    );
    if !piece_count_matches {
        log::warn!(
            "Challenge {}: solution has {} pieces but piecesNeeded is {}",
            index,
            def.player_pieces.len(),
            def.pieces_needed
        );
    }
    for rule in validation.failing_rules() {
        log::debug!("Challenge {}: {}", index, rule.message());
    }

    ChallengeReport {
        index,
        validation,
        pieces_needed: def.pieces_needed,
        piece_count_matches,
    }
}

/// Validate every challenge, in file order
pub fn check_all(defs: &[ChallengeDefinition], area: &GameArea) -> Vec<ChallengeReport> {
    defs.iter()
        .enumerate()
        .map(|(i, def)| check_challenge(i, def, area))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PieceKind;
    use crate::error::EngineError;

    const FILE: &str = r#"[
        {
            "id": "intro-1",
            "objective": {
                "playerPieces": [
                    {"type": "A", "face": "front", "x": 330, "y": 300, "rotation": 0}
                ]
            },
            "piecesNeeded": 1
        },
        {
            "objective": {
                "playerPieces": [
                    {"type": "A", "face": "front", "x": 550, "y": 300, "rotation": 0},
                    {"type": "B", "face": "back", "x": 600, "y": 320, "rotation": 0}
                ]
            },
            "piecesNeeded": 3
        }
    ]"#;

    #[test]
    fn test_load_challenges() {
        let defs = load_challenges(FILE).unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].player_pieces.len(), 1);
        assert_eq!(defs[1].player_pieces[1].kind(), PieceKind::B);
        assert_eq!(defs[1].pieces_needed, 3);
    }

    #[test]
    fn test_pieces_needed_defaults_to_solution_size() {
        let json = r#"[{"objective": {"playerPieces": [
            {"type": "B", "face": "front", "x": 0, "y": 0, "rotation": 90}
        ]}}]"#;
        let defs = load_challenges(json).unwrap();
        assert_eq!(defs[0].pieces_needed, 1);
    }

    #[test]
    fn test_bad_piece_reports_index() {
        let json = r#"[
            {"objective": {"playerPieces": []}},
            {"objective": {"playerPieces": [
                {"type": "Q", "face": "front", "x": 0, "y": 0, "rotation": 0}
            ]}}
        ]"#;
        match load_challenges(json) {
            Err(ChallengeError::Challenge { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source, EngineError::UnknownPieceKind("Q".to_string()));
            }
            other => panic!("expected challenge error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            load_challenges("{not json"),
            Err(ChallengeError::Serde(_))
        ));
    }

    #[test]
    fn test_check_all() {
        let area = GameArea::default();
        let reports = check_all(&load_challenges(FILE).unwrap(), &area);
        assert!(reports[0].is_ok());
        assert!(!reports[1].is_ok());
        assert!(reports[1].validation.has_piece_overlaps);
        assert!(!reports[1].piece_count_matches);
        assert_eq!(reports[1].index, 1);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_challenges_file("/nonexistent/challenges.json"),
            Err(ChallengeError::Io(_))
        ));
    }
}
