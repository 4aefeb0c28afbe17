//! Piece value types and their wire form

use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::normalize_rotation;

/// Piece silhouette type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    A,
    B,
}

impl PieceKind {
    pub const ALL: [PieceKind; 2] = [PieceKind::A, PieceKind::B];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::A => "A",
            PieceKind::B => "B",
        }
    }
}

impl FromStr for PieceKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "A" => Ok(PieceKind::A),
            "B" => Ok(PieceKind::B),
            other => Err(EngineError::UnknownPieceKind(other.to_string())),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the piece faces up (display color only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    pub fn as_str(&self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
        }
    }
}

impl FromStr for Face {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "front" => Ok(Face::Front),
            "back" => Ok(Face::Back),
            other => Err(EngineError::UnknownFace(other.to_string())),
        }
    }
}

/// A placed piece
///
/// Immutable value: the constructor normalizes rotation to [0, 360) and
/// rejects non-finite numbers, and every transform returns a new `Piece`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PieceRecord", into = "PieceRecord")]
pub struct Piece {
    kind: PieceKind,
    face: Face,
    x: f64,
    y: f64,
    rotation: f64,
}

impl Piece {
    pub fn new(kind: PieceKind, face: Face, x: f64, y: f64, rotation: f64) -> Result<Self> {
        check_finite("x", x)?;
        check_finite("y", y)?;
        check_finite("rotation", rotation)?;
        Ok(Self {
            kind,
            face,
            x,
            y,
            rotation: normalize_rotation(rotation),
        })
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn face(&self) -> Face {
        self.face
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Rotation in degrees, always within [0, 360)
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Anchor position in world units
    #[inline]
    pub fn anchor(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Same piece moved to a new anchor
    pub fn with_position(&self, x: f64, y: f64) -> Result<Self> {
        Self::new(self.kind, self.face, x, y, self.rotation)
    }

    /// Same piece with a new rotation
    pub fn with_rotation(&self, rotation: f64) -> Result<Self> {
        Self::new(self.kind, self.face, self.x, self.y, rotation)
    }

    /// Same piece shifted by `delta`
    pub fn translated(&self, delta: DVec2) -> Result<Self> {
        self.with_position(self.x + delta.x, self.y + delta.y)
    }

    /// Rebuild from values the engine derived from an already valid piece
    pub(crate) fn with_anchor_rotation(&self, x: f64, y: f64, rotation: f64) -> Self {
        debug_assert!(x.is_finite() && y.is_finite() && rotation.is_finite());
        Self {
            kind: self.kind,
            face: self.face,
            x,
            y,
            rotation: normalize_rotation(rotation),
        }
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::NonFinite { field, value })
    }
}

/// Wire/storage form of a piece:
/// `{ "type": "A"|"B", "face": "front"|"back", "x", "y", "rotation" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub face: String,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

impl TryFrom<PieceRecord> for Piece {
    type Error = EngineError;

    fn try_from(r: PieceRecord) -> Result<Self> {
        Piece::new(r.kind.parse()?, r.face.parse()?, r.x, r.y, r.rotation)
    }
}

impl From<Piece> for PieceRecord {
    fn from(p: Piece) -> Self {
        Self {
            kind: p.kind.as_str().to_string(),
            face: p.face.as_str().to_string(),
            x: p.x,
            y: p.y,
            rotation: p.rotation,
        }
    }
}
