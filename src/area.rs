//! Game area configuration
//!
//! Built once per session and shared read-only across engine calls. Changing
//! the area means constructing a new one.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{EngineError, Result};

/// Playing field dimensions, mirror position and piece scale (world units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AreaRecord", into = "AreaRecord")]
pub struct GameArea {
    width: f64,
    height: f64,
    mirror_line_x: f64,
    piece_unit: f64,
}

/// Wire form of [`GameArea`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AreaRecord {
    width: f64,
    height: f64,
    mirror_line_x: f64,
    piece_unit: f64,
}

impl Default for GameArea {
    fn default() -> Self {
        Self {
            width: DEFAULT_AREA_WIDTH,
            height: DEFAULT_AREA_HEIGHT,
            mirror_line_x: DEFAULT_MIRROR_LINE_X,
            piece_unit: DEFAULT_PIECE_UNIT,
        }
    }
}

impl GameArea {
    /// Create an area; every dimension must be finite and positive
    pub fn new(width: f64, height: f64, mirror_line_x: f64, piece_unit: f64) -> Result<Self> {
        for (name, value) in [
            ("width", width),
            ("height", height),
            ("mirrorLineX", mirror_line_x),
            ("pieceUnit", piece_unit),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EngineError::InvalidArea(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(Self {
            width,
            height,
            mirror_line_x,
            piece_unit,
        })
    }

    /// Parse and validate an area from its JSON form
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn mirror_line_x(&self) -> f64 {
        self.mirror_line_x
    }

    #[inline]
    pub fn piece_unit(&self) -> f64 {
        self.piece_unit
    }

    /// Touching tolerance in world units
    #[inline]
    pub fn touch_tolerance(&self) -> f64 {
        TOUCH_TOLERANCE * self.piece_unit
    }

    /// Snap/alignment tolerance in world units
    #[inline]
    pub fn snap_tolerance(&self) -> f64 {
        SNAP_TOLERANCE * self.piece_unit
    }

    /// Penetration noise floor in world units
    #[inline]
    pub fn overlap_epsilon(&self) -> f64 {
        OVERLAP_EPSILON * self.piece_unit
    }
}

impl TryFrom<AreaRecord> for GameArea {
    type Error = EngineError;

    fn try_from(r: AreaRecord) -> Result<Self> {
        Self::new(r.width, r.height, r.mirror_line_x, r.piece_unit)
    }
}

impl From<GameArea> for AreaRecord {
    fn from(a: GameArea) -> Self {
        Self {
            width: a.width,
            height: a.height,
            mirror_line_x: a.mirror_line_x,
            piece_unit: a.piece_unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_area() {
        let area = GameArea::default();
        assert_eq!(area.width(), 700.0);
        assert_eq!(area.height(), 600.0);
        assert_eq!(area.mirror_line_x(), 700.0);
        assert_eq!(area.piece_unit(), 100.0);
        assert!((area.touch_tolerance() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(matches!(
            GameArea::new(0.0, 600.0, 700.0, 100.0),
            Err(EngineError::InvalidArea(_))
        ));
        assert!(GameArea::new(700.0, f64::NAN, 700.0, 100.0).is_err());
        assert!(GameArea::new(700.0, 600.0, 700.0, -1.0).is_err());
    }

    #[test]
    fn test_from_json() {
        let area = GameArea::from_json(
            r#"{"width": 800, "height": 500, "mirrorLineX": 400, "pieceUnit": 50}"#,
        )
        .unwrap();
        assert_eq!(area.mirror_line_x(), 400.0);
        assert_eq!(area.piece_unit(), 50.0);

        assert!(
            GameArea::from_json(r#"{"width": 800, "height": 500, "mirrorLineX": 400, "pieceUnit": 0}"#)
                .is_err()
        );
    }
}
