//! Mirror Match - geometry and validation engine for a symmetry puzzle
//!
//! Core modules:
//! - `engine`: Pure geometry (shapes, transforms, mirror, collision, connectivity, rules)
//! - `area`: Game area configuration
//! - `challenge`: Challenge definition records and batch checking
//! - `error`: Input error taxonomy

pub mod area;
pub mod challenge;
pub mod engine;
pub mod error;

pub use area::GameArea;
pub use error::{ChallengeError, EngineError};

use glam::DVec2;

/// Engine tolerances and defaults
///
/// Tolerances are fractions of `pieceUnit`; multiply by `GameArea::piece_unit`
/// to get world units.
pub mod consts {
    /// Gap at or below which two boundaries (or a piece and the mirror) touch
    pub const TOUCH_TOLERANCE: f64 = 0.01;
    /// Grid-snap alignment and edge-length matching tolerance
    pub const SNAP_TOLERANCE: f64 = 0.1;
    /// Penetration at or below this is a shared boundary, not an overlap
    pub const OVERLAP_EPSILON: f64 = 1e-6;
    /// Penetration above this is a meaningful overlap rather than grazing contact
    pub const SIGNIFICANT_PENETRATION: f64 = 0.05;
    /// Cosine slack when comparing edge directions
    pub const DIRECTION_EPSILON: f64 = 1e-9;

    /// Default area (a single left half-board with the mirror on its right edge)
    pub const DEFAULT_AREA_WIDTH: f64 = 700.0;
    pub const DEFAULT_AREA_HEIGHT: f64 = 600.0;
    pub const DEFAULT_MIRROR_LINE_X: f64 = 700.0;
    pub const DEFAULT_PIECE_UNIT: f64 = 100.0;
}

/// Normalize a rotation in degrees to [0, 360)
#[inline]
pub fn normalize_rotation(degrees: f64) -> f64 {
    let r = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Rotate a point about the origin by `degrees`
#[inline]
pub fn rotate_deg(v: DVec2, degrees: f64) -> DVec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    DVec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rotation() {
        assert_eq!(normalize_rotation(0.0), 0.0);
        assert_eq!(normalize_rotation(360.0), 0.0);
        assert_eq!(normalize_rotation(450.0), 90.0);
        assert_eq!(normalize_rotation(-90.0), 270.0);
        let tiny = normalize_rotation(-1e-20);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = rotate_deg(DVec2::new(1.0, 0.0), 90.0);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);
    }
}
