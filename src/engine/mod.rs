//! Geometry and validation engine
//!
//! Everything here is a pure function of its inputs:
//! - No internal mutable state
//! - No logging or I/O
//! - Pieces are passed by value and never retained

pub mod collision;
pub mod connectivity;
pub mod mirror;
pub mod piece;
pub mod placement;
pub mod polygon;
pub mod shape;
pub mod transform;
pub mod validate;

pub use collision::{
    Adjacency, adjacency, enters_mirror, overlaps, overlaps_significantly, penetration_depth,
    separation, touch, touches_mirror,
};
pub use connectivity::{adjacency_list, connected_groups};
pub use mirror::{mirror_card, reflect_exact, reflect_for_display, reflection_is_exact};
pub use piece::{Face, Piece, PieceKind, PieceRecord};
pub use placement::{Position, compatible_edges, position_touching_mirror, snap_to_nearby};
pub use polygon::{BoundingBox, Edge, EdgeKind, Polygon};
pub use transform::{bounding_box, edges, vertices};
pub use validate::{Rule, ValidationResult, validate_challenge_card};
