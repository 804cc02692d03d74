//! Image transformation operations.
//!
//! The editor supports quarter-turn rotation only. Rotation is applied
//! before the filter stack when rendering; both are per-pixel exact, so the
//! order does not change the result.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = clockwise
//! - Origin is top-left corner, y axis points down

mod rotation;

pub use rotation::{apply_rotation, Rotation};
