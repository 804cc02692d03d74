//! Quarter-turn rotation.
//!
//! The editor only rotates in 90 degree steps, so rotation is a lossless
//! pixel remap: no interpolation, no canvas expansion beyond swapping width
//! and height. Positive angles turn clockwise, matching a 2D canvas whose
//! y axis points down.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decode::DecodedImage;

/// A rotation angle, always one of 0, 90, 180 or 270 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u16")]
pub struct Rotation(u16);

impl Rotation {
    pub const DEG_0: Rotation = Rotation(0);
    pub const DEG_90: Rotation = Rotation(90);
    pub const DEG_180: Rotation = Rotation(180);
    pub const DEG_270: Rotation = Rotation(270);

    /// Normalize any angle into [0, 360), snapped to the nearest quarter turn.
    pub fn normalize(degrees: i32) -> Self {
        Self::snap(degrees as i64)
    }

    fn snap(degrees: i64) -> Self {
        let quarters = (degrees as f64 / 90.0).round() as i64;
        Rotation((quarters.rem_euclid(4) * 90) as u16)
    }

    /// Angle in degrees.
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Angle in radians, as passed to a canvas `rotate()` call.
    pub fn radians(self) -> f64 {
        (self.0 as f64).to_radians()
    }

    /// Add a delta (usually ±90) and wrap.
    pub fn rotated_by(self, delta: i32) -> Self {
        Self::snap(self.0 as i64 + delta as i64)
    }

    /// True for 90 and 270, where width and height swap.
    pub fn is_sideways(self) -> bool {
        self.0 == 90 || self.0 == 270
    }

    /// Output dimensions for a source of the given size.
    pub fn output_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.is_sideways() {
            (height, width)
        } else {
            (width, height)
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> u16 {
        rotation.0
    }
}

impl TryFrom<i32> for Rotation {
    type Error = String;

    /// Strict conversion: only exact multiples of 90 are accepted.
    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        if degrees % 90 != 0 {
            return Err(format!("rotation must be a multiple of 90, got {degrees}"));
        }
        Ok(Self::normalize(degrees))
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Rotate an image about its center by a quarter-turn angle.
///
/// Returns a new `DecodedImage`; the 0 degree case is a plain copy.
pub fn apply_rotation(image: &DecodedImage, rotation: Rotation) -> DecodedImage {
    let (src_w, src_h) = (image.width as usize, image.height as usize);
    let (dst_w, dst_h) = rotation.output_dimensions(image.width, image.height);

    if rotation == Rotation::DEG_0 || !image.is_drawable() {
        return image.clone();
    }

    let mut output = vec![0u8; image.pixels.len()];

    for sy in 0..src_h {
        for sx in 0..src_w {
            // Forward map: where does source (sx, sy) land?
            let (dx, dy) = match rotation.degrees() {
                90 => (src_h - 1 - sy, sx),
                180 => (src_w - 1 - sx, src_h - 1 - sy),
                _ => (sy, src_w - 1 - sx),
            };

            let src_idx = (sy * src_w + sx) * 4;
            let dst_idx = (dy * dst_w as usize + dx) * 4;
            output[dst_idx..dst_idx + 4].copy_from_slice(&image.pixels[src_idx..src_idx + 4]);
        }
    }

    DecodedImage {
        width: dst_w,
        height: dst_h,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
