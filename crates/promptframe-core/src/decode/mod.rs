//! Image decoding for PromptFrame.
//!
//! This module provides functionality for:
//! - Decoding uploaded image bytes (format sniffed, EXIF orientation applied)
//! - Parsing and building base64 `data:` URLs
//!
//! All decoded images are RGBA8, the same layout a browser canvas exposes.
//!
//! # Examples
//!
//! ```ignore
//! use promptframe_core::decode::decode_data_url;
//!
//! let image = decode_data_url(&data_url)?;
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod data_url;
mod file;
mod types;

pub use data_url::{decode_base64, decode_data_url, parse_data_url, to_data_url, DataUrl};
pub use file::{decode_image, get_orientation};
pub use types::{DecodeError, DecodedImage, Orientation};
