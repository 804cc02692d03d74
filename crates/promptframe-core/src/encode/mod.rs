//! Image encoding for PromptFrame.
//!
//! This module provides functionality for:
//! - Encoding the editor surface as PNG or JPEG
//! - Resolving a requested MIME type to the format actually produced
//!
//! # Examples
//!
//! ```ignore
//! use promptframe_core::encode::encode_image;
//!
//! let encoded = encode_image(&surface, "image/jpeg")?;
//! println!("Encoded {} bytes as {}", encoded.bytes.len(), encoded.format.mime_type());
//! ```

mod codec;

pub use codec::{
    encode_image, encode_jpeg, encode_png, EncodeError, EncodedImage, OutputFormat,
    DEFAULT_JPEG_QUALITY,
};
