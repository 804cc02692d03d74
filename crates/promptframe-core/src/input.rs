//! The image payload passed between editor, host and generator.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::decode::{self, DecodeError, DecodedImage};

/// A base64-encoded image and its MIME type.
///
/// `base64` never carries a `data:` prefix. Values are immutable once
/// built; consumers take them by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputImage {
    base64: String,
    mime_type: String,
}

impl InputImage {
    /// Wrap an already-encoded payload.
    pub fn new(base64: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            base64: base64.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Encode raw file bytes.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self::new(STANDARD.encode(bytes), mime_type)
    }

    /// Parse a `data:<mime>;base64,<payload>` URL.
    pub fn from_data_url(url: &str) -> Result<Self, DecodeError> {
        let parsed = decode::parse_data_url(url)?;
        Ok(Self::new(parsed.base64, parsed.mime_type))
    }

    pub fn base64(&self) -> &str {
        &self.base64
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Split into `(base64, mime_type)` without copying.
    pub fn into_parts(self) -> (String, String) {
        (self.base64, self.mime_type)
    }

    /// Render as a data URL suitable for an `<img src>`.
    pub fn to_data_url(&self) -> String {
        decode::to_data_url(&self.mime_type, &self.base64)
    }

    /// Decode the base64 payload to raw file bytes.
    pub fn decode_bytes(&self) -> Result<Vec<u8>, DecodeError> {
        decode::decode_base64(&self.base64)
    }

    /// Decode the payload all the way to pixels.
    pub fn decode(&self) -> Result<DecodedImage, DecodeError> {
        decode::decode_image(&self.decode_bytes()?)
    }
}
