//! `data:` URL parsing.
//!
//! Hosts read uploaded files as data URLs (`data:image/png;base64,...`).
//! Only base64-encoded data URLs are accepted; that is the only form a
//! file reader or canvas produces.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::{decode_image, DecodeError, DecodedImage};

const BASE64_MARKER: &str = ";base64,";

/// The two halves of a base64 data URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUrl<'a> {
    /// MIME type, e.g. `image/png`. Empty when the URL omits it.
    pub mime_type: &'a str,
    /// Base64 payload with the prefix stripped.
    pub base64: &'a str,
}

/// Split a data URL into its MIME type and base64 payload.
///
/// # Errors
///
/// Returns `DecodeError::MalformedDataUrl` if the URL does not start with
/// `data:` or lacks the `;base64,` marker.
pub fn parse_data_url(url: &str) -> Result<DataUrl<'_>, DecodeError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| DecodeError::MalformedDataUrl("missing data: scheme".to_string()))?;

    let (mime_type, base64) = rest
        .split_once(BASE64_MARKER)
        .ok_or_else(|| DecodeError::MalformedDataUrl("missing ;base64, marker".to_string()))?;

    Ok(DataUrl {
        mime_type: mime_type.trim(),
        base64: base64.trim(),
    })
}

/// Build a data URL from a MIME type and a base64 payload.
pub fn to_data_url(mime_type: &str, base64: &str) -> String {
    format!("data:{mime_type}{BASE64_MARKER}{base64}")
}

/// Decode a base64 payload to raw bytes.
pub fn decode_base64(payload: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD
        .decode(payload)
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))
}

/// Decode a data URL all the way to pixels.
pub fn decode_data_url(url: &str) -> Result<DecodedImage, DecodeError> {
    let parsed = parse_data_url(url)?;
    let bytes = decode_base64(parsed.base64)?;
    decode_image(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_url() {
        let parsed = parse_data_url("data:image/jpeg;base64,/9j/4AAQ").unwrap();
        assert_eq!(parsed.mime_type, "image/jpeg");
        assert_eq!(parsed.base64, "/9j/4AAQ");
    }

    #[test]
    fn test_parse_data_url_without_mime() {
        let parsed = parse_data_url("data:;base64,AAAA").unwrap();
        assert_eq!(parsed.mime_type, "");
        assert_eq!(parsed.base64, "AAAA");
    }

    #[test]
    fn test_parse_data_url_rejects_missing_scheme() {
        let err = parse_data_url("image/png;base64,AAAA").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedDataUrl(_)));
    }

    #[test]
    fn test_parse_data_url_rejects_plain_encoding() {
        let err = parse_data_url("data:text/plain,hello").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedDataUrl(_)));
    }

    #[test]
    fn test_to_data_url() {
        assert_eq!(to_data_url("image/png", "iVBO"), "data:image/png;base64,iVBO");
    }

    #[test]
    fn test_decode_base64_invalid() {
        assert!(matches!(
            decode_base64("not base64!!"),
            Err(DecodeError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_decode_data_url_non_image_payload() {
        // "hello" in base64
        let err = decode_data_url("data:image/png;base64,aGVsbG8=").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidFormat | DecodeError::CorruptedFile(_)
        ));
    }
}
