//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! PromptFrame types, handling the conversion between Rust and JavaScript
//! data representations.

use promptframe_core::decode::{DecodeError, DecodedImage};
use promptframe_core::InputImage;
use wasm_bindgen::prelude::*;

/// A decoded RGBA image wrapper for JavaScript.
///
/// The pixel layout matches `ImageData.data`, so `pixels()` can be handed
/// straight to `new ImageData(...)`.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create a new JsDecodedImage from dimensions and RGBA pixel data.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsDecodedImage {
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core DecodedImage. Clones the pixel data.
    ///
    /// Width, height and pixels come from JavaScript independently, so the
    /// buffer length is checked here.
    pub(crate) fn to_decoded(&self) -> Result<DecodedImage, DecodeError> {
        DecodedImage::try_new(self.width, self.height, self.pixels.clone())
    }
}

/// A base64 image and its MIME type, as exchanged with the host.
#[wasm_bindgen]
pub struct JsInputImage {
    inner: InputImage,
}

#[wasm_bindgen]
impl JsInputImage {
    /// Wrap a base64 payload (no `data:` prefix) and its MIME type.
    #[wasm_bindgen(constructor)]
    pub fn new(base64: String, mime_type: String) -> JsInputImage {
        JsInputImage {
            inner: InputImage::new(base64, mime_type),
        }
    }

    /// Parse a `data:<mime>;base64,...` URL, e.g. from `FileReader.readAsDataURL`.
    #[wasm_bindgen(js_name = fromDataUrl)]
    pub fn from_data_url(url: &str) -> Result<JsInputImage, JsValue> {
        InputImage::from_data_url(url)
            .map(JsInputImage::from)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn base64(&self) -> String {
        self.inner.base64().to_string()
    }

    #[wasm_bindgen(getter, js_name = mimeType)]
    pub fn mime_type(&self) -> String {
        self.inner.mime_type().to_string()
    }

    /// Data URL for an `<img src>`.
    #[wasm_bindgen(getter, js_name = dataUrl)]
    pub fn data_url(&self) -> String {
        self.inner.to_data_url()
    }
}

impl From<InputImage> for JsInputImage {
    fn from(inner: InputImage) -> Self {
        Self { inner }
    }
}

impl JsInputImage {
    pub(crate) fn into_inner(self) -> InputImage {
        self.inner
    }

    pub(crate) fn as_inner(&self) -> &InputImage {
        &self.inner
    }
}
