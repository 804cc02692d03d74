//! Generation bindings.
//!
//! The browser has no process environment, so the host passes the API key
//! explicitly. Errors reach JavaScript as the core error's message, which
//! never includes transport details.
//!
//! ```typescript
//! const base64 = await generate(apiKey, 'a red balloon', undefined);
//! const edited = await generateImage(apiKey, 'make it sepia', editor.save());
//! ```

use promptframe_core::generate::{GenerateError, Generator};
use wasm_bindgen::prelude::*;

use crate::types::JsInputImage;

fn to_js_error(e: GenerateError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn build(api_key: String, model: Option<String>) -> Result<Generator, GenerateError> {
    let mut builder = Generator::builder().api_key(api_key);
    if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
        builder = builder.model(model);
    }
    builder.build()
}

/// Generate an image from `prompt` (and optionally a source image).
///
/// Resolves to the base64 payload of the generated image.
#[wasm_bindgen]
pub async fn generate(
    api_key: String,
    prompt: String,
    image: Option<JsInputImage>,
) -> Result<String, JsValue> {
    let generator = build(api_key, None).map_err(to_js_error)?;
    generator
        .generate(&prompt, image.map(JsInputImage::into_inner))
        .await
        .map_err(to_js_error)
}

/// Like [`generate`], but resolves to the image with its MIME type and
/// allows overriding the model.
#[wasm_bindgen(js_name = generateImage)]
pub async fn generate_image(
    api_key: String,
    prompt: String,
    image: Option<JsInputImage>,
    model: Option<String>,
) -> Result<JsInputImage, JsValue> {
    let generator = build(api_key, model).map_err(to_js_error)?;
    generator
        .generate_image(&prompt, image.map(JsInputImage::into_inner))
        .await
        .map(JsInputImage::from)
        .map_err(to_js_error)
}
