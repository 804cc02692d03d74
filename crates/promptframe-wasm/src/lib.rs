//! PromptFrame WASM - WebAssembly bindings for PromptFrame
//!
//! This crate exposes the promptframe-core editor, uploader and generator
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `editor` - Rotate/filter editing session and canvas drawing
//! - `uploader` - `<input type="file">` picker
//! - `generate` - Remote image generation
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditor, JsUploader, generate } from '@promptframe/wasm';
//!
//! await init();
//!
//! const editor = new JsEditor();
//! editor.loadDataUrl(dataUrl);
//! editor.rotateRight();
//! editor.brightness = 120;
//! editor.draw(canvas);
//! const saved = editor.save();
//! ```

use wasm_bindgen::prelude::*;

mod editor;
mod generate;
mod types;
mod uploader;

// Re-export public types
pub use editor::JsEditor;
pub use generate::{generate, generate_image};
pub use types::{JsDecodedImage, JsInputImage};
pub use uploader::{InputElementPicker, JsUploader};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
