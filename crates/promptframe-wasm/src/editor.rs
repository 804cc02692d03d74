//! Editor WASM bindings.
//!
//! Wraps the core [`Editor`] for the hosting page. Every setter re-renders
//! the surface in Rust; the host then paints it with [`JsEditor::draw`]
//! (or reads it back with `surface()`).

use promptframe_core::editor::Editor;
use promptframe_core::filter::FilterKind;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::types::{JsDecodedImage, JsInputImage};

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// An editing session for JavaScript.
#[wasm_bindgen]
pub struct JsEditor {
    inner: Editor,
}

impl Default for JsEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsEditor {
    /// Create an editor with no image loaded.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Editor::new(),
        }
    }

    /// Load the source from a data URL and render it.
    #[wasm_bindgen(js_name = loadDataUrl)]
    pub fn load_data_url(&mut self, url: &str) -> Result<(), JsValue> {
        self.inner.load_data_url(url).map_err(to_js_error)
    }

    /// Load an already decoded RGBA image and render it.
    ///
    /// Throws if the pixel buffer does not hold `width * height * 4` bytes.
    #[wasm_bindgen(js_name = loadImage)]
    pub fn load_image(&mut self, image: &JsDecodedImage, mime_type: &str) -> Result<(), JsValue> {
        let source = image.to_decoded().map_err(to_js_error)?;
        self.inner.load(source, mime_type);
        Ok(())
    }

    /// Load an [`JsInputImage`] (for example a generation result).
    #[wasm_bindgen(js_name = loadInputImage)]
    pub fn load_input_image(&mut self, image: &JsInputImage) -> Result<(), JsValue> {
        let source = image.as_inner().decode().map_err(to_js_error)?;
        self.inner.load(source, image.as_inner().mime_type());
        Ok(())
    }

    /// Current rotation in degrees (0, 90, 180 or 270).
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> u16 {
        self.inner.rotation().degrees()
    }

    /// Add `delta` degrees (±90) to the rotation.
    #[wasm_bindgen(js_name = setRotation)]
    pub fn set_rotation(&mut self, delta: i32) {
        self.inner.set_rotation(delta);
    }

    #[wasm_bindgen(js_name = rotateLeft)]
    pub fn rotate_left(&mut self) {
        self.inner.rotate_left();
    }

    #[wasm_bindgen(js_name = rotateRight)]
    pub fn rotate_right(&mut self) {
        self.inner.rotate_right();
    }

    /// Set a filter by name (`brightness`, `contrast`, `grayscale`, `sepia`).
    #[wasm_bindgen(js_name = setFilter)]
    pub fn set_filter(&mut self, name: &str, value: f32) -> Result<(), JsValue> {
        let kind: FilterKind = name.parse().map_err(|e: String| JsValue::from_str(&e))?;
        self.inner.set_filter(kind, value);
        Ok(())
    }

    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: f32) {
        self.inner.set_filter(FilterKind::Brightness, value);
    }

    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.filters().brightness()
    }

    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f32) {
        self.inner.set_filter(FilterKind::Contrast, value);
    }

    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.filters().contrast()
    }

    #[wasm_bindgen(setter)]
    pub fn set_grayscale(&mut self, value: f32) {
        self.inner.set_filter(FilterKind::Grayscale, value);
    }

    #[wasm_bindgen(getter)]
    pub fn grayscale(&self) -> f32 {
        self.inner.filters().grayscale()
    }

    #[wasm_bindgen(setter)]
    pub fn set_sepia(&mut self, value: f32) {
        self.inner.set_filter(FilterKind::Sepia, value);
    }

    #[wasm_bindgen(getter)]
    pub fn sepia(&self) -> f32 {
        self.inner.filters().sepia()
    }

    #[wasm_bindgen(js_name = toggleGrayscale)]
    pub fn toggle_grayscale(&mut self) {
        self.inner.toggle_filter(FilterKind::Grayscale);
    }

    #[wasm_bindgen(js_name = toggleSepia)]
    pub fn toggle_sepia(&mut self) {
        self.inner.toggle_filter(FilterKind::Sepia);
    }

    /// All four filter values as a plain object.
    pub fn filters(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.filters()).map_err(to_js_error)
    }

    /// CSS filter string for hosts that preview with `ctx.filter`.
    #[wasm_bindgen(js_name = filterCss)]
    pub fn filter_css(&self) -> String {
        self.inner.filters().css_filter()
    }

    #[wasm_bindgen(js_name = resetAll)]
    pub fn reset_all(&mut self) {
        self.inner.reset_all();
    }

    /// The rendered surface, or `undefined` before an image has loaded.
    pub fn surface(&self) -> Option<JsDecodedImage> {
        self.inner
            .surface()
            .cloned()
            .map(JsDecodedImage::from_decoded)
    }

    /// Paint the rendered surface onto a canvas, resizing it to fit.
    ///
    /// Returns `false` without touching the canvas when nothing has been
    /// rendered yet or the canvas has no 2D context.
    pub fn draw(&self, canvas: &HtmlCanvasElement) -> Result<bool, JsValue> {
        let Some(surface) = self.inner.surface() else {
            return Ok(false);
        };

        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            return Ok(false);
        };

        let data = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(surface.pixels.as_slice()),
            surface.width,
            surface.height,
        )?;

        canvas.set_width(surface.width);
        canvas.set_height(surface.height);
        ctx.clear_rect(0.0, 0.0, surface.width as f64, surface.height as f64);
        ctx.put_image_data(&data, 0.0, 0.0)?;
        Ok(true)
    }

    /// Encode the surface in the source's MIME type.
    pub fn save(&self) -> Result<JsInputImage, JsValue> {
        self.inner.save().map(JsInputImage::from).map_err(to_js_error)
    }

    /// Discard the session. The JS object is unusable afterwards; closing
    /// the editor view is up to the caller.
    pub fn cancel(self) {
        self.inner.cancel();
    }
}

/// WASM-specific tests that require a browser canvas.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas() -> HtmlCanvasElement {
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    fn loaded_editor() -> JsEditor {
        let mut editor = JsEditor::new();
        let pixels = (0..6 * 4 * 4).map(|i| (i % 256) as u8).collect();
        editor
            .load_image(&JsDecodedImage::new(6, 4, pixels), "image/png")
            .unwrap();
        editor
    }

    #[wasm_bindgen_test]
    fn test_load_image_rejects_short_buffer() {
        let mut editor = JsEditor::new();
        editor.set_rotation(90);
        let result = editor.load_image(&JsDecodedImage::new(4, 4, vec![0; 8]), "image/png");
        assert!(result.is_err());
        assert!(editor.surface().is_none());
    }

    #[wasm_bindgen_test]
    fn test_draw_without_image_is_noop() {
        let canvas = canvas();
        canvas.set_width(17);
        assert_eq!(JsEditor::new().draw(&canvas).unwrap(), false);
        assert_eq!(canvas.width(), 17);
    }

    #[wasm_bindgen_test]
    fn test_draw_sizes_canvas_for_rotation() {
        let mut editor = loaded_editor();
        editor.rotate_right();
        let canvas = canvas();
        assert!(editor.draw(&canvas).unwrap());
        assert_eq!((canvas.width(), canvas.height()), (4, 6));
    }

    #[wasm_bindgen_test]
    fn test_set_filter_by_name() {
        let mut editor = loaded_editor();
        editor.set_filter("contrast", 150.0).unwrap();
        assert_eq!(editor.contrast(), 150.0);
        assert!(editor.set_filter("blur", 1.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_save_returns_png() {
        let editor = loaded_editor();
        let saved = editor.save().unwrap();
        assert_eq!(saved.mime_type(), "image/png");
        assert!(saved.data_url().starts_with("data:image/png;base64,"));
    }
}
