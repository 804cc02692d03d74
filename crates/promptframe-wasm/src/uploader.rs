//! File-picker bindings.
//!
//! Drives a hidden `<input type="file">` through the core [`Uploader`].
//! The page wires the input's `change` event to [`JsUploader::handle_change`].

use promptframe_core::uploader::{FilePicker, Uploader, ACCEPT_IMAGES};
use wasm_bindgen::prelude::*;
use web_sys::{File, HtmlInputElement};

/// `<input type="file">` as a [`FilePicker`].
pub struct InputElementPicker {
    input: HtmlInputElement,
}

impl InputElementPicker {
    pub fn new(input: HtmlInputElement) -> Self {
        input.set_accept(ACCEPT_IMAGES);
        Self { input }
    }

    /// The first file currently selected in the control, if any.
    pub fn selected(&self) -> Option<File> {
        self.input.files().and_then(|files| files.get(0))
    }
}

impl FilePicker for InputElementPicker {
    type File = File;

    fn open(&mut self, accept: &str) {
        self.input.set_accept(accept);
        self.input.click();
    }

    fn clear(&mut self) {
        self.input.set_value("");
    }
}

type SelectCallback = Box<dyn FnMut(File)>;

/// Image picker for JavaScript.
///
/// ```typescript
/// const uploader = new JsUploader(input, (file: File) => load(file));
/// input.addEventListener('change', () => uploader.handleChange());
/// button.addEventListener('click', () => uploader.trigger());
/// ```
#[wasm_bindgen]
pub struct JsUploader {
    inner: Uploader<InputElementPicker, SelectCallback>,
}

#[wasm_bindgen]
impl JsUploader {
    /// Bind to `input`; `on_select` is called with each chosen `File`.
    #[wasm_bindgen(constructor)]
    pub fn new(input: HtmlInputElement, on_select: js_sys::Function) -> JsUploader {
        let callback: SelectCallback = Box::new(move |file: File| {
            if let Err(e) = on_select.call1(&JsValue::NULL, &file) {
                web_sys::console::error_2(&"upload callback failed:".into(), &e);
            }
        });

        JsUploader {
            inner: Uploader::new(InputElementPicker::new(input), callback),
        }
    }

    /// Open the native file dialog.
    pub fn trigger(&mut self) {
        self.inner.trigger();
    }

    /// Forward the selected file, if any, and reset the input.
    ///
    /// Returns `true` when a file was forwarded.
    #[wasm_bindgen(js_name = handleChange)]
    pub fn handle_change(&mut self) -> bool {
        let selection = self.inner.picker().selected();
        self.inner.handle_change(selection)
    }
}
