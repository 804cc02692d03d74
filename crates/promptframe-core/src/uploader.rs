//! File-picker wrapper.
//!
//! The uploader opens a native, image-filtered file dialog and forwards the
//! chosen file to a callback. After every selection the control is cleared
//! so picking the identical file again still produces a change event. There
//! is no error path: a cancelled dialog simply produces no event, and a
//! change event without a file is ignored.

/// MIME filter applied to the file dialog.
pub const ACCEPT_IMAGES: &str = "image/*";

/// A native file-selection control.
///
/// The WASM bindings implement this for `<input type="file">`.
pub trait FilePicker {
    /// The file handle the control yields.
    type File;

    /// Open the native dialog restricted to `accept`.
    fn open(&mut self, accept: &str);

    /// Reset the control's value so the same file can be selected again.
    fn clear(&mut self);
}

/// Forwards selected files from a [`FilePicker`] to a callback.
pub struct Uploader<P, F>
where
    P: FilePicker,
    F: FnMut(P::File),
{
    picker: P,
    on_select: F,
}

impl<P, F> Uploader<P, F>
where
    P: FilePicker,
    F: FnMut(P::File),
{
    pub fn new(picker: P, on_select: F) -> Self {
        Self { picker, on_select }
    }

    /// Programmatically open the file dialog.
    pub fn trigger(&mut self) {
        self.picker.open(ACCEPT_IMAGES);
    }

    /// Handle a change event from the control.
    ///
    /// Returns `true` if a file was forwarded to the callback.
    pub fn handle_change(&mut self, selection: Option<P::File>) -> bool {
        let Some(file) = selection else {
            return false;
        };

        (self.on_select)(file);
        self.picker.clear();
        true
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakePicker {
        opened_with: Vec<String>,
        value: Option<&'static str>,
        clears: usize,
    }

    impl FakePicker {
        fn select(&mut self, name: &'static str) -> Option<&'static str> {
            self.value = Some(name);
            self.value
        }
    }

    impl FilePicker for FakePicker {
        type File = &'static str;

        fn open(&mut self, accept: &str) {
            self.opened_with.push(accept.to_string());
        }

        fn clear(&mut self) {
            self.value = None;
            self.clears += 1;
        }
    }

    fn recording_uploader() -> (
        Uploader<FakePicker, impl FnMut(&'static str)>,
        Rc<RefCell<Vec<&'static str>>>,
    ) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let uploader = Uploader::new(FakePicker::default(), move |file| {
            sink.borrow_mut().push(file)
        });
        (uploader, received)
    }

    #[test]
    fn test_trigger_opens_image_filtered_dialog() {
        let (mut uploader, _) = recording_uploader();
        uploader.trigger();
        assert_eq!(uploader.picker().opened_with, vec!["image/*"]);
    }

    #[test]
    fn test_selection_forwards_and_clears() {
        let (mut uploader, received) = recording_uploader();
        let selection = uploader.picker.select("photo.jpg");

        assert!(uploader.handle_change(selection));
        assert_eq!(*received.borrow(), vec!["photo.jpg"]);
        assert_eq!(uploader.picker().value, None);
        assert_eq!(uploader.picker().clears, 1);
    }

    #[test]
    fn test_same_file_can_be_selected_twice() {
        let (mut uploader, received) = recording_uploader();
        for _ in 0..2 {
            let selection = uploader.picker.select("photo.jpg");
            uploader.handle_change(selection);
        }
        assert_eq!(*received.borrow(), vec!["photo.jpg", "photo.jpg"]);
    }

    #[test]
    fn test_change_without_file_is_ignored() {
        let (mut uploader, received) = recording_uploader();
        assert!(!uploader.handle_change(None));
        assert!(received.borrow().is_empty());
        assert_eq!(uploader.picker().clears, 0);
    }
}
