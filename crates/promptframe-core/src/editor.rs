//! The image editor: rotation and filter state plus the surface they render to.
//!
//! The editor holds two pieces of mutable state ([`Rotation`] and
//! [`FilterState`]) and one derived artifact, the rendered surface. Every
//! mutation re-renders synchronously, and so does loading a new source, so
//! the surface always reflects the current state.
//!
//! Rendering is a pure function of `(EditorState, source)`; the [`Editor`]
//! type only owns the source and caches the last surface.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{self, DecodeError, DecodedImage};
use crate::encode::{self, EncodeError};
use crate::filter::{apply_filters, FilterKind, FilterState};
use crate::input::InputImage;
use crate::transform::{apply_rotation, Rotation};

/// MIME type assumed when a source does not declare one.
pub const FALLBACK_MIME_TYPE: &str = "image/png";

/// Errors raised by the editor.
#[derive(Debug, Error)]
pub enum EditorError {
    /// `save` was called before any surface was rendered.
    #[error("nothing to save: no image has been rendered")]
    NotRendered,

    /// The source image could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The surface could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// How an editing session ended.
///
/// [`Editor::cancel`] yields `Cancelled`; a host that saved wraps the
/// result of [`Editor::save`] in `Saved`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    /// The user saved; the host receives the rendered image.
    Saved(InputImage),
    /// The user cancelled; nothing is produced.
    Cancelled,
}

/// The transform state of an editing session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    pub rotation: Rotation,
    pub filters: FilterState,
}

impl EditorState {
    /// Check if rotation and filters are all at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Render a source image with the given state.
///
/// The output is a fresh surface sized for the rotation (width and height
/// swapped when sideways) with the rotated source drawn centered and the
/// filter stack applied. Pure and deterministic.
pub fn render_image(state: &EditorState, source: &DecodedImage) -> DecodedImage {
    let mut surface = apply_rotation(source, state.rotation);
    apply_filters(&mut surface.pixels, &state.filters);
    surface
}

/// An editing session over one source image.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    state: EditorState,
    source: Option<DecodedImage>,
    mime_type: String,
    surface: Option<DecodedImage>,
}

impl Editor {
    /// Create an editor with no source loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor over a decoded image.
    pub fn with_source(source: DecodedImage, mime_type: impl Into<String>) -> Self {
        let mut editor = Self::new();
        editor.load(source, mime_type);
        editor
    }

    /// Create an editor from an [`InputImage`] (for example a generator result).
    pub fn from_input_image(image: InputImage) -> Result<Self, EditorError> {
        let source = image.decode()?;
        let (_, mime_type) = image.into_parts();
        Ok(Self::with_source(source, mime_type))
    }

    /// Load a `data:` URL as the source.
    pub fn load_data_url(&mut self, url: &str) -> Result<(), EditorError> {
        let parsed = decode::parse_data_url(url)?;
        let bytes = decode::decode_base64(parsed.base64)?;
        let source = decode::decode_image(&bytes)?;
        self.load(source, parsed.mime_type);
        Ok(())
    }

    /// Replace the source image and redraw.
    ///
    /// The transform state is kept, so a new source renders with the
    /// current rotation and filters.
    pub fn load(&mut self, source: DecodedImage, mime_type: impl Into<String>) {
        let mime_type = mime_type.into();
        self.mime_type = if mime_type.is_empty() {
            FALLBACK_MIME_TYPE.to_string()
        } else {
            mime_type
        };
        self.source = Some(source);
        self.surface = None;
        self.render();
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn rotation(&self) -> Rotation {
        self.state.rotation
    }

    pub fn filters(&self) -> &FilterState {
        &self.state.filters
    }

    /// MIME type of the loaded source, used when saving.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The loaded source, if any.
    pub fn source(&self) -> Option<&DecodedImage> {
        self.source.as_ref()
    }

    /// The last rendered surface, if any.
    pub fn surface(&self) -> Option<&DecodedImage> {
        self.surface.as_ref()
    }

    /// Add `delta` degrees (normally ±90) to the rotation and redraw.
    pub fn set_rotation(&mut self, delta: i32) {
        self.state.rotation = self.state.rotation.rotated_by(delta);
        self.render();
    }

    /// Rotate a quarter turn counter-clockwise.
    pub fn rotate_left(&mut self) {
        self.set_rotation(-90);
    }

    /// Rotate a quarter turn clockwise.
    pub fn rotate_right(&mut self) {
        self.set_rotation(90);
    }

    /// Replace one filter's value and redraw.
    pub fn set_filter(&mut self, kind: FilterKind, value: f32) {
        self.state.filters.set(kind, value);
        self.render();
    }

    /// Flip grayscale or sepia between 0 and 100 and redraw.
    pub fn toggle_filter(&mut self, kind: FilterKind) {
        self.state.filters.toggle(kind);
        self.render();
    }

    /// Restore rotation 0 and default filters, then redraw.
    pub fn reset_all(&mut self) {
        self.state = EditorState::default();
        self.render();
    }

    /// Redraw the surface from the source and current state.
    ///
    /// A no-op when no source is loaded, the source has zero size, or its
    /// buffer does not match its dimensions; the previous surface (if any)
    /// is left untouched in that case.
    pub fn render(&mut self) {
        let Some(source) = self.source.as_ref().filter(|s| s.is_drawable()) else {
            tracing::debug!("render skipped: source not drawable");
            return;
        };

        let surface = render_image(&self.state, source);
        tracing::debug!(
            width = surface.width,
            height = surface.height,
            rotation = self.state.rotation.degrees(),
            filter = %self.state.filters,
            "rendered editor surface"
        );
        self.surface = Some(surface);
    }

    /// Serialize the current surface in the source's MIME type.
    ///
    /// If that type has no encoder the surface is saved as PNG and the
    /// returned MIME type says so.
    pub fn save(&self) -> Result<InputImage, EditorError> {
        let surface = self.surface.as_ref().ok_or(EditorError::NotRendered)?;
        let encoded = encode::encode_image(surface, &self.mime_type)?;
        Ok(InputImage::from_bytes(&encoded.bytes, encoded.format.mime_type()))
    }

    /// Discard all edits and end the session without producing an image.
    pub fn cancel(self) -> EditorOutcome {
        EditorOutcome::Cancelled
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
