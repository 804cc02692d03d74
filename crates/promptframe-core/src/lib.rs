//! PromptFrame Core - Image editing and generation library
//!
//! This crate provides the core functionality behind PromptFrame: decoding
//! uploaded images, the rotate-and-filter editor, and the client for the
//! remote image-generation endpoint.
//!
//! # Module Structure
//!
//! - `decode` - Uploaded bytes and data URLs to RGBA pixels
//! - `encode` - RGBA pixels to PNG/JPEG for saving
//! - `filter` - Brightness, contrast, grayscale and sepia
//! - `transform` - Quarter-turn rotation
//! - `editor` - Editing session state and rendering
//! - `uploader` - File-picker contract
//! - `generate` - Remote generation client

pub mod decode;
pub mod editor;
pub mod encode;
pub mod filter;
pub mod generate;
pub mod input;
pub mod transform;
pub mod uploader;

pub use editor::{render_image, Editor, EditorError, EditorOutcome, EditorState};
pub use filter::{apply_filters, FilterKind, FilterState};
pub use generate::{GenerateError, Generator, GeneratorConfig};
pub use input::InputImage;
pub use transform::{apply_rotation, Rotation};
pub use uploader::{FilePicker, Uploader, ACCEPT_IMAGES};
