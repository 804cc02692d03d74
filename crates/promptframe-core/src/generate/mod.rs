//! Remote image generation.
//!
//! A single stateless request/response operation: a text prompt plus an
//! optional [`InputImage`](crate::InputImage) go to the `generateContent`
//! endpoint, and the first inline image in the response comes back.
//!
//! Errors come in three kinds ([`GenerateError`]): missing configuration,
//! a response without image data, and everything else. Nothing is retried.
//!
//! # Example
//!
//! ```ignore
//! use promptframe_core::generate::Generator;
//!
//! let generator = Generator::from_env()?;
//! let base64 = generator.generate("a red balloon", None).await?;
//! ```

mod config;
mod error;
mod generator;
mod transport;
mod wire;

pub use config::{
    GeneratorConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, FALLBACK_API_KEY_ENV,
    MODEL_ENV,
};
pub use error::{GenerateError, Result, TransportError};
pub use generator::{Generator, GeneratorBuilder};
pub use transport::{HttpTransport, Transport};
pub use wire::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, PromptFeedback, RequestPart, ResponseContent, ResponsePart, IMAGE_MODALITY,
};
