//! The generator: one prompt (plus optional image) in, one image out.

use super::config::GeneratorConfig;
use super::error::{GenerateError, Result};
use super::transport::{HttpTransport, Transport};
use super::wire::GenerateContentRequest;
use crate::input::InputImage;

/// Builder for [`Generator`].
#[derive(Debug, Clone)]
pub struct GeneratorBuilder<T = HttpTransport> {
    config: GeneratorConfig,
    transport: T,
}

impl Default for GeneratorBuilder<HttpTransport> {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
            transport: HttpTransport::new(),
        }
    }
}

impl GeneratorBuilder<HttpTransport> {
    /// Creates a new builder with default settings and no API key.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Transport> GeneratorBuilder<T> {
    /// Replace the whole configuration.
    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Sets the model identifier.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Sets the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Swap the transport (tests use an in-memory one).
    pub fn transport<U: Transport>(self, transport: U) -> GeneratorBuilder<U> {
        GeneratorBuilder {
            config: self.config,
            transport,
        }
    }

    /// Builds the generator, rejecting a missing or blank API key.
    pub fn build(self) -> Result<Generator<T>> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| {
                GenerateError::Config(format!(
                    "{} not set and no API key provided",
                    super::config::API_KEY_ENV
                ))
            })?
            .to_string();

        Ok(Generator {
            config: self.config,
            api_key,
            transport: self.transport,
        })
    }
}

/// Image generation client.
///
/// Holds a validated API key, so every call goes straight to the transport.
#[derive(Debug, Clone)]
pub struct Generator<T = HttpTransport> {
    config: GeneratorConfig,
    api_key: String,
    transport: T,
}

impl Generator<HttpTransport> {
    /// Creates a new `GeneratorBuilder`.
    pub fn builder() -> GeneratorBuilder<HttpTransport> {
        GeneratorBuilder::new()
    }

    /// Build an HTTP generator from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::builder().config(GeneratorConfig::from_env()).build()
    }
}

impl<T: Transport> Generator<T> {
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Generate an image and return its base64 payload.
    pub async fn generate(&self, prompt: &str, input_image: Option<InputImage>) -> Result<String> {
        self.generate_image(prompt, input_image)
            .await
            .map(|image| image.into_parts().0)
    }

    /// Generate an image and return it with the MIME type the service
    /// reported, ready to be loaded into an editor.
    pub async fn generate_image(
        &self,
        prompt: &str,
        input_image: Option<InputImage>,
    ) -> Result<InputImage> {
        let has_image = input_image.is_some();
        let request = GenerateContentRequest::new(prompt, input_image);

        tracing::debug!(
            model = %self.config.model,
            has_image,
            prompt_len = prompt.len(),
            "requesting image generation"
        );

        let response = self
            .transport
            .generate_content(&self.config, &self.api_key, &request)
            .await
            .map_err(|e| {
                tracing::error!(model = %self.config.model, "image generation failed: {e}");
                GenerateError::Failed
            })?;

        let finish_reason = response.finish_reason().map(str::to_owned);
        let block_reason = response.block_reason().map(str::to_owned);

        match response.first_inline_image() {
            Some(data) => {
                tracing::debug!(mime_type = %data.mime_type, "received generated image");
                Ok(InputImage::new(data.data, data.mime_type))
            }
            None => {
                tracing::warn!(
                    finish_reason = finish_reason.as_deref().unwrap_or("unknown"),
                    block_reason = block_reason.as_deref().unwrap_or("none"),
                    "response carried no image data"
                );
                Err(GenerateError::EmptyResponse)
            }
        }
    }
}
