//! Request/response types for the `generateContent` endpoint.

use serde::{Deserialize, Serialize};

use crate::input::InputImage;

/// Only images are requested back.
pub const IMAGE_MODALITY: &str = "IMAGE";

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Content {
    pub parts: Vec<RequestPart>,
}

/// A part in a request: inline image data or text.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum RequestPart {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
}

impl GenerateContentRequest {
    /// Build the ordered part list: the input image first if present, the
    /// prompt text always last.
    pub fn new(prompt: impl Into<String>, input_image: Option<InputImage>) -> Self {
        let mut parts = Vec::with_capacity(2);

        if let Some(image) = input_image {
            let (data, mime_type) = image.into_parts();
            parts.push(RequestPart::InlineData {
                inline_data: InlineData { mime_type, data },
            });
        }

        parts.push(RequestPart::Text {
            text: prompt.into(),
        });

        Self {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_modalities: vec![IMAGE_MODALITY.to_string()],
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// First inline-data part of the first candidate, scanning parts in order.
    pub fn first_inline_image(self) -> Option<InlineData> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|part| part.inline_data.filter(|data| !data.data.is_empty()))
    }

    /// Finish reason of the first candidate, for diagnostics.
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }

    /// Block reason from prompt feedback, for diagnostics.
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_only_request() {
        let req = GenerateContentRequest::new("a red balloon", None);
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{ "parts": [{ "text": "a red balloon" }] }],
                "generationConfig": { "responseModalities": ["IMAGE"] }
            })
        );
    }

    #[test]
    fn test_image_part_comes_first() {
        let image = InputImage::new("iVBORw0KGgo=", "image/png");
        let req = GenerateContentRequest::new("make it blue", Some(image));
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value["contents"][0]["parts"],
            json!([
                { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } },
                { "text": "make it blue" }
            ])
        );
    }

    #[test]
    fn test_first_inline_image_skips_text_parts() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "Here you go" },
                    { "inlineData": { "mimeType": "image/png", "data": "AAAA" } },
                    { "inlineData": { "mimeType": "image/png", "data": "BBBB" } }
                ]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap();

        assert_eq!(resp.finish_reason(), Some("STOP"));
        let image = resp.first_inline_image().unwrap();
        assert_eq!(image.data, "AAAA");
    }

    #[test]
    fn test_only_first_candidate_is_scanned() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "no image" }] } },
                { "content": { "parts": [
                    { "inlineData": { "mimeType": "image/png", "data": "AAAA" } }
                ]}}
            ]
        }))
        .unwrap();
        assert!(resp.first_inline_image().is_none());
    }

    #[test]
    fn test_empty_and_blocked_responses() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.first_inline_image().is_none());

        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [],
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();
        assert_eq!(resp.block_reason(), Some("SAFETY"));
        assert!(resp.first_inline_image().is_none());
    }

    #[test]
    fn test_candidate_without_content() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "finishReason": "IMAGE_SAFETY" }]
        }))
        .unwrap();
        assert_eq!(resp.finish_reason(), Some("IMAGE_SAFETY"));
        assert!(resp.first_inline_image().is_none());
    }
}
