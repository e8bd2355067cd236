//! Gemini request and response types
//!
//! These types map directly to the generativelanguage v1beta API schema.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Request to generate content from Gemini
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// Array of content items representing the conversation
    pub contents: Vec<Content>,
}

/// A single content item in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Role: "user" or "model"
    pub role: String,
    /// Parts of the content (may be empty when generation is cut short)
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A part of content (text or inline binary data)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Text content
    Text { text: String },
    /// Inline binary data, e.g. an image
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

impl Part {
    /// Text part from any string-ish value
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    /// Inline JPEG image part from raw bytes
    pub fn jpeg(data: &[u8]) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: "image/jpeg".to_string(),
                data: BASE64.encode(data),
            },
        }
    }
}

/// Base64-encoded binary payload with its mime type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Standard base64, no data-URI prefix
    pub data: String,
}

/// Response from Gemini's generateContent endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates (usually just one)
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A candidate response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The generated content; absent when the candidate was blocked
    pub content: Option<Content>,
    /// Why the candidate finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Response from the model enumeration endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListModelsResponse {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
}

/// A single entry in the model list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Fully qualified identifier, e.g. "models/gemini-2.5-flash-lite"
    pub name: String,
}
