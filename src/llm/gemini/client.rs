//! Gemini client implementation

use reqwest::Client;

use crate::llm::error::LlmError;

use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, ListModelsResponse, Part,
};

/// Client for the generativelanguage Gemini API, authenticated by API key
#[derive(Debug, Clone)]
pub struct GeminiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API key, sent as a query parameter
    api_key: String,
    /// Base URL, e.g. "https://generativelanguage.googleapis.com/v1beta"
    base_url: String,
    /// Model identifier, e.g. "gemini-2.5-flash-lite"
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client sharing the given HTTP client.
    pub fn new(http_client: Client, api_key: String, base_url: String, model: String) -> Self {
        Self {
            http_client,
            api_key,
            base_url,
            model,
        }
    }

    /// Build the endpoint URL for a model method
    fn model_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.base_url, self.model, method, self.api_key
        )
    }

    /// Generate text from a single user turn made of the given parts.
    ///
    /// Returns the concatenated text of the first candidate.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx upstream status,
    /// an unparseable body, or a candidate with no text.
    pub async fn generate(&self, parts: Vec<Part>) -> Result<String, LlmError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts,
            }],
        };

        let response = self
            .http_client
            .post(self.model_url("generateContent"))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(LlmError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        extract_text(body)
    }

    /// List the model identifiers available to this API key.
    ///
    /// Single page only; the endpoint exists for diagnostics.
    pub async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        let url = format!("{}/models?key={}", self.base_url, self.api_key);
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(LlmError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let body: ListModelsResponse = response.json().await?;
        Ok(body.models.into_iter().map(|m| m.name).collect())
    }
}

/// Pull the generated text out of a response, like the SDKs' `response.text`
fn extract_text(response: GenerateContentResponse) -> Result<String, LlmError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(LlmError::EmptyResponse)?;

    let content = candidate.content.ok_or(LlmError::EmptyResponse)?;

    let text: String = content
        .parts
        .into_iter()
        .filter_map(|part| match part {
            Part::Text { text } => Some(text),
            Part::InlineData { .. } => None,
        })
        .collect();

    if text.is_empty() {
        return Err(LlmError::EmptyResponse);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::gemini::types::Candidate;

    fn client() -> GeminiClient {
        GeminiClient::new(
            Client::new(),
            "test-key".to_string(),
            "https://generativelanguage.googleapis.com/v1beta".to_string(),
            "gemini-2.5-flash-lite".to_string(),
        )
    }

    #[test]
    fn test_model_url_format() {
        let url = client().model_url("generateContent");
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-lite:generateContent?key=test-key"
        );
    }

    #[test]
    fn test_extract_text_concatenates_parts() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: "model".to_string(),
                    parts: vec![Part::text("Use "), Part::text("neem oil.")],
                }),
                finish_reason: Some("STOP".to_string()),
            }],
        };
        assert_eq!(extract_text(response).unwrap(), "Use neem oil.");
    }

    #[test]
    fn test_extract_text_no_candidates() {
        let response = GenerateContentResponse { candidates: vec![] };
        assert!(matches!(
            extract_text(response),
            Err(LlmError::EmptyResponse)
        ));
    }

    #[test]
    fn test_extract_text_blocked_candidate() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: None,
                finish_reason: Some("SAFETY".to_string()),
            }],
        };
        assert!(matches!(
            extract_text(response),
            Err(LlmError::EmptyResponse)
        ));
    }
}
