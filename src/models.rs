// API request and response types

use serde::{Deserialize, Serialize};

// Request Types
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    pub image: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherQuery {
    pub location: String,
}

// Response Types
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelsErrorResponse {
    pub error: String,
}
