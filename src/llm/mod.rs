//! Gemini chat layer
//!
//! Prompt shaping (system instruction, language directives, image payload
//! handling) and the client for Google's generativelanguage API.

pub mod error;
pub mod gemini;
pub mod prompt;

// Re-export commonly used types
pub use error::LlmError;
pub use gemini::client::GeminiClient;
