//! Gemini API client for the generativelanguage endpoint

pub mod client;
pub mod types;

pub use client::GeminiClient;
pub use types::Part;
