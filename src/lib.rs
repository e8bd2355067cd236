// HTTP Server modules
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

// Upstream clients
pub mod llm;
pub mod weather;
