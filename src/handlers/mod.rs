// Handlers module

pub mod chat;
pub mod list_models;
pub mod status;
pub mod weather;

pub use chat::chat_handler;
pub use list_models::list_models_handler;
pub use status::status_handler;
pub use weather::weather_handler;
