// Shared application state, built once at startup

use crate::config::{self, AppConfig};
use crate::llm::GeminiClient;
use crate::weather::WeatherClient;

/// Upstream clients for the configured providers.
///
/// A client is `None` when its API key is absent; the owning handler
/// reports the missing key at call time. One `reqwest::Client` is shared
/// so connections are pooled across both upstreams.
pub struct AppState {
    pub weather: Option<WeatherClient>,
    pub gemini: Option<GeminiClient>,
}

impl AppState {
    /// Build clients from the configuration.
    pub fn new(config: AppConfig) -> Self {
        let http_client = reqwest::Client::new();

        let weather = config.weather_api_key.map(|key| {
            WeatherClient::new(http_client.clone(), key, config.weather_api_base)
        });

        let gemini = config.gemini_api_key.map(|key| {
            GeminiClient::new(
                http_client,
                key,
                config.gemini_api_base,
                config::GEMINI_MODEL.to_string(),
            )
        });

        Self { weather, gemini }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_disable_clients() {
        let state = AppState::new(AppConfig {
            gemini_api_key: None,
            weather_api_key: None,
            weather_api_base: config::WEATHER_API_BASE.to_string(),
            gemini_api_base: config::GEMINI_API_BASE.to_string(),
        });
        assert!(state.weather.is_none());
        assert!(state.gemini.is_none());
    }

    #[test]
    fn test_present_keys_enable_clients() {
        let state = AppState::new(AppConfig {
            gemini_api_key: Some("g".to_string()),
            weather_api_key: Some("w".to_string()),
            weather_api_base: config::WEATHER_API_BASE.to_string(),
            gemini_api_base: config::GEMINI_API_BASE.to_string(),
        });
        assert!(state.weather.is_some());
        assert!(state.gemini.is_some());
    }
}
