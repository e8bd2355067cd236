// Process configuration, read once at startup

use std::env;

/// Default WeatherAPI.com base URL
pub const WEATHER_API_BASE: &str = "https://api.weatherapi.com/v1";

/// Default Gemini (generativelanguage) base URL
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini model used for chat
pub const GEMINI_MODEL: &str = "gemini-2.5-flash-lite";

/// Read-only process configuration.
///
/// Built once in `main` and shared by reference into every handler.
/// A missing key does not prevent startup; the dependent endpoint
/// reports it at call time instead.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub weather_api_key: Option<String>,
    pub weather_api_base: String,
    pub gemini_api_base: String,
}

impl AppConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: non_empty_var("GEMINI_API_KEY"),
            weather_api_key: non_empty_var("WEATHER_API_KEY"),
            weather_api_base: WEATHER_API_BASE.to_string(),
            gemini_api_base: GEMINI_API_BASE.to_string(),
        }
    }

    /// Log a warning for each credential that is absent.
    pub fn warn_missing_keys(&self) {
        if self.gemini_api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY not set; /api/chat and /api/models will fail");
        }
        if self.weather_api_key.is_none() {
            tracing::warn!("WEATHER_API_KEY not set; /api/weather will fail");
        }
    }
}

// Treat an empty value the same as an unset variable.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_urls() {
        assert!(WEATHER_API_BASE.starts_with("https://"));
        assert!(GEMINI_API_BASE.contains("generativelanguage"));
    }

    #[test]
    fn test_config_is_cloneable_and_immutable_shape() {
        let config = AppConfig {
            gemini_api_key: Some("g-key".to_string()),
            weather_api_key: None,
            weather_api_base: WEATHER_API_BASE.to_string(),
            gemini_api_base: GEMINI_API_BASE.to_string(),
        };
        let copy = config.clone();
        assert_eq!(copy.gemini_api_key.as_deref(), Some("g-key"));
        assert!(copy.weather_api_key.is_none());
    }
}
