//! Weather forecast client implementation

use reqwest::Client;
use thiserror::Error;

/// Errors that can occur when fetching a forecast
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP request failures
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::HttpError {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            body: err.to_string(),
        }
    }
}

/// Client for the WeatherAPI.com forecast endpoint
#[derive(Debug, Clone)]
pub struct WeatherClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API key, sent as a query parameter
    api_key: String,
    /// Base URL, e.g. "https://api.weatherapi.com/v1"
    base_url: String,
}

impl WeatherClient {
    /// Create a new weather client sharing the given HTTP client.
    pub fn new(http_client: Client, api_key: String, base_url: String) -> Self {
        Self {
            http_client,
            api_key,
            base_url,
        }
    }

    /// Build the forecast URL for a location
    fn forecast_url(&self, location: &str) -> String {
        format!(
            "{}/forecast.json?key={}&q={}&days=3&aqi=no&alerts=no",
            self.base_url, self.api_key, location
        )
    }

    /// Fetch the 3-day forecast for a location.
    ///
    /// Returns the raw upstream body so the handler can pass it through
    /// unmodified.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx upstream status.
    pub async fn forecast(&self, location: &str) -> Result<String, WeatherError> {
        let response = self
            .http_client
            .get(self.forecast_url(location))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(WeatherError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}
