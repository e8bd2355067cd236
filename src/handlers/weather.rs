// GET /api/weather handler

use crate::error::ApiError;
use crate::models::WeatherQuery;
use crate::state::AppState;
use std::sync::Arc;
use warp::http::header::CONTENT_TYPE;

pub async fn weather_handler(
    query: WeatherQuery,
    state: Arc<AppState>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let Some(client) = &state.weather else {
        return Err(ApiError::internal("Weather API Key missing on server").reject());
    };

    match client.forecast(&query.location).await {
        // Pass the upstream body through byte-for-byte
        Ok(body) => Ok(warp::reply::with_header(
            body,
            CONTENT_TYPE,
            "application/json",
        )),
        Err(err) => {
            tracing::error!(location = %query.location, error = %err, "Weather API error");
            Err(ApiError::internal("Failed to fetch weather").reject())
        }
    }
}
