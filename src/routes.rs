// Route definitions and wiring

use crate::error::handle_rejection;
use crate::handlers;
use crate::models::WeatherQuery;
use crate::state::AppState;
use std::sync::Arc;
use warp::Filter;

pub fn configure_routes(
    state: Arc<AppState>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let state_filter = warp::any().map(move || state.clone());

    // GET /
    let status = warp::path::end()
        .and(warp::get())
        .and_then(handlers::status_handler);

    let api = warp::path("api");

    // GET /api/weather?location=...
    let weather = api
        .and(warp::path("weather"))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<WeatherQuery>())
        .and(state_filter.clone())
        .and_then(handlers::weather_handler);

    // POST /api/chat
    let chat = api
        .and(warp::path("chat"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(state_filter.clone())
        .and_then(handlers::chat_handler);

    // GET /api/models
    let models = api
        .and(warp::path("models"))
        .and(warp::path::end())
        .and(warp::get())
        .and(state_filter)
        .and_then(handlers::list_models_handler);

    // Any frontend origin may call this service
    let cors = warp::cors()
        .allow_any_origin()
        .allow_credentials(true)
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"]);

    // Combine routes
    status
        .or(weather)
        .or(chat)
        .or(models)
        .recover(handle_rejection)
        .with(cors)
}
