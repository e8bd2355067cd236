use krishi_backend::config::AppConfig;
use krishi_backend::routes::configure_routes;
use krishi_backend::state::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    config.warn_missing_keys();

    let state = Arc::new(AppState::new(config));
    let routes = configure_routes(state);

    tracing::info!("Starting server on http://0.0.0.0:8000");
    warp::serve(routes).run(([0, 0, 0, 0], 8000)).await;
}
