// GET /api/models handler

use crate::models::{ModelsErrorResponse, ModelsResponse};
use crate::state::AppState;
use std::convert::Infallible;
use std::sync::Arc;

// Diagnostics endpoint. Failures are reported in-band as a 200 with an
// "error" field rather than an HTTP error status.
pub async fn list_models_handler(state: Arc<AppState>) -> Result<impl warp::Reply, Infallible> {
    let Some(client) = &state.gemini else {
        return Ok(warp::reply::json(&ModelsErrorResponse {
            error: "Gemini API Key missing on server".to_string(),
        }));
    };

    match client.list_models().await {
        Ok(models) => Ok(warp::reply::json(&ModelsResponse { models })),
        Err(err) => {
            tracing::error!(error = %err, "Model list error");
            Ok(warp::reply::json(&ModelsErrorResponse {
                error: err.to_string(),
            }))
        }
    }
}
