// HTTP error translation

use serde::Serialize;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

/// An error surfaced to the client as an HTTP status with a detail string
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    /// A 500 with the given detail
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }

    /// Wrap into a warp rejection
    pub fn reject(self) -> Rejection {
        warp::reject::custom(self)
    }
}

impl warp::reject::Reject for ApiError {}

// Error body shape: {"detail": "..."}
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Render rejections as JSON error bodies.
pub async fn handle_rejection(rejection: Rejection) -> Result<impl Reply, Infallible> {
    let (status, detail) = if let Some(err) = rejection.find::<ApiError>() {
        (err.status, err.detail.clone())
    } else if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if let Some(err) = rejection.find::<warp::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, err.to_string())
    } else if let Some(err) = rejection.find::<warp::reject::InvalidQuery>() {
        (StatusCode::BAD_REQUEST, err.to_string())
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else {
        tracing::error!(?rejection, "unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorBody { detail }),
        status,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error_shape() {
        let err = ApiError::internal("Failed to fetch weather");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail, "Failed to fetch weather");
    }
}
