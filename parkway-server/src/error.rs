use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use parkway_core::Error;

/// Maps engine errors to user-facing JSON responses.
///
/// Unknown attractions and disconnected endpoints are caller problems and
/// come back as messages, never a 500; anything else is logged and hidden
/// behind a generic error.
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::AttractionNotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            Error::NoPath { start, end } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("No route found between {start} and {end}"),
            ),
            other => {
                error!("internal error: {other}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}
