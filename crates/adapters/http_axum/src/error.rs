//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use rfpanel_domain::error::PanelError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`PanelError`] to an HTTP response with appropriate status code.
pub struct ApiError(PanelError);

impl From<PanelError> for ApiError {
    fn from(err: PanelError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            PanelError::UnknownControl(err) => (StatusCode::NOT_FOUND, err.to_string()),
            PanelError::SchemaType(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            PanelError::Transport(err) => {
                tracing::error!(error = %err, "transport error");
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            PanelError::SchemaLoad(err) => {
                tracing::error!(error = %err, "schema load error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
