use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned to API clients
///
/// All of these are detected before any outbound request is made.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Please enter a search query")]
    EmptyQuery,

    #[error("Please provide a URL to verify")]
    EmptyUrl,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyQuery | Self::EmptyUrl | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// JSON body of an error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!("Rejecting request ({}): {}", status.as_u16(), self);
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}
