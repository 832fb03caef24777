//! HTTP error mapping.
//!
//! Pipeline errors split into two status classes: caller-correctable input
//! problems map to 400, configuration/provider/parse problems map to 500.
//! The body shape is `{"detail": "..."}` with a message naming the cause.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use classification::ClassificationError;
use serde_json::json;
use thiserror::Error;

/// Errors a handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A classification pipeline failure
    #[error(transparent)]
    Pipeline(#[from] ClassificationError),

    /// A malformed request (missing multipart field, unreadable body)
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest(detail.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Pipeline(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();

        if status.is_server_error() {
            tracing::error!(%detail, "request failed");
        } else {
            tracing::debug!(%detail, "request rejected");
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
