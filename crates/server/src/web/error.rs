use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Errors surfaced by the web handlers
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WebError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            WebError::Internal(_) => {
                error!(error = %self, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;
