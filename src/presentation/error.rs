// API errors and their HTTP mapping
use crate::domain::selection::SelectionError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid selection: {0}")]
    Selection(#[from] SelectionError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Selection(_) => (StatusCode::BAD_REQUEST, "INVALID_SELECTION"),
            ApiError::Template(_) => (StatusCode::INTERNAL_SERVER_ERROR, "RENDER_ERROR"),
        };

        if status.is_server_error() {
            tracing::error!(error_code = code, error = %self, "Dashboard render failed");
        } else {
            tracing::warn!(error_code = code, error = %self, "Rejected dashboard request");
        }

        let body = ErrorBody {
            code,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
