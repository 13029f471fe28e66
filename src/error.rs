use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::client::ClientError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const SESSION_ERROR_MESSAGE: &str = "Failed to create session";

/// Failures a handler can report. The detail is logged; the caller only ever
/// sees the fixed message for the variant.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to serve index page: {0}")]
    Index(#[from] std::io::Error),
    #[error("failed to create session: {0}")]
    Session(#[from] ClientError),
}

impl AppError {
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Index(_) => INTERNAL_ERROR_MESSAGE,
            AppError::Session(_) => SESSION_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.public_message() })),
        )
            .into_response()
    }
}
