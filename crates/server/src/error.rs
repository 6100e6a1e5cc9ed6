//! Server error type.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use churn_model::ModelError;
use thiserror::Error;

use crate::views;

/// Errors surfaced by the batch upload handler.
///
/// Rendered back into the upload page's error list instead of leaking a
/// bare internal error to the browser.
#[derive(Debug, Error)]
pub enum AppError {
    /// Multipart body could not be read
    #[error("Upload failed: {0}")]
    BadUpload(String),

    /// Model rejected the input or the artifact misbehaved
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadUpload(_) => StatusCode::BAD_REQUEST,
            AppError::Model(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        let body = views::batch_page(&[self.to_string()]);
        (status, Html(body)).into_response()
    }
}
