//! HTTP error handling.
//!
//! Every failure a handler can hit ends up here and is rendered as an HTML
//! error page with the matching status code.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use todo_store::DomainError;

use crate::views;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::NotFound(msg) => AppError::NotFound(capitalize(&msg) + " not found"),
            DomainError::InvalidInput(msg) => AppError::BadRequest(msg),
            DomainError::Conflict(msg) | DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Internal(detail) => {
                // Details stay in the log
                tracing::error!(%detail, "request failed");
                "Something went wrong.".to_string()
            }
            other => other.to_string(),
        };
        (status, Html(views::error_page(status, &message))).into_response()
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
