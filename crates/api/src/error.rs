use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use mdnote_db::StoreError;

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`StoreError`] for persistence errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce the site's HTML error
/// pages; internal detail is logged server-side and never sent verbatim to
/// the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A persistence error from `mdnote_db`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The article ID segment of the path is not a decimal u64.
    #[error("malformed article id: {0}")]
    InvalidId(String),

    /// An internal error with a human-readable message.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store(StoreError::NotFound { id }) => {
                tracing::debug!(article_id = id, "Article not found");
                (StatusCode::NOT_FOUND, Html(views::not_found().into_string())).into_response()
            }

            // Never conflated with not-found, and never reveals whether the
            // ID exists or which field was wrong.
            AppError::Store(StoreError::Unauthorized) => {
                (StatusCode::UNAUTHORIZED, Html(views::wrong_password().into_string())).into_response()
            }

            // Storage faults: corrupt records, encoding failures, backend
            // errors. Logged with detail, surfaced as a generic 500 page.
            AppError::Store(err) => {
                tracing::error!(error = %err, "Storage fault");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(views::server_error().into_string())).into_response()
            }

            // A malformed ID is rejected before reaching the store; the
            // user-facing signal matches a missing article.
            AppError::InvalidId(raw) => {
                tracing::debug!(raw = %raw, "Malformed article ID in path");
                (StatusCode::NOT_FOUND, Html(views::not_found().into_string())).into_response()
            }

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(views::server_error().into_string())).into_response()
            }
        }
    }
}
