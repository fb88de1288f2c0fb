//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use shelf_domain::error::ShelfError;

use crate::envelope::Envelope;
use crate::payload::PayloadError;

/// Every way a request can fail, mapped to a status code and an envelope.
#[derive(Debug)]
pub enum ApiError {
    /// Failure reported by the application layer.
    Domain(ShelfError),
    /// The request body could not be read or parsed.
    Payload(PayloadError),
    /// No route matches the requested path.
    RouteNotFound,
    /// The path exists under `/api/items` but not for this method.
    MethodNotAllowed,
    /// A static page could not be read from disk.
    StaticPage,
    /// A handler panicked.
    Internal,
}

impl From<ShelfError> for ApiError {
    fn from(err: ShelfError) -> Self {
        Self::Domain(err)
    }
}

impl From<PayloadError> for ApiError {
    fn from(err: PayloadError) -> Self {
        Self::Payload(err)
    }
}

impl From<shelf_domain::error::ValidationError> for ApiError {
    fn from(err: shelf_domain::error::ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Domain(ShelfError::Validation(err)) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Domain(ShelfError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(ShelfError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Self::Payload(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::RouteNotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            Self::StaticPage => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error reading static file".to_string(),
            ),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        Envelope::failure(message).with_status(status)
    }
}
