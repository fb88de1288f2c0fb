//! Request body extraction: size cap and lenient JSON parsing.

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, FailedToBufferBody};
use axum::extract::{FromRequest, Request};
use serde_json::Value;

use crate::error::ApiError;

/// Largest accepted request body, in bytes.
pub const MAX_BODY_BYTES: usize = 10_000_000;

/// Reasons a request body is rejected before validation.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The body exceeded [`MAX_BODY_BYTES`].
    #[error("Payload too large")]
    TooLarge,

    /// The body is not valid JSON.
    #[error("Invalid JSON body")]
    InvalidJson(#[source] serde_json::Error),

    /// The connection failed while the body was being read.
    #[error("Failed to read request body")]
    Unreadable,
}

/// The request body parsed as arbitrary JSON.
///
/// An empty body yields `None`; shape checks are left to the domain
/// contracts so that their field-level messages reach the client.
/// The size cap itself is installed with
/// [`DefaultBodyLimit`](axum::extract::DefaultBodyLimit) on the API router.
#[derive(Debug)]
pub struct JsonPayload(pub Option<Value>);

impl JsonPayload {
    /// Borrow the parsed value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.0.as_ref()
    }
}

impl<S: Send + Sync> FromRequest<S> for JsonPayload {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                BytesRejection::FailedToBufferBody(FailedToBufferBody::LengthLimitError(_)) => {
                    PayloadError::TooLarge
                }
                _ => PayloadError::Unreadable,
            })?;

        parse(&bytes).map(Self).map_err(ApiError::from)
    }
}

fn parse(bytes: &[u8]) -> Result<Option<Value>, PayloadError> {
    if bytes.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(bytes)
        .map(Some)
        .map_err(PayloadError::InvalidJson)
}
