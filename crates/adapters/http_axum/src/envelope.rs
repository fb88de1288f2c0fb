//! Uniform `{success, data|error}` wrapper for every API response.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Either a payload or a human-readable failure message.
///
/// Serializes as `{"success": true, "data": …}` or
/// `{"success": false, "error": "…"}`.
#[derive(Debug)]
pub enum Envelope<T> {
    Success(T),
    Failure(String),
}

impl<T: Serialize> Envelope<T> {
    /// Pair the envelope with a status code, producing a JSON response.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl Envelope<()> {
    /// Shorthand for a failure envelope.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut state = serializer.serialize_struct("Envelope", 2)?;
        match self {
            Self::Success(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Self::Failure(error) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_serialize_success_with_data() {
        let value = serde_json::to_value(Envelope::Success(vec![1, 2])).unwrap();
        assert_eq!(value, json!({"success": true, "data": [1, 2]}));
    }

    #[test]
    fn should_serialize_failure_with_error_message() {
        let value = serde_json::to_value(Envelope::failure("Item not found")).unwrap();
        assert_eq!(value, json!({"success": false, "error": "Item not found"}));
    }

    #[test]
    fn should_set_status_and_json_content_type() {
        let response = Envelope::Success("ok").with_status(StatusCode::CREATED);
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }
}
