//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ShelfError`]
//! via `From`, so ports only ever speak one error type.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum ShelfError {
    /// A payload or domain object violated an invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Field-level validation failures.
///
/// The display text is returned verbatim to HTTP clients, so every message
/// names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The payload was `null` or not a JSON object.
    #[error("Payload must be a JSON object")]
    NotAnObject,

    /// `name` absent, empty, or not a string on create.
    #[error("Name is required and must be a non-empty string")]
    NameRequired,

    /// `price` absent or not a number on create.
    #[error("Price is required and must be a number")]
    PriceRequired,

    /// `size` absent or outside the allowed scale on create.
    #[error("Size is required and must be one of s,m,l")]
    SizeRequired,

    /// `name` present on update but empty or not a string.
    #[error("Name must be a non-empty string")]
    InvalidName,

    /// `price` present on update but not a number.
    #[error("Price must be a number")]
    InvalidPrice,

    /// `size` present on update but outside the allowed scale.
    #[error("Size must be one of s,m,l")]
    InvalidSize,
}

/// A lookup by id found nothing.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"Item"`).
    pub entity: &'static str,
    /// The identifier that was requested.
    pub id: String,
}
