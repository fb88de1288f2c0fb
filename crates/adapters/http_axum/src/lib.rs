//! # shelf-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **items JSON API** under `/api/items`
//!   (list, create, get, update, delete, CORS preflight)
//! - Wrap every API answer in the `{success, data|error}` envelope
//! - Enforce the request body cap and parse payloads into domain contracts
//! - Serve the two static HTML pages (`index.html`, `404.html`)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## Dependency rule
//! Depends on `shelf-app` (for port traits and services) and `shelf-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod envelope;
pub mod error;
pub mod pages;
pub mod payload;
pub mod router;
pub mod state;
