//! # shelf-adapter-storage-json-file
//!
//! Flat-file persistence adapter: the whole item collection lives in one
//! pretty-printed JSON array on disk.
//!
//! ## Responsibilities
//! - Implement the `ItemStore` port trait defined in `shelf-app::ports::storage`
//! - Create the data file (and its directory) lazily on first access
//! - Repair an unreadable data file by resetting it to an empty array
//!
//! ## Dependency rule
//! Depends on `shelf-app` (for port traits) and `shelf-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod store;

pub use store::{Config, JsonFileItemStore};
