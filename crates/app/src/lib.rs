//! # shelf-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - `ItemStore` — load and save the whole item collection
//! - Define the **driving/inbound** use-case struct:
//!   - `ItemService` — list, create, get, update, delete
//! - Provide **in-process infrastructure** (an in-memory store) that doesn't need IO
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `shelf-domain` only (plus `tokio::sync` for the write lock).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod memory_store;
pub mod ports;
pub mod services;
