//! # shelf-domain
//!
//! Pure domain model for the shelf item catalogue.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Items** (named, priced, sized records) and their **Size** scale
//! - Define the **payload contracts** used to create and update items
//! - Contain all invariant enforcement and field validation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod item;
