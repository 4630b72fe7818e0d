//! Ironwood Core - Shared domain types for the dealer platform.
//!
//! This crate provides the common types used across all Ironwood dealer
//! components:
//! - `portal` - Dealer operations HTTP service
//! - `integration-tests` - End-to-end test suite
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no async. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Entity types, status lifecycles, timelines, and newtype IDs
//! - [`geo`] - Great-circle distance and dealer ranking
//! - [`error`] - The operations error taxonomy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod geo;
pub mod types;

pub use error::OpsError;
pub use geo::{haversine_miles, nearest};
pub use types::*;
