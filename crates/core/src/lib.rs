//! Domain logic for the vidtube catalog backend.
//!
//! This crate has no internal dependencies (no sqlx, no axum) so the
//! discovery engine's pure half can be unit tested and reused by any
//! future CLI or worker tooling.

pub mod discovery;
pub mod error;
pub mod types;
