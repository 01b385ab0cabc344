//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct
//! matching the database row, plus any read projections it supports.

pub mod user;
pub mod video;
