//! Video discovery query engine (pure half).
//!
//! Turns raw caller parameters into a validated [`QuerySpec`], and a
//! `QuerySpec` into an ordered list of pipeline [`Stage`]s. Execution
//! against the store lives in `vidtube-db`; everything here is
//! side-effect-free and unit testable.

pub mod pattern;
pub mod pipeline;
pub mod spec;

pub use pattern::{build_search_pattern, SearchPattern, MAX_SEARCH_PATTERN_LEN};
pub use pipeline::{build_pipeline, Stage};
pub use spec::{
    ListVideosParams, QuerySpec, SortDirection, SortField, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
