//! Video catalog entity model and read projections.

use serde::Serialize;
use sqlx::FromRow;
use vidtube_core::types::{DbId, Timestamp};

/// A video row with its owner projection denormalized by the discovery
/// join. Flat on purpose so it maps straight off the joined SELECT; the
/// API layer shapes it into a nested envelope.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoWithOwner {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_secs: f64,
    pub view_count: i64,
    pub is_published: bool,
    pub owner_id: DbId,
    pub created_at: Timestamp,
    pub owner_username: String,
    pub owner_full_name: String,
    pub owner_avatar_url: Option<String>,
}
