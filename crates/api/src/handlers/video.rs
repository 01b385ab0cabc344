//! Handlers for the `/videos` resource.
//!
//! Discovery flow: raw params are validated into a `QuerySpec`, the
//! owner scope (if any) is checked for existence exactly once, the
//! fixed-order pipeline is composed and executed, and the rows are
//! shaped into the camelCase response envelope. Validation happens
//! before any store access.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use vidtube_core::discovery::{build_pipeline, ListVideosParams, QuerySpec};
use vidtube_core::error::CoreError;
use vidtube_core::types::{DbId, Timestamp};
use vidtube_db::models::video::VideoWithOwner;
use vidtube_db::repositories::{UserRepo, VideoRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// Owner identity denormalized onto each video.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub id: DbId,
    pub username: String,
    pub full_name: String,
    pub avatar: Option<String>,
}

/// A video with its owner projection, as returned to callers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_secs: f64,
    pub view_count: i64,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub owner: OwnerResponse,
}

impl From<VideoWithOwner> for VideoResponse {
    fn from(row: VideoWithOwner) -> Self {
        VideoResponse {
            id: row.id,
            title: row.title,
            description: row.description,
            video_url: row.video_url,
            thumbnail_url: row.thumbnail_url,
            duration_secs: row.duration_secs,
            view_count: row.view_count,
            is_published: row.is_published,
            created_at: row.created_at,
            owner: OwnerResponse {
                id: row.owner_id,
                username: row.owner_username,
                full_name: row.owner_full_name,
                avatar: row.owner_avatar_url,
            },
        }
    }
}

/// The list envelope: one page of videos plus the applied spec echoed
/// back for client-side pagination continuation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    pub videos: Vec<VideoResponse>,
    pub page: i64,
    pub limit: i64,
    pub sort_by: &'static str,
    pub sort_type: &'static str,
    pub count: usize,
}

impl VideoListResponse {
    fn assemble(rows: Vec<VideoWithOwner>, spec: &QuerySpec) -> Self {
        let videos: Vec<VideoResponse> = rows.into_iter().map(Into::into).collect();
        VideoListResponse {
            count: videos.len(),
            videos,
            page: spec.page,
            limit: spec.limit,
            sort_by: spec.sort_field.as_str(),
            sort_type: spec.sort_direction.as_str(),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/videos
///
/// Discovery listing over the published catalog. Supports `page`,
/// `limit`, `query`, `sortBy`, `sortType`, and `userId`. An empty page
/// is a successful response, not an error.
pub async fn list_videos(
    State(state): State<AppState>,
    Query(params): Query<ListVideosParams>,
) -> AppResult<impl IntoResponse> {
    let spec = QuerySpec::from_params(&params)?;

    // Owner existence is checked once per request, never per record.
    if let Some(owner_id) = spec.owner_scope {
        UserRepo::find_by_id(&state.pool, owner_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "User",
                id: owner_id,
            })?;
    }

    let stages = build_pipeline(&spec);
    let rows = VideoRepo::discover(&state.pool, &stages).await?;

    tracing::debug!(
        page = spec.page,
        limit = spec.limit,
        owner_scope = ?spec.owner_scope,
        query = ?spec.free_text,
        results = rows.len(),
        "Discovery query executed",
    );

    Ok(Json(DataResponse {
        data: VideoListResponse::assemble(rows, &spec),
    }))
}

/// GET /api/v1/videos/{id}
///
/// Fetch a single published video with its owner projection.
pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let video = VideoRepo::find_published_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Video",
            id,
        })?;

    Ok(Json(DataResponse {
        data: VideoResponse::from(video),
    }))
}
