//! Route definitions for the `/videos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

/// Routes mounted at `/videos`.
///
/// ```text
/// GET /videos           -> list_videos
/// GET /videos/{id}      -> get_video
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/videos", get(video::list_videos))
        .route("/videos/{id}", get(video::get_video))
}
