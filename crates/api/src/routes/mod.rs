pub mod health;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /videos           GET  discovery listing (?page, ?limit, ?query, ?sortBy, ?sortType, ?userId)
/// /videos/{id}      GET  single published video with owner
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(video::router())
}
