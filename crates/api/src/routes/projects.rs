//! Route definitions for the public `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET /                 -> list
/// GET /related/{slug}   -> related
/// GET /{slug}           -> get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list))
        .route("/related/{slug}", get(projects::related))
        .route("/{slug}", get(projects::get_by_slug))
}
