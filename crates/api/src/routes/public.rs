//! Route definitions for `/public`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{contacts, search, skills};
use crate::state::AppState;

/// Routes mounted at `/public`.
///
/// ```text
/// POST /contact  -> submit
/// GET  /search   -> search
/// GET  /skills   -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contacts::submit))
        .route("/search", get(search::search))
        .route("/skills", get(skills::list))
}
