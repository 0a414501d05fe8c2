use axum::routing::get;
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Favorites routes, merged into `/api` directly so both `/favorites` and
/// `/favorites/` resolve.
///
/// ```text
/// GET  /favorites/  -> list
/// POST /favorites/  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(favorites::list).post(favorites::create))
        .route("/favorites/", get(favorites::list).post(favorites::create))
}
