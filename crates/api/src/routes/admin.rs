//! Route definitions for `/admin`.
//!
//! Everything except `/login` sits behind [`require_admin`].

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{auth, contacts, projects, skills, upload};
use crate::middleware::auth::require_admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST   /login                 -> login (public)
///
/// POST   /projects              -> create
/// PUT    /projects/{id}         -> update
/// DELETE /projects/{id}         -> delete
/// POST   /upload                -> upload
/// POST   /upload-multiple       -> upload_multiple
/// GET    /contacts              -> list
/// PUT    /contacts/{id}/status  -> update_status
/// POST   /skills                -> create
/// DELETE /skills/{id}           -> delete
/// ```
pub fn router(state: &AppState) -> Router<AppState> {
    let uploads = Router::new()
        .route("/upload", post(upload::upload))
        .route("/upload-multiple", post(upload::upload_multiple))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes));

    let protected = Router::new()
        .route("/projects", post(projects::create))
        .route("/projects/{id}", put(projects::update).delete(projects::delete))
        .route("/contacts", get(contacts::list))
        .route("/contacts/{id}/status", put(contacts::update_status))
        .route("/skills", post(skills::create))
        .route("/skills/{id}", delete(skills::delete))
        .merge(uploads)
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/login", post(auth::login))
        .merge(protected)
}
