pub mod admin;
pub mod favorites;
pub mod health;
pub mod projects;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                 list (filters, sort_by)
/// /projects/{slug}                          fetch by slug, counts a view
/// /projects/related/{slug}                  up to three related projects
///
/// /admin/login                              exchange password for token (public)
/// /admin/projects                           create (admin)
/// /admin/projects/{id}                      update, delete (admin)
/// /admin/upload                             single upload, optional attach (admin)
/// /admin/upload-multiple                    batch upload (admin)
/// /admin/contacts                           list, ?status= (admin)
/// /admin/contacts/{id}/status               set status (admin)
/// /admin/skills                             create (admin)
/// /admin/skills/{id}                        delete (admin)
///
/// /public/contact                           submit contact form
/// /public/search                            ?q= substring search
/// /public/skills                            list skills
///
/// /favorites/                               grouped list, create
/// ```
pub fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest("/projects", projects::router())
        .nest("/admin", admin::router(state))
        .nest("/public", public::router())
        .merge(favorites::router())
}
