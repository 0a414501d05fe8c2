//! Handler for `GET /public/search`.

use axum::extract::State;
use axum::Json;
use folio_core::media::MediaItem;
use folio_core::search::{contains_pattern, normalize_query};
use folio_core::types::DbId;
use folio_db::repositories::ProjectRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// One project matching the query.
#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub media: Option<MediaItem>,
    pub tags: Vec<String>,
    pub featured: bool,
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub results: Vec<SearchHit>,
    pub count: usize,
}

/// GET /api/public/search?q=
///
/// A blank query matches nothing.
pub async fn search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> AppResult<Json<SearchResults>> {
    let Some(query) = normalize_query(params.q.as_deref()) else {
        return Ok(Json(SearchResults {
            results: Vec::new(),
            count: 0,
        }));
    };

    let results: Vec<SearchHit> = ProjectRepo::search(&state.pool, &contains_pattern(query))
        .await?
        .into_iter()
        .map(|p| SearchHit {
            media: p.cover().cloned(),
            id: p.id,
            title: p.title,
            slug: p.slug,
            short_description: p.short_description,
            tags: p.tags,
            featured: p.featured,
        })
        .collect();

    tracing::debug!(query, hits = results.len(), "Search");
    Ok(Json(SearchResults {
        count: results.len(),
        results,
    }))
}
