//! Handlers for the `/projects` resource, public and admin.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::media::MediaItem;
use folio_core::project::{normalize_labels, validate_title};
use folio_core::related::rank_related;
use folio_core::slug::{generate_slug, slug_base};
use folio_core::types::DbId;
use folio_db::models::project::{
    CreateProject, Project, ProjectFilters, ProjectSummary, UpdateProject,
};
use folio_db::repositories::ProjectRepo;
use serde::Serialize;
use sqlx::PgConnection;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AdminIdentity;
use crate::state::AppState;

/// One entry of the related-projects response.
#[derive(Debug, Serialize)]
pub struct RelatedProject {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    /// First media item, if any.
    pub media: Option<MediaItem>,
    pub tags: Vec<String>,
    pub score: u32,
}

fn not_found(key: impl std::fmt::Display) -> AppError {
    AppError::Core(CoreError::not_found("Project", key))
}

/// First free slug derived from `base`, excluding `exclude_id` from the check.
async fn allocate_slug(
    conn: &mut PgConnection,
    base: &str,
    exclude_id: Option<DbId>,
) -> AppResult<String> {
    ProjectRepo::resolve_unique_slug(conn, base, exclude_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(format!(
                "No free slug available for '{base}'"
            )))
        })
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    AppQuery(filters): AppQuery<ProjectFilters>,
) -> AppResult<Json<Vec<ProjectSummary>>> {
    let projects = ProjectRepo::list(&state.pool, &filters).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{slug}
///
/// Every successful fetch counts as one view.
pub async fn get_by_slug(
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::increment_views(&state.pool, &slug)
        .await?
        .ok_or_else(|| not_found(&slug))?;
    Ok(Json(project))
}

/// GET /api/projects/related/{slug}
pub async fn related(
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<Json<Vec<RelatedProject>>> {
    let target = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| not_found(&slug))?;
    let candidates = ProjectRepo::list_all(&state.pool).await?;

    let related = rank_related(&target, candidates)
        .into_iter()
        .map(|ranked| {
            let p = ranked.item;
            RelatedProject {
                media: p.cover().cloned(),
                id: p.id,
                title: p.title,
                slug: p.slug,
                short_description: p.short_description,
                tags: p.tags,
                score: ranked.score,
            }
        })
        .collect();
    Ok(Json(related))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// POST /api/admin/projects
///
/// The slug comes from `slug` if given, else from `title`; either way a
/// numeric suffix is appended until it is unique.
pub async fn create(
    State(state): State<AppState>,
    admin: AdminIdentity,
    AppJson(mut input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_title(&input.title)?;
    input.tags = input.tags.map(normalize_labels);
    input.technologies = input.technologies.map(normalize_labels);

    let base = input
        .slug
        .as_deref()
        .map(generate_slug)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| slug_base(&input.title));

    let mut tx = state.pool.begin().await?;
    let slug = allocate_slug(&mut tx, &base, None).await?;
    let project = ProjectRepo::create(&mut *tx, &input, &slug).await?;
    tx.commit().await?;

    tracing::info!(
        project_id = project.id,
        slug = %project.slug,
        token_id = %admin.token_id,
        "Project created"
    );
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/admin/projects/{id}
///
/// Partial update. A changed title re-derives the slug; an explicit `slug`
/// must not belong to another project.
pub async fn update(
    State(state): State<AppState>,
    admin: AdminIdentity,
    AppPath(id): AppPath<DbId>,
    AppJson(mut input): AppJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    if let Some(title) = input.title.as_deref() {
        validate_title(title)?;
    }
    input.tags = input.tags.map(normalize_labels);
    input.technologies = input.technologies.map(normalize_labels);

    let mut tx = state.pool.begin().await?;
    let existing = ProjectRepo::find_by_id_for_update(&mut tx, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let slug = if let Some(raw) = input.slug.as_deref() {
        let wanted = generate_slug(raw);
        if wanted.is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "slug must contain at least one letter or digit".into(),
            )));
        }
        if wanted != existing.slug && ProjectRepo::slug_taken(&mut *tx, &wanted, Some(id)).await? {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Slug '{wanted}' is already in use"
            ))));
        }
        Some(wanted)
    } else {
        match input.title.as_deref().map(str::trim) {
            Some(title) if title != existing.title => {
                Some(allocate_slug(&mut tx, &slug_base(title), Some(id)).await?)
            }
            _ => None,
        }
    };

    let project = ProjectRepo::update(&mut *tx, id, &input, slug.as_deref())
        .await?
        .ok_or_else(|| not_found(id))?;
    tx.commit().await?;

    tracing::info!(
        project_id = id,
        slug = %project.slug,
        token_id = %admin.token_id,
        "Project updated"
    );
    Ok(Json(project))
}

/// DELETE /api/admin/projects/{id}
///
/// Hosted media is removed from the provider first, best-effort.
pub async fn delete(
    State(state): State<AppState>,
    admin: AdminIdentity,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    let project = ProjectRepo::find_by_id_for_update(&mut tx, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    for item in project.hosted_media() {
        if let Some(provider_id) = item.provider_id.as_deref() {
            state.media.delete_resource(provider_id, &item.kind).await;
        }
    }

    ProjectRepo::delete(&mut *tx, id).await?;
    tx.commit().await?;

    tracing::info!(project_id = id, token_id = %admin.token_id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}
