//! Handlers for the `/skills` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::skill::validate_proficiency;
use folio_core::types::DbId;
use folio_db::models::skill::{CreateSkill, Skill};
use folio_db::repositories::SkillRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AdminIdentity;
use crate::state::AppState;

/// GET /api/public/skills
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Skill>>> {
    let skills = SkillRepo::list(&state.pool).await?;
    Ok(Json(skills))
}

/// POST /api/admin/skills
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminIdentity,
    AppJson(input): AppJson<CreateSkill>,
) -> AppResult<(StatusCode, Json<Skill>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation("name is required".into())));
    }
    if let Some(proficiency) = input.proficiency {
        validate_proficiency(proficiency)?;
    }

    let skill = SkillRepo::create(&state.pool, &input).await?;
    tracing::info!(skill_id = skill.id, name = %skill.name, "Skill created");
    Ok((StatusCode::CREATED, Json(skill)))
}

/// DELETE /api/admin/skills/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminIdentity,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if SkillRepo::delete(&state.pool, id).await? {
        tracing::info!(skill_id = id, "Skill deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Skill", id)))
    }
}
