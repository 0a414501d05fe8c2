//! Repository for the `skills` table.

use folio_core::skill::{DEFAULT_PROFICIENCY, DEFAULT_SKILL_CATEGORY};
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::skill::{CreateSkill, Skill};

const COLUMNS: &str = "id, name, category, proficiency, icon, created_at, updated_at";

/// Provides create/list/delete for skills. Skills have no update path.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new skill, filling defaults for omitted fields.
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, category, proficiency, icon)
             VALUES ($1, COALESCE($2, $5), COALESCE($3, $6), COALESCE($4, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(input.name.trim())
            .bind(&input.category)
            .bind(input.proficiency)
            .bind(&input.icon)
            .bind(DEFAULT_SKILL_CATEGORY)
            .bind(DEFAULT_PROFICIENCY)
            .fetch_one(pool)
            .await
    }

    /// All skills grouped by category, strongest first within a category.
    pub async fn list(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skills ORDER BY category ASC, proficiency DESC, id ASC"
        );
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// Delete a skill by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
