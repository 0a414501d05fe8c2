//! Skill entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A skill row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub proficiency: i32,
    pub icon: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a skill. Only `name` is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSkill {
    #[serde(default)]
    pub name: String,
    /// Defaults to `Other`.
    pub category: Option<String>,
    /// Defaults to 50.
    pub proficiency: Option<i32>,
    pub icon: Option<String>,
}
