//! Favorite (film / athlete) model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `favorites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub tier: String,
    pub year: Option<i32>,
    pub genre_or_sport: Option<String>,
    pub achievement: Option<String>,
    pub poster_or_photo: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a favorite. `title`, `category` and `tier` are required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFavorite {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tier: String,
    pub year: Option<i32>,
    pub genre_or_sport: Option<String>,
    pub achievement: Option<String>,
    pub poster_or_photo: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}
