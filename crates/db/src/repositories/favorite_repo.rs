//! Repository for the `favorites` table.

use sqlx::PgPool;

use crate::models::favorite::{CreateFavorite, Favorite};

const COLUMNS: &str = "\
    id, title, category, tier, year, genre_or_sport, achievement, \
    poster_or_photo, sort_order, created_at, updated_at";

/// Provides persistence for the favorites list.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a favorite. The caller has already validated category and tier.
    pub async fn create(pool: &PgPool, input: &CreateFavorite) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites (
                title, category, tier, year, genre_or_sport, achievement,
                poster_or_photo, sort_order
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(input.title.trim())
            .bind(input.category.trim())
            .bind(input.tier.trim())
            .bind(input.year)
            .bind(&input.genre_or_sport)
            .bind(&input.achievement)
            .bind(&input.poster_or_photo)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// All favorites ordered by tier, display order, then creation time.
    pub async fn list(pool: &PgPool) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM favorites ORDER BY tier ASC, sort_order ASC, created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Favorite>(&query).fetch_all(pool).await
    }
}
