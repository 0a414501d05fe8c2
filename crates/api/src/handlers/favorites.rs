//! Handlers for the `/favorites` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::contact::first_missing;
use folio_core::error::CoreError;
use folio_core::favorite::{group_by_tier, FavoriteCategory};
use folio_core::types::DbId;
use folio_db::models::favorite::{CreateFavorite, Favorite};
use folio_db::repositories::FavoriteRepo;
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FilmEntry {
    pub id: DbId,
    pub title: String,
    pub year: Option<i32>,
    pub poster: Option<String>,
    pub genre: Option<String>,
}

impl From<Favorite> for FilmEntry {
    fn from(f: Favorite) -> Self {
        Self {
            id: f.id,
            title: f.title,
            year: f.year,
            poster: f.poster_or_photo,
            genre: f.genre_or_sport,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AthleteEntry {
    pub id: DbId,
    pub name: String,
    pub year: Option<i32>,
    pub poster: Option<String>,
    pub photo: Option<String>,
    pub sport: Option<String>,
    pub achievement: Option<String>,
}

impl From<Favorite> for AthleteEntry {
    fn from(f: Favorite) -> Self {
        Self {
            id: f.id,
            name: f.title,
            year: f.year,
            poster: f.poster_or_photo.clone(),
            photo: f.poster_or_photo,
            sport: f.genre_or_sport,
            achievement: f.achievement,
        }
    }
}

/// Favorites grouped by category, then by tier.
#[derive(Debug, Serialize)]
pub struct GroupedFavorites {
    pub films: IndexMap<String, Vec<FilmEntry>>,
    pub athletes: IndexMap<String, Vec<AthleteEntry>>,
}

#[derive(Debug, Serialize)]
pub struct FavoriteReceipt {
    pub message: &'static str,
    pub id: DbId,
}

/// GET /api/favorites/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<GroupedFavorites>> {
    let mut films: Vec<(String, FilmEntry)> = Vec::new();
    let mut athletes: Vec<(String, AthleteEntry)> = Vec::new();

    for favorite in FavoriteRepo::list(&state.pool).await? {
        match favorite.category.parse::<FavoriteCategory>() {
            Ok(FavoriteCategory::Film) => films.push((favorite.tier.clone(), favorite.into())),
            Ok(FavoriteCategory::Athlete) => {
                athletes.push((favorite.tier.clone(), favorite.into()))
            }
            Err(_) => {
                tracing::warn!(
                    favorite_id = favorite.id,
                    category = %favorite.category,
                    "Skipping favorite with unknown category"
                );
            }
        }
    }

    Ok(Json(GroupedFavorites {
        films: group_by_tier(films),
        athletes: group_by_tier(athletes),
    }))
}

/// POST /api/favorites/
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFavorite>,
) -> AppResult<(StatusCode, Json<FavoriteReceipt>)> {
    let required = [
        ("title", Some(input.title.as_str())),
        ("category", Some(input.category.as_str())),
        ("tier", Some(input.tier.as_str())),
    ];
    if let Some(field) = first_missing(&required) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} is required"
        ))));
    }
    input.category.trim().parse::<FavoriteCategory>()?;

    let favorite = FavoriteRepo::create(&state.pool, &input).await?;
    tracing::info!(favorite_id = favorite.id, category = %favorite.category, "Favorite added");
    Ok((
        StatusCode::CREATED,
        Json(FavoriteReceipt {
            message: "Favorite added successfully",
            id: favorite.id,
        }),
    ))
}
