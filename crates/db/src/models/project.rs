//! Project entity model and DTOs.

use std::collections::BTreeMap;

use folio_core::media::MediaItem;
use folio_core::related::Taggable;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Named external links, e.g. `{"demo": "...", "github": "..."}`.
pub type ProjectLinks = BTreeMap<String, String>;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub full_description: String,
    pub media: Json<Vec<MediaItem>>,
    pub tags: Vec<String>,
    pub technologies: Vec<String>,
    pub links: Json<ProjectLinks>,
    pub featured: bool,
    pub status: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub views: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// First media item, used as the thumbnail in list-style responses.
    pub fn cover(&self) -> Option<&MediaItem> {
        self.media.0.first()
    }

    /// Media items that were uploaded through the provider and can be deleted there.
    pub fn hosted_media(&self) -> impl Iterator<Item = &MediaItem> {
        self.media.0.iter().filter(|m| m.provider_id.is_some())
    }
}

impl Taggable for Project {
    fn key(&self) -> DbId {
        self.id
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn technologies(&self) -> &[String] {
        &self.technologies
    }
}

/// Lightweight project view for the public list endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSummary {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub media: Json<Vec<MediaItem>>,
    pub tags: Vec<String>,
    pub technologies: Vec<String>,
    pub featured: bool,
    pub status: String,
    pub views: i64,
    pub created_at: Timestamp,
}

/// DTO for creating a new project.
///
/// `title` defaults to empty so a missing title surfaces as a validation
/// error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    #[serde(default)]
    pub title: String,
    /// Derived from `title` when omitted.
    pub slug: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub media: Option<Vec<MediaItem>>,
    pub tags: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub links: Option<ProjectLinks>,
    pub featured: Option<bool>,
    /// Defaults to `completed` if omitted.
    pub status: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing project. All fields are optional; absent
/// fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub media: Option<Vec<MediaItem>>,
    pub tags: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub links: Option<ProjectLinks>,
    pub featured: Option<bool>,
    pub status: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

/// Query parameters for `GET /projects`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilters {
    pub featured: Option<bool>,
    pub status: Option<String>,
    pub tag: Option<String>,
    pub technology: Option<String>,
    pub sort_by: Option<String>,
}
