//! Contact message model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public contact form submission. Every field is required, but they are
/// optional here so the handler can name the first missing one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Request body for `PUT /admin/contacts/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContactStatus {
    #[serde(default)]
    pub status: String,
}

/// Query parameters for `GET /admin/contacts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactFilters {
    pub status: Option<String>,
}
