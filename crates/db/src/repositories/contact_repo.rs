//! Repository for the `contacts` table.

use folio_core::contact::ContactStatus;
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::Contact;

const COLUMNS: &str = "id, name, email, subject, message, status, created_at, updated_at";

/// Provides persistence for inbound contact messages.
pub struct ContactRepo;

impl ContactRepo {
    /// Store a validated submission with status `unread`.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, subject, message)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(name)
            .bind(email)
            .bind(subject)
            .bind(message)
            .fetch_one(pool)
            .await
    }

    /// List contacts newest first, optionally restricted to one status.
    ///
    /// The status is matched verbatim, so an unknown value yields an empty list.
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contacts
             WHERE ($1::text IS NULL OR status = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Move a contact to `status`. Returns `None` if no row with the given
    /// `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ContactStatus,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}
