//! Handlers for contact messages: public submission and admin triage.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::contact::{validate_submission, ContactStatus};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::contact::{Contact, ContactFilters, CreateContact, UpdateContactStatus};
use folio_db::repositories::ContactRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AdminIdentity;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub message: &'static str,
    pub contact_id: DbId,
}

/// POST /api/public/contact
pub async fn submit(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateContact>,
) -> AppResult<(StatusCode, Json<ContactReceipt>)> {
    validate_submission(
        input.name.as_deref(),
        input.email.as_deref(),
        input.subject.as_deref(),
        input.message.as_deref(),
    )?;

    let field = |v: &Option<String>| v.as_deref().unwrap_or_default().trim().to_string();
    let contact = ContactRepo::create(
        &state.pool,
        &field(&input.name),
        &field(&input.email),
        &field(&input.subject),
        &field(&input.message),
    )
    .await?;

    tracing::info!(contact_id = contact.id, "Contact message received");
    Ok((
        StatusCode::CREATED,
        Json(ContactReceipt {
            message: "Message sent successfully",
            contact_id: contact.id,
        }),
    ))
}

/// GET /api/admin/contacts
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminIdentity,
    AppQuery(filters): AppQuery<ContactFilters>,
) -> AppResult<Json<Vec<Contact>>> {
    let status = filters.status.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let contacts = ContactRepo::list(&state.pool, status).await?;
    Ok(Json(contacts))
}

/// PUT /api/admin/contacts/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    _admin: AdminIdentity,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateContactStatus>,
) -> AppResult<Json<Contact>> {
    let status: ContactStatus = input.status.trim().parse()?;
    let contact = ContactRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Contact", id)))?;

    tracing::info!(contact_id = id, status = %status, "Contact status updated");
    Ok(Json(contact))
}
