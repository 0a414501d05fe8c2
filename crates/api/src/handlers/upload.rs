//! Handlers for media uploads (`/admin/upload`, `/admin/upload-multiple`).

use axum::extract::{Multipart, State};
use axum::Json;
use folio_core::error::CoreError;
use folio_core::media::MediaItem;
use folio_core::types::DbId;
use folio_db::models::project::Project;
use folio_db::repositories::ProjectRepo;
use folio_media::{BatchUpload, MediaDescriptor};
use serde::Serialize;
use sqlx::{Postgres, Transaction};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminIdentity;
use crate::state::AppState;

/// Filename used when a multipart file part does not carry one.
const UNNAMED_UPLOAD: &str = "upload";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub media: MediaDescriptor,
    /// The project the upload was attached to, when `project_id` was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
}

fn multipart_error(e: impl std::fmt::Display) -> AppError {
    AppError::BadRequest(e.to_string())
}

/// Read a text field, treating blank values as absent.
async fn text_field(field: axum::extract::multipart::Field<'_>) -> AppResult<Option<String>> {
    let text = field.text().await.map_err(multipart_error)?;
    let trimmed = text.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

/// POST /api/admin/upload
///
/// Multipart fields: `file` (required), `folder`, `project_id`, `caption`.
/// With `project_id`, the uploaded item is appended to that project's media.
pub async fn upload(
    State(state): State<AppState>,
    admin: AdminIdentity,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut folder: Option<String> = None;
    let mut project_id: Option<DbId> = None;
    let mut caption: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or(UNNAMED_UPLOAD).to_string();
                let data = field.bytes().await.map_err(multipart_error)?;
                file = Some((filename, data.to_vec()));
            }
            "folder" => folder = text_field(field).await?,
            "project_id" => {
                project_id = match text_field(field).await? {
                    Some(raw) => Some(raw.parse().map_err(|_| {
                        AppError::BadRequest(format!("Invalid project_id '{raw}'"))
                    })?),
                    None => None,
                };
            }
            "caption" => caption = text_field(field).await?,
            _ => {} // ignore unknown fields
        }
    }

    let (filename, data) =
        file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let Some(project_id) = project_id else {
        let media = state.media.upload(data, &filename, folder.as_deref()).await?;
        return Ok(Json(UploadResponse {
            media,
            project: None,
        }));
    };

    let mut tx = state.pool.begin().await?;
    ProjectRepo::find_by_id_for_update(&mut tx, project_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", project_id)))?;

    let media = state.media.upload(data, &filename, folder.as_deref()).await?;
    let item = MediaItem {
        kind: media.kind.clone(),
        url: media.url.clone(),
        caption,
        provider_id: Some(media.provider_id.clone()),
    };
    let project = match attach(tx, project_id, &item).await {
        Ok(project) => project,
        Err(e) => {
            // The asset is already hosted; don't leave it behind.
            state
                .media
                .delete_resource(&media.provider_id, &media.kind)
                .await;
            return Err(e);
        }
    };

    tracing::info!(
        project_id,
        provider_id = %media.provider_id,
        token_id = %admin.token_id,
        "Media attached to project"
    );
    Ok(Json(UploadResponse {
        media,
        project: Some(project),
    }))
}

/// Append `item` to the locked project and commit.
async fn attach(
    mut tx: Transaction<'_, Postgres>,
    project_id: DbId,
    item: &MediaItem,
) -> AppResult<Project> {
    let project = ProjectRepo::append_media(&mut *tx, project_id, item)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", project_id)))?;
    tx.commit().await?;
    Ok(project)
}

/// POST /api/admin/upload-multiple
///
/// Multipart fields: repeated `files`, optional `folder`. Each file succeeds
/// or fails on its own.
pub async fn upload_multiple(
    State(state): State<AppState>,
    _admin: AdminIdentity,
    mut multipart: Multipart,
) -> AppResult<Json<BatchUpload>> {
    let mut files: Vec<(String, Vec<u8>)> = Vec::new();
    let mut folder: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "files" => {
                let filename = field.file_name().unwrap_or(UNNAMED_UPLOAD).to_string();
                let data = field.bytes().await.map_err(multipart_error)?;
                files.push((filename, data.to_vec()));
            }
            "folder" => folder = text_field(field).await?,
            _ => {}
        }
    }

    if files.is_empty() {
        return Err(AppError::BadRequest("No files provided".into()));
    }

    let batch = state.media.upload_multiple(files, folder.as_deref()).await;
    tracing::info!(
        uploaded = batch.uploaded.len(),
        failed = batch.failed.len(),
        "Batch upload finished"
    );
    Ok(Json(batch))
}
