//! Upload facade over a [`MediaHost`].

use std::sync::Arc;

use folio_core::media::is_allowed_file;
use serde::Serialize;

use crate::error::MediaError;
use crate::host::{MediaDescriptor, MediaHost, UploadRequest};

/// Resource type assumed by [`MediaUploader::delete`].
const DEFAULT_RESOURCE_TYPE: &str = "image";

/// One file in a batch that did not make it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedUpload {
    pub filename: String,
    pub reason: String,
}

/// Outcome of [`MediaUploader::upload_multiple`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchUpload {
    pub uploaded: Vec<MediaDescriptor>,
    pub failed: Vec<FailedUpload>,
}

/// Validates and forwards uploads to the configured provider.
pub struct MediaUploader {
    host: Arc<dyn MediaHost>,
    default_folder: String,
}

impl MediaUploader {
    pub fn new(host: Arc<dyn MediaHost>, default_folder: impl Into<String>) -> Self {
        Self {
            host,
            default_folder: default_folder.into(),
        }
    }

    /// Upload one file. Rejects disallowed extensions before any network
    /// call. `folder` falls back to the configured default.
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        folder: Option<&str>,
    ) -> Result<MediaDescriptor, MediaError> {
        if !is_allowed_file(filename) {
            return Err(MediaError::UnsupportedMediaType {
                filename: filename.to_string(),
            });
        }

        let folder = folder
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(&self.default_folder)
            .to_string();

        let descriptor = self
            .host
            .upload(UploadRequest {
                bytes,
                filename: filename.to_string(),
                folder: folder.clone(),
            })
            .await?;

        tracing::info!(
            provider_id = %descriptor.provider_id,
            folder = %folder,
            size_bytes = descriptor.size_bytes,
            "Media uploaded"
        );
        Ok(descriptor)
    }

    /// Upload each `(filename, bytes)` pair independently, in order. One
    /// failure does not stop the rest.
    pub async fn upload_multiple(
        &self,
        files: Vec<(String, Vec<u8>)>,
        folder: Option<&str>,
    ) -> BatchUpload {
        let mut batch = BatchUpload::default();
        for (filename, bytes) in files {
            match self.upload(bytes, &filename, folder).await {
                Ok(descriptor) => batch.uploaded.push(descriptor),
                Err(e) => {
                    tracing::warn!(filename = %filename, error = %e, "Batch upload item failed");
                    batch.failed.push(FailedUpload {
                        filename,
                        reason: e.to_string(),
                    });
                }
            }
        }
        batch
    }

    /// Best-effort delete of an image asset. Returns whether the provider
    /// confirmed the removal; failures are logged, never raised.
    pub async fn delete(&self, provider_id: &str) -> bool {
        self.delete_resource(provider_id, DEFAULT_RESOURCE_TYPE).await
    }

    /// Best-effort delete of an asset of the given resource type
    /// (`image`, `video`, `raw`).
    pub async fn delete_resource(&self, provider_id: &str, resource_type: &str) -> bool {
        match self.host.destroy(provider_id, resource_type).await {
            Ok(()) => {
                tracing::info!(provider_id, resource_type, "Media deleted");
                true
            }
            Err(e) => {
                tracing::warn!(provider_id, resource_type, error = %e, "Media delete failed");
                false
            }
        }
    }
}
