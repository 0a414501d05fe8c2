//! The media provider seam.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::MediaError;

/// A file to hand to the provider.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub folder: String,
}

/// Normalized result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaDescriptor {
    pub url: String,
    pub provider_id: String,
    /// Provider resource type (`image`, `video`, `raw`).
    #[serde(rename = "type")]
    pub kind: String,
    pub format: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub size_bytes: u64,
}

/// A remote store for uploaded media.
#[async_trait]
pub trait MediaHost: Send + Sync {
    /// Store `request` and describe where it ended up.
    async fn upload(&self, request: UploadRequest) -> Result<MediaDescriptor, MediaError>;

    /// Remove the asset `provider_id` of the given resource type.
    async fn destroy(&self, provider_id: &str, resource_type: &str) -> Result<(), MediaError>;
}

/// Stand-in host used when no provider credentials are configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledHost;

const NOT_CONFIGURED: &str = "media hosting is not configured";

#[async_trait]
impl MediaHost for DisabledHost {
    async fn upload(&self, _request: UploadRequest) -> Result<MediaDescriptor, MediaError> {
        Err(MediaError::UploadFailed(NOT_CONFIGURED.into()))
    }

    async fn destroy(&self, _provider_id: &str, _resource_type: &str) -> Result<(), MediaError> {
        Err(MediaError::DeleteFailed(NOT_CONFIGURED.into()))
    }
}
