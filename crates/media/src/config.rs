//! Media provider configuration loaded from environment variables.

use std::sync::Arc;

use folio_core::media::DEFAULT_FOLDER;

use crate::cloudinary::CloudinaryHost;
use crate::host::{DisabledHost, MediaHost};

/// Default REST base for the hosted provider.
pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Credentials and endpoints for the media provider.
///
/// | Env Var                 | Default                           |
/// |-------------------------|-----------------------------------|
/// | `CLOUDINARY_CLOUD_NAME` | unset                             |
/// | `CLOUDINARY_API_KEY`    | unset                             |
/// | `CLOUDINARY_API_SECRET` | unset                             |
/// | `MEDIA_API_BASE`        | `https://api.cloudinary.com/v1_1` |
/// | `MEDIA_DEFAULT_FOLDER`  | `portfolio`                       |
#[derive(Clone, Default)]
pub struct MediaConfig {
    pub cloud_name: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub api_base: String,
    pub default_folder: String,
}

impl std::fmt::Debug for MediaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_secret", &self.api_secret.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("default_folder", &self.default_folder)
            .finish()
    }
}

impl MediaConfig {
    /// Load from the environment. Blank values count as unset.
    pub fn from_env() -> Self {
        Self {
            cloud_name: non_blank_var("CLOUDINARY_CLOUD_NAME"),
            api_key: non_blank_var("CLOUDINARY_API_KEY"),
            api_secret: non_blank_var("CLOUDINARY_API_SECRET"),
            api_base: non_blank_var("MEDIA_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            default_folder: non_blank_var("MEDIA_DEFAULT_FOLDER")
                .unwrap_or_else(|| DEFAULT_FOLDER.to_string()),
        }
    }

    /// Whether all three credentials are present.
    pub fn is_configured(&self) -> bool {
        self.cloud_name.is_some() && self.api_key.is_some() && self.api_secret.is_some()
    }

    /// Build the provider this configuration describes: a [`CloudinaryHost`]
    /// when fully configured, otherwise a [`DisabledHost`].
    pub fn build_host(&self) -> Arc<dyn MediaHost> {
        match (&self.cloud_name, &self.api_key, &self.api_secret) {
            (Some(cloud), Some(key), Some(secret)) => Arc::new(CloudinaryHost::new(
                self.api_base.clone(),
                cloud.clone(),
                key.clone(),
                secret.clone(),
            )),
            _ => Arc::new(DisabledHost),
        }
    }
}

fn non_blank_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
