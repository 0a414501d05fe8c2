//! Media item shape stored on projects, and the upload extension allow-list.

use serde::{Deserialize, Serialize};

/// Extensions accepted for upload (compared case-insensitively).
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "mp4", "webm"];

/// Folder used when an upload does not name one.
pub const DEFAULT_FOLDER: &str = "portfolio";

/// One entry of a project's ordered media list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Provider resource type, e.g. `"image"` or `"video"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    /// Provider-assigned identifier; absent for externally hosted media.
    #[serde(default)]
    pub provider_id: Option<String>,
}

/// Lowercased extension of `filename`, if it has one.
pub fn extension_of(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Whether `filename` carries an allowed extension.
pub fn is_allowed_file(filename: &str) -> bool {
    extension_of(filename).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}
