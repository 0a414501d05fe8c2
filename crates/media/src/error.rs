/// Errors from the media hosting layer.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The filename's extension is not on the allow-list.
    #[error("File type not allowed: {filename}")]
    UnsupportedMediaType { filename: String },

    /// The provider rejected the upload or could not be reached.
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    /// The provider could not delete an asset.
    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}
