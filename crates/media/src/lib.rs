//! Media hosting adapter.
//!
//! Uploads go through a [`MediaHost`] provider. [`MediaUploader`] sits in
//! front of it, enforcing the extension allow-list, batching, and the
//! best-effort delete policy.
//!
//! - [`cloudinary`] -- signed REST client for a Cloudinary-compatible host.
//! - [`host`] -- the provider trait and the no-credentials fallback.
//! - [`uploader`] -- the facade handlers talk to.

pub mod cloudinary;
pub mod config;
pub mod error;
pub mod host;
pub mod uploader;

pub use cloudinary::CloudinaryHost;
pub use config::MediaConfig;
pub use error::MediaError;
pub use host::{DisabledHost, MediaDescriptor, MediaHost, UploadRequest};
pub use uploader::{BatchUpload, FailedUpload, MediaUploader};
