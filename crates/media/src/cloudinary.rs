//! Signed REST client for a Cloudinary-compatible media host.
//!
//! Both endpoints take `multipart/form-data` and authenticate each call with
//! a SHA-256 signature over the sorted request parameters followed by the
//! API secret.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::error::MediaError;
use crate::host::{MediaDescriptor, MediaHost, UploadRequest};

/// Delivery transformation applied to every upload.
pub const UPLOAD_TRANSFORMATION: &str = "q_auto:good,f_auto";

/// HTTP request timeout for a single provider call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for one cloud on a Cloudinary-compatible host.
pub struct CloudinaryHost {
    client: reqwest::Client,
    api_base: String,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

/// Body of a successful upload response. Only the fields we keep.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
    resource_type: String,
    format: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    #[serde(default)]
    bytes: u64,
}

impl From<UploadResponse> for MediaDescriptor {
    fn from(r: UploadResponse) -> Self {
        Self {
            url: r.secure_url,
            provider_id: r.public_id,
            kind: r.resource_type,
            format: r.format,
            width: r.width,
            height: r.height,
            size_bytes: r.bytes,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorMessage,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    message: String,
}

/// Sign `params` the way the provider verifies them: sort by key, join as
/// `k=v&k=v`, append the secret, and hex-encode the SHA-256 digest.
///
/// Empty values are skipped.
pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, &str)> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!("{:x}", Sha256::digest(format!("{to_sign}{api_secret}")))
}

impl CloudinaryHost {
    /// Create a client for `cloud_name` at `api_base`
    /// (e.g. `https://api.cloudinary.com/v1_1`).
    pub fn new(api_base: String, cloud_name: String, api_key: String, api_secret: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self::with_client(client, api_base, cloud_name, api_key, api_secret)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        api_base: String,
        cloud_name: String,
        api_key: String,
        api_secret: String,
    ) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            cloud_name,
            api_key,
            api_secret,
        }
    }

    fn endpoint(&self, resource_type: &str, action: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.api_base, self.cloud_name, resource_type, action
        )
    }

    /// Pull the provider's error message out of a non-2xx response.
    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error.message,
            Err(_) => format!("provider returned HTTP {status}"),
        }
    }
}

#[async_trait]
impl MediaHost for CloudinaryHost {
    async fn upload(&self, request: UploadRequest) -> Result<MediaDescriptor, MediaError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = sign(
            &[
                ("folder", request.folder.as_str()),
                ("timestamp", timestamp.as_str()),
                ("transformation", UPLOAD_TRANSFORMATION),
            ],
            &self.api_secret,
        );

        let file = reqwest::multipart::Part::bytes(request.bytes).file_name(request.filename);
        let form = reqwest::multipart::Form::new()
            .part("file", file)
            .text("folder", request.folder)
            .text("timestamp", timestamp)
            .text("transformation", UPLOAD_TRANSFORMATION)
            .text("api_key", self.api_key.clone())
            .text("signature_algorithm", "sha256")
            .text("signature", signature);

        let response = self
            .client
            .post(self.endpoint("auto", "upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::UploadFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MediaError::UploadFailed(Self::error_message(response).await));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| MediaError::UploadFailed(format!("unreadable provider response: {e}")))?;
        Ok(body.into())
    }

    async fn destroy(&self, provider_id: &str, resource_type: &str) -> Result<(), MediaError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = sign(
            &[("public_id", provider_id), ("timestamp", timestamp.as_str())],
            &self.api_secret,
        );

        let form = reqwest::multipart::Form::new()
            .text("public_id", provider_id.to_string())
            .text("timestamp", timestamp)
            .text("api_key", self.api_key.clone())
            .text("signature_algorithm", "sha256")
            .text("signature", signature);

        let response = self
            .client
            .post(self.endpoint(resource_type, "destroy"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::DeleteFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MediaError::DeleteFailed(Self::error_message(response).await));
        }

        let body: DestroyResponse = response
            .json()
            .await
            .map_err(|e| MediaError::DeleteFailed(format!("unreadable provider response: {e}")))?;
        if body.result == "ok" {
            Ok(())
        } else {
            Err(MediaError::DeleteFailed(format!(
                "provider reported '{}' for {provider_id}",
                body.result
            )))
        }
    }
}
