#![allow(dead_code)]

use std::sync::{Arc, LazyLock, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use folio_api::auth::jwt::{generate_token, JwtConfig, ADMIN_SUBJECT};
use folio_api::config::{AuthConfig, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_media::{MediaConfig, MediaDescriptor, MediaError, MediaHost, MediaUploader, UploadRequest};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Admin password accepted by the test app.
pub const TEST_PASSWORD: &str = "test-admin-password";

/// Hashing is slow; do it once per test binary.
static TEST_AUTH: LazyLock<AuthConfig> =
    LazyLock::new(|| AuthConfig::from_password(TEST_PASSWORD).expect("hashing should succeed"));

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 5 * 1024 * 1024,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_hours: 24,
        },
        auth: TEST_AUTH.clone(),
        media: MediaConfig {
            default_folder: "portfolio".to_string(),
            ..Default::default()
        },
    }
}

// ---------------------------------------------------------------------------
// Fake media host
// ---------------------------------------------------------------------------

/// In-memory `MediaHost` that records what it was asked to do.
#[derive(Default)]
pub struct FakeHost {
    pub uploads: Mutex<Vec<(String, String)>>,
    pub destroyed: Mutex<Vec<(String, String)>>,
    /// `destroy` records the call, then reports a provider error.
    pub destroy_fails: bool,
    /// `upload` returns a URL containing NUL, which a JSONB column rejects.
    pub unstorable_urls: bool,
}

impl FakeHost {
    pub fn failing_destroy() -> Self {
        Self {
            destroy_fails: true,
            ..Default::default()
        }
    }

    pub fn unstorable_urls() -> Self {
        Self {
            unstorable_urls: true,
            ..Default::default()
        }
    }

    pub fn destroyed_ids(&self) -> Vec<String> {
        self.destroyed
            .lock()
            .unwrap()
            .iter()
            .map(|(id, _)| id.clone())
            .collect()
    }
}

#[async_trait]
impl MediaHost for FakeHost {
    async fn upload(&self, request: UploadRequest) -> Result<MediaDescriptor, MediaError> {
        let (stem, ext) = request
            .filename
            .rsplit_once('.')
            .unwrap_or((request.filename.as_str(), ""));
        let kind = if matches!(ext, "mp4" | "webm") { "video" } else { "image" };
        let descriptor = MediaDescriptor {
            url: if self.unstorable_urls {
                format!("https://media.test/{}/\u{0}{}", request.folder, request.filename)
            } else {
                format!("https://media.test/{}/{}", request.folder, request.filename)
            },
            provider_id: format!("{}/{stem}", request.folder),
            kind: kind.to_string(),
            format: Some(ext.to_string()),
            width: Some(640),
            height: Some(480),
            size_bytes: request.bytes.len() as u64,
        };
        self.uploads
            .lock()
            .unwrap()
            .push((request.folder.clone(), request.filename.clone()));
        Ok(descriptor)
    }

    async fn destroy(&self, provider_id: &str, resource_type: &str) -> Result<(), MediaError> {
        self.destroyed
            .lock()
            .unwrap()
            .push((provider_id.to_string(), resource_type.to_string()));
        if self.destroy_fails {
            return Err(MediaError::DeleteFailed("provider unavailable".into()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the full application router against `pool` with a [`FakeHost`].
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_host(pool, Arc::new(FakeHost::default()))
}

/// Build the full application router with the given media host.
pub fn build_test_app_with_host(pool: PgPool, host: Arc<dyn MediaHost>) -> Router {
    let config = test_config();
    let media = MediaUploader::new(host, config.media.default_folder.clone());
    build_app_router(AppState {
        pool,
        config: Arc::new(config),
        media: Arc::new(media),
    })
}

/// A valid admin token for [`test_config`], minted without going through login.
pub fn admin_token() -> String {
    generate_token(ADMIN_SUBJECT, &test_config().jwt).expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, json_request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, json_request(Method::GET, uri, Some(token), None)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, Some(token), Some(body))).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, Some(token), Some(body))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, json_request(Method::DELETE, uri, Some(token), None)).await
}

/// Send a request with a raw `Authorization` header value.
pub async fn get_with_authorization(app: Router, uri: &str, header: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("authorization", header)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Multipart
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "----folio-test-boundary";

/// One part of a multipart body.
pub enum Part<'a> {
    File {
        name: &'a str,
        filename: &'a str,
        bytes: &'a [u8],
    },
    Text {
        name: &'a str,
        value: &'a str,
    },
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::File {
                name,
                filename,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    parts: &[Part<'_>],
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a project through the API and return its JSON.
pub async fn create_project(app: Router, token: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json_auth(app, "/api/admin/projects", body, token).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
