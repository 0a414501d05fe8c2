use folio_media::MediaConfig;

use crate::auth::jwt::JwtConfig;
use crate::auth::password::hash_password;

/// Default cap on request bodies for the upload routes (50 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// Built once in `main` and shared read-only as `Arc<ServerConfig>`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Body size limit for the upload routes.
    pub max_upload_bytes: usize,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// The admin credential.
    pub auth: AuthConfig,
    /// Media provider credentials.
    pub media: MediaConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MAX_UPLOAD_BYTES`     | `52428800`                 |
    ///
    /// See [`JwtConfig::from_env`], [`AuthConfig::from_env`] and
    /// [`MediaConfig::from_env`] for the rest.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            jwt: JwtConfig::from_env(),
            auth: AuthConfig::from_env(),
            media: MediaConfig::from_env(),
        }
    }
}

/// The single admin credential, held only as an Argon2id PHC hash.
#[derive(Clone)]
pub struct AuthConfig {
    pub admin_password_hash: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("admin_password_hash", &"[REDACTED]")
            .finish()
    }
}

impl AuthConfig {
    /// Load the admin credential.
    ///
    /// | Env Var               | Notes                                      |
    /// |-----------------------|--------------------------------------------|
    /// | `ADMIN_PASSWORD_HASH` | PHC string; preferred                      |
    /// | `ADMIN_PASSWORD`      | plaintext; hashed here and then discarded  |
    ///
    /// # Panics
    ///
    /// Panics if neither variable is set, or the hash cannot be computed.
    pub fn from_env() -> Self {
        if let Ok(hash) = std::env::var("ADMIN_PASSWORD_HASH") {
            if !hash.trim().is_empty() {
                return Self {
                    admin_password_hash: hash.trim().to_string(),
                };
            }
        }

        let password = std::env::var("ADMIN_PASSWORD")
            .expect("ADMIN_PASSWORD_HASH or ADMIN_PASSWORD must be set in the environment");
        assert!(!password.is_empty(), "ADMIN_PASSWORD must not be empty");

        Self::from_password(&password).expect("Failed to hash ADMIN_PASSWORD")
    }

    /// Build from a plaintext password, keeping only its hash.
    pub fn from_password(password: &str) -> Result<Self, argon2::password_hash::Error> {
        Ok(Self {
            admin_password_hash: hash_password(password)?,
        })
    }
}
