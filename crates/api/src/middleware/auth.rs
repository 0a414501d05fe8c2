//! Bearer-token guard for the admin routes.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use folio_core::error::CoreError;

use crate::auth::jwt::{validate_token, JwtConfig, ADMIN_SUBJECT};
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated admin, bound into request extensions by [`require_admin`].
///
/// Use it as an extractor in handlers behind the guard:
///
/// ```ignore
/// async fn my_handler(admin: AdminIdentity) -> AppResult<Json<()>> {
///     tracing::info!(token_id = %admin.token_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    /// The token subject (always `admin`).
    pub subject: String,
    /// The token's `jti`.
    pub token_id: String,
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}

/// Check the `Authorization: Bearer <token>` header.
pub fn authorize(headers: &HeaderMap, config: &JwtConfig) -> Result<AdminIdentity, AppError> {
    let auth_header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

    let claims =
        validate_token(token.trim(), config).map_err(|_| unauthorized("Invalid or expired token"))?;

    if claims.sub != ADMIN_SUBJECT {
        return Err(unauthorized("Invalid or expired token"));
    }

    Ok(AdminIdentity {
        subject: claims.sub,
        token_id: claims.jti,
    })
}

/// Middleware: reject the request unless it carries a valid admin token,
/// otherwise bind [`AdminIdentity`] and continue.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let identity = authorize(request.headers(), &state.config.jwt)?;
    tracing::debug!(token_id = %identity.token_id, "Admin request authorized");
    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AdminIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminIdentity>()
            .cloned()
            .ok_or_else(|| unauthorized("Authentication required"))
    }
}
