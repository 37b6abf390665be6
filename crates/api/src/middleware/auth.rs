//! JWT-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use gigdesk_core::error::CoreError;
use gigdesk_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication. A missing or invalid token rejects with 401 before the
/// handler body runs, so role/ownership checks (403) always happen second.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's profile role (`"business"` or `"customer"`).
    pub role: String,
    /// Whether the user is an elevated (staff) principal.
    pub staff: bool,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
            staff: claims.staff,
        })
    }
}

/// Like [`AuthUser`] but tolerates an absent `Authorization` header.
///
/// Used by endpoints whose auth requirement is a configuration decision
/// (the tier read gate): the handler decides what anonymity means. A header
/// that is present but invalid still rejects with 401.
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if parts.headers.get("authorization").is_none() {
            return Ok(MaybeAuthUser(None));
        }
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(MaybeAuthUser(Some(user)))
    }
}
