//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does
//! not meet the requirement. Because [`AuthUser`] runs first, a missing
//! identity is always 401 and an insufficient one is always 403, in that
//! order. Staff principals pass every role gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use gigdesk_core::error::CoreError;
use gigdesk_core::roles::{ROLE_BUSINESS, ROLE_CUSTOMER};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `business` role (or staff). Rejects with 403 otherwise.
///
/// ```ignore
/// async fn business_only(RequireBusiness(user): RequireBusiness) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireBusiness(pub AuthUser);

impl FromRequestParts<AppState> for RequireBusiness {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_BUSINESS && !user.staff {
            return Err(AppError::Core(CoreError::Forbidden(
                "Business role required".into(),
            )));
        }
        Ok(RequireBusiness(user))
    }
}

/// Requires the `customer` role (or staff). Rejects with 403 otherwise.
pub struct RequireCustomer(pub AuthUser);

impl FromRequestParts<AppState> for RequireCustomer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_CUSTOMER && !user.staff {
            return Err(AppError::Core(CoreError::Forbidden(
                "Customer role required".into(),
            )));
        }
        Ok(RequireCustomer(user))
    }
}
