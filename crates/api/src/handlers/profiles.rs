//! Handlers for user profiles.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use gigdesk_core::error::CoreError;
use gigdesk_core::policy;
use gigdesk_core::roles::{ROLE_BUSINESS, ROLE_CUSTOMER};
use gigdesk_core::types::DbId;
use gigdesk_db::models::profile::UpdateProfile;
use gigdesk_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /profiles/{user_id}
pub async fn get_profile(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::find_by_user_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Profile",
                id: user_id,
            })
        })?;

    Ok(Json(DataResponse { data: profile }))
}

/// PATCH /profiles/{user_id}
///
/// Owner-scoped edit of display/contact fields. The role is immutable and
/// is simply absent from the update DTO.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::find_by_user_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Profile",
                id: user_id,
            })
        })?;

    if !policy::can_modify_profile(auth.user_id, auth.staff, profile.user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only edit your own profile".into(),
        )));
    }

    if let Some(ref email) = input.email {
        if !email.contains('@') {
            return Err(AppError::BadRequest("A valid email is required".to_string()));
        }
    }

    let profile = ProfileRepo::update(&state.pool, user_id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Profile",
                id: user_id,
            })
        })?;

    tracing::info!(user_id = auth.user_id, profile_user_id = user_id, "Profile updated");

    Ok(Json(DataResponse { data: profile }))
}

/// GET /profiles/business
pub async fn list_business_profiles(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let profiles = ProfileRepo::list_by_type(&state.pool, ROLE_BUSINESS).await?;
    Ok(Json(DataResponse { data: profiles }))
}

/// GET /profiles/customer
pub async fn list_customer_profiles(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let profiles = ProfileRepo::list_by_type(&state.pool, ROLE_CUSTOMER).await?;
    Ok(Json(DataResponse { data: profiles }))
}
