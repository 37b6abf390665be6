//! Handlers for the `/auth` resource (registration, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gigdesk_core::error::CoreError;
use gigdesk_core::roles::validate_role;
use gigdesk_core::types::DbId;
use gigdesk_db::models::user::CreateUser;
use gigdesk_db::repositories::{ProfileRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/registration`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub repeated_password: String,
    /// `business` or `customer`. Fixed at registration.
    #[serde(alias = "type")]
    pub profile_type: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response returned by registration and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/registration
///
/// Create an account and its profile atomically, then log the caller in.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    if input.username.trim().is_empty() {
        return Err(AppError::BadRequest("Username is required".to_string()));
    }
    if !input.email.contains('@') {
        return Err(AppError::BadRequest("A valid email is required".to_string()));
    }
    validate_role(&input.profile_type).map_err(AppError::BadRequest)?;
    validate_password_strength(&input.password).map_err(AppError::BadRequest)?;
    if input.password != input.repeated_password {
        return Err(AppError::BadRequest("Passwords do not match".to_string()));
    }

    // Friendly duplicate checks; the unique constraints remain the backstop.
    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("Username is already taken".to_string()));
    }
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest(
            "Email is already registered".to_string(),
        ));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        username: input.username,
        email: input.email,
        password_hash,
    };
    let (user, profile) =
        UserRepo::create_with_profile(&state.pool, &create, &input.profile_type).await?;

    let access_token =
        generate_access_token(user.id, &profile.profile_type, user.is_staff, &state.config.jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(
        user_id = user.id,
        role = %profile.profile_type,
        "User registered"
    );

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            access_token,
            expires_in: state.config.jwt.access_token_expiry_mins * 60,
            user: UserInfo {
                id: user.id,
                username: user.username,
                email: user.email,
                role: profile.profile_type,
            },
        }),
    ))
}

/// POST /api/auth/login
///
/// Authenticate with username + password. Returns an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    // Same message for unknown user and wrong password.
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let role = ProfileRepo::role_for_user(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("User {} has no profile", user.id)))?;

    let access_token = generate_access_token(user.id, &role, user.is_staff, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo {
            id: user.id,
            username: user.username,
            email: user.email,
            role,
        },
    }))
}
