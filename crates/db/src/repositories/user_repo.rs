//! Repository for the `users` table.

use gigdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::Profile;
use crate::models::user::{CreateUser, User};

/// Column list for users queries.
const COLUMNS: &str = "id, username, email, password_hash, is_staff, created_at, updated_at";

/// Column list for profiles queries.
const PROFILE_COLUMNS: &str = "id, user_id, profile_type, first_name, last_name, file, \
    location, tel, description, working_hours, created_at";

/// Provides account-row operations, including the registration transaction.
pub struct UserRepo;

impl UserRepo {
    /// Create a bare user row, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Create a user and its profile in one transaction.
    ///
    /// Registration is all-or-nothing: a failed profile insert leaves no
    /// orphan user row behind.
    pub async fn create_with_profile(
        pool: &PgPool,
        input: &CreateUser,
        profile_type: &str,
    ) -> Result<(User, Profile), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user_query = format!(
            "INSERT INTO users (username, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&user_query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(&mut *tx)
            .await?;

        let profile_query = format!(
            "INSERT INTO profiles (user_id, profile_type)
             VALUES ($1, $2)
             RETURNING {PROFILE_COLUMNS}"
        );
        let profile = sqlx::query_as::<_, Profile>(&profile_query)
            .bind(user.id)
            .bind(profile_type)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((user, profile))
    }

    /// Find a user by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
