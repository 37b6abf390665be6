//! Repository for the `profiles` table.

use gigdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{ProfileWithUser, UpdateProfile};

/// Column list for profile-with-user queries (joined against `users`).
const JOINED_COLUMNS: &str = "p.id, p.user_id, u.username, u.email, p.profile_type, \
    p.first_name, p.last_name, p.file, p.location, p.tel, p.description, \
    p.working_hours, p.created_at";

/// Provides profile reads and the owner-scoped update.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find a profile by the owning user's ID, joined with username/email.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<ProfileWithUser>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM profiles p
             JOIN users u ON u.id = p.user_id
             WHERE p.user_id = $1"
        );
        sqlx::query_as::<_, ProfileWithUser>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a user's profile role (`business` or `customer`).
    pub async fn role_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT profile_type FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all profiles with the given role, newest first.
    pub async fn list_by_type(
        pool: &PgPool,
        profile_type: &str,
    ) -> Result<Vec<ProfileWithUser>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM profiles p
             JOIN users u ON u.id = p.user_id
             WHERE p.profile_type = $1
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, ProfileWithUser>(&query)
            .bind(profile_type)
            .fetch_all(pool)
            .await
    }

    /// Count profiles with the given role.
    pub async fn count_by_type(pool: &PgPool, profile_type: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM profiles WHERE profile_type = $1")
            .bind(profile_type)
            .fetch_one(pool)
            .await
    }

    /// Update a profile by the owning user's ID, returning the updated row.
    ///
    /// An `email` field updates the user row in the same transaction.
    /// `profile_type` is never touched.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<ProfileWithUser>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let updated: Option<DbId> = sqlx::query_scalar(
            "UPDATE profiles SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                file = COALESCE($4, file),
                location = COALESCE($5, location),
                tel = COALESCE($6, tel),
                description = COALESCE($7, description),
                working_hours = COALESCE($8, working_hours)
             WHERE user_id = $1
             RETURNING id",
        )
        .bind(user_id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.file)
        .bind(&input.location)
        .bind(&input.tel)
        .bind(&input.description)
        .bind(&input.working_hours)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Ok(None);
        }

        if let Some(ref email) = input.email {
            sqlx::query("UPDATE users SET email = $2, updated_at = NOW() WHERE id = $1")
                .bind(user_id)
                .bind(email)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Self::find_by_user_id(pool, user_id).await
    }
}
