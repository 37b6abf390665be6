//! Repository for the `reviews` table.

use gigdesk_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use gigdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, Review, ReviewListParams, UpdateReview};

/// Column list for reviews queries.
const COLUMNS: &str =
    "id, business_user_id, reviewer_id, rating, description, created_at, updated_at";

/// Provides CRUD operations and aggregates for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Create a new review, returning the created row.
    ///
    /// Relies on `uq_reviews_reviewer_business` to reject a concurrent
    /// duplicate; callers run an existence check first for the friendly
    /// error path.
    pub async fn create(
        pool: &PgPool,
        reviewer_id: DbId,
        input: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (business_user_id, reviewer_id, rating, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.business_user)
            .bind(reviewer_id)
            .bind(input.rating)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Whether this reviewer has already reviewed this business.
    pub async fn exists(
        pool: &PgPool,
        reviewer_id: DbId,
        business_user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM reviews WHERE reviewer_id = $1 AND business_user_id = $2
             )",
        )
        .bind(reviewer_id)
        .bind(business_user_id)
        .fetch_one(pool)
        .await
    }

    /// Find a review by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List reviews, optionally filtered by business and/or reviewer.
    pub async fn list(
        pool: &PgPool,
        params: &ReviewListParams,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(params.offset);

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if params.business_user_id.is_some() {
            conditions.push(format!("business_user_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.reviewer_id.is_some() {
            conditions.push(format!("reviewer_id = ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let order_clause = match params.ordering.as_deref() {
            Some("rating") => "rating ASC",
            Some("-rating") => "rating DESC",
            Some("updated_at") => "updated_at ASC",
            _ => "updated_at DESC",
        };

        let query = format!(
            "SELECT {COLUMNS} FROM reviews {where_clause} \
             ORDER BY {order_clause} \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Review>(&query);
        if let Some(business_user_id) = params.business_user_id {
            q = q.bind(business_user_id);
        }
        if let Some(reviewer_id) = params.reviewer_id {
            q = q.bind(reviewer_id);
        }
        q = q.bind(limit).bind(offset);
        q.fetch_all(pool).await
    }

    /// Update a review's rating/description, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReview,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "UPDATE reviews SET
                rating = COALESCE($2, rating),
                description = COALESCE($3, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(input.rating)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a review by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all reviews.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(pool)
            .await
    }

    /// Mean rating rounded to one decimal, 0.0 when no reviews exist.
    pub async fn average_rating(pool: &PgPool) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COALESCE(ROUND(AVG(rating)::numeric, 1), 0.0)::float8 FROM reviews",
        )
        .fetch_one(pool)
        .await
    }
}
