//! Repository for the `orders` table.

use gigdesk_core::orders::STATUS_IN_PROGRESS;
use gigdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::order::Order;

/// Column list for orders queries.
const COLUMNS: &str = "id, customer_user_id, business_user_id, title, revisions, \
    delivery_time_in_days, price, features, offer_type, status, created_at, updated_at";

/// Source fields copied out of a tier (and its parent offer) at purchase
/// time.
#[derive(sqlx::FromRow)]
struct TierSnapshot {
    business_user_id: DbId,
    title: String,
    revisions: i32,
    delivery_time_in_days: i32,
    price: f64,
    features: Vec<String>,
    offer_type: String,
}

/// Provides order creation (tier snapshot), participant-scoped reads, and
/// status transitions.
pub struct OrderRepo;

impl OrderRepo {
    /// Create an order from a tier, freezing the tier's fields into the new
    /// row. Returns `Ok(None)` when the tier does not exist.
    ///
    /// The read and the insert share a transaction so the snapshot cannot
    /// interleave with a concurrent tier edit.
    pub async fn create_from_detail(
        pool: &PgPool,
        customer_user_id: DbId,
        offer_detail_id: DbId,
    ) -> Result<Option<Order>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let source = sqlx::query_as::<_, TierSnapshot>(
            "SELECT o.user_id AS business_user_id, o.title, d.revisions,
                    d.delivery_time_in_days, d.price, d.features, d.offer_type
             FROM offer_details d
             JOIN offers o ON o.id = d.offer_id
             WHERE d.id = $1",
        )
        .bind(offer_detail_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(source) = source else {
            return Ok(None);
        };

        let query = format!(
            "INSERT INTO orders
                (customer_user_id, business_user_id, title, revisions,
                 delivery_time_in_days, price, features, offer_type, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(customer_user_id)
            .bind(source.business_user_id)
            .bind(&source.title)
            .bind(source.revisions)
            .bind(source.delivery_time_in_days)
            .bind(source.price)
            .bind(&source.features)
            .bind(&source.offer_type)
            .bind(STATUS_IN_PROGRESS)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(order))
    }

    /// Find an order by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List orders where the given user is buyer or seller, newest first.
    pub async fn list_for_participant(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM orders
             WHERE customer_user_id = $1 OR business_user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update an order's status, returning the updated row. Status is the
    /// only mutable column.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an order by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count a seller's orders in the given status.
    pub async fn count_for_business(
        pool: &PgPool,
        business_user_id: DbId,
        status: &str,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM orders WHERE business_user_id = $1 AND status = $2",
        )
        .bind(business_user_id)
        .bind(status)
        .fetch_one(pool)
        .await
    }
}
