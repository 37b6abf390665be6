//! Repository for the `offers` and `offer_details` tables.

use gigdesk_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use gigdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::offer::{
    CreateOffer, Offer, OfferDetail, OfferListParams, OfferWithStats, UpdateOffer,
};

/// Column list for offers queries.
const OFFER_COLUMNS: &str = "id, user_id, title, image, description, created_at, updated_at";

/// Column list for offer_details queries.
const DETAIL_COLUMNS: &str =
    "id, offer_id, title, revisions, delivery_time_in_days, price, features, offer_type";

/// Select list for offer rows annotated with tier aggregates and owner
/// display fields. Requires the `o`/`u`/`p`/`d` aliases set up by
/// [`STATS_FROM`].
const STATS_COLUMNS: &str = "o.id, o.user_id, o.title, o.image, o.description, \
    o.created_at, o.updated_at, \
    COALESCE(MIN(d.price), 0)::float8 AS min_price, \
    COALESCE(MIN(d.delivery_time_in_days), 0) AS min_delivery_time, \
    u.username, p.first_name, p.last_name";

const STATS_FROM: &str = "FROM offers o \
    JOIN users u ON u.id = o.user_id \
    JOIN profiles p ON p.user_id = o.user_id \
    LEFT JOIN offer_details d ON d.offer_id = o.id";

const STATS_GROUP_BY: &str = "GROUP BY o.id, u.username, p.first_name, p.last_name";

/// Provides CRUD operations for offers and their pricing tiers.
pub struct OfferRepo;

impl OfferRepo {
    /// Create an offer together with its tiers in one transaction.
    ///
    /// All-or-nothing: if any tier insert fails, the offer row is rolled
    /// back with it. Tier payloads are validated by the caller first.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateOffer,
    ) -> Result<(Offer, Vec<OfferDetail>), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let offer_query = format!(
            "INSERT INTO offers (user_id, title, image, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {OFFER_COLUMNS}"
        );
        let offer = sqlx::query_as::<_, Offer>(&offer_query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.image)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;

        let detail_query = format!(
            "INSERT INTO offer_details
                (offer_id, title, revisions, delivery_time_in_days, price, features, offer_type)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {DETAIL_COLUMNS}"
        );
        let mut details = Vec::with_capacity(input.details.len());
        for tier in &input.details {
            let detail = sqlx::query_as::<_, OfferDetail>(&detail_query)
                .bind(offer.id)
                .bind(&tier.title)
                .bind(tier.revisions)
                .bind(tier.delivery_time_in_days)
                .bind(tier.price)
                .bind(&tier.features)
                .bind(tier.offer_type.as_deref())
                .fetch_one(&mut *tx)
                .await?;
            details.push(detail);
        }

        tx.commit().await?;
        Ok((offer, details))
    }

    /// Find a bare offer row by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Offer>, sqlx::Error> {
        let query = format!("SELECT {OFFER_COLUMNS} FROM offers WHERE id = $1");
        sqlx::query_as::<_, Offer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an offer with tier aggregates and owner display fields.
    pub async fn find_with_stats(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<OfferWithStats>, sqlx::Error> {
        let query = format!(
            "SELECT {STATS_COLUMNS} {STATS_FROM} WHERE o.id = $1 {STATS_GROUP_BY}"
        );
        sqlx::query_as::<_, OfferWithStats>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List offers with tier aggregates, applying the optional filters.
    ///
    /// Tier-bound filters keep an offer when at least one of its tiers
    /// matches, mirroring relation-spanning filtering.
    pub async fn list(
        pool: &PgPool,
        params: &OfferListParams,
    ) -> Result<Vec<OfferWithStats>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(params.offset);

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if params.creator_id.is_some() {
            conditions.push(format!("o.user_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.search.is_some() {
            conditions.push(format!(
                "(o.title ILIKE ${bind_idx} OR o.description ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }
        if params.min_price.is_some() {
            conditions.push(format!(
                "EXISTS (SELECT 1 FROM offer_details f \
                 WHERE f.offer_id = o.id AND f.price >= ${bind_idx})"
            ));
            bind_idx += 1;
        }
        if params.delivery_time.is_some() {
            conditions.push(format!(
                "EXISTS (SELECT 1 FROM offer_details f \
                 WHERE f.offer_id = o.id AND f.delivery_time_in_days = ${bind_idx})"
            ));
            bind_idx += 1;
        }
        if params.max_delivery_time.is_some() {
            conditions.push(format!(
                "EXISTS (SELECT 1 FROM offer_details f \
                 WHERE f.offer_id = o.id AND f.delivery_time_in_days <= ${bind_idx})"
            ));
            bind_idx += 1;
        }
        if params.min_delivery_time.is_some() {
            conditions.push(format!(
                "EXISTS (SELECT 1 FROM offer_details f \
                 WHERE f.offer_id = o.id AND f.delivery_time_in_days >= ${bind_idx})"
            ));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        // Ordering is a whitelist; anything unrecognised falls back to
        // newest-updated first.
        let order_clause = match params.ordering.as_deref() {
            Some("min_price") => "min_price ASC",
            Some("-min_price") => "min_price DESC",
            Some("updated_at") => "o.updated_at ASC",
            _ => "o.updated_at DESC",
        };

        let query = format!(
            "SELECT {STATS_COLUMNS} {STATS_FROM} {where_clause} {STATS_GROUP_BY} \
             ORDER BY {order_clause} \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, OfferWithStats>(&query);

        // Bind dynamic parameters in order.
        if let Some(creator_id) = params.creator_id {
            q = q.bind(creator_id);
        }
        if let Some(ref search) = params.search {
            q = q.bind(format!("%{search}%"));
        }
        if let Some(min_price) = params.min_price {
            q = q.bind(min_price);
        }
        if let Some(delivery_time) = params.delivery_time {
            q = q.bind(delivery_time);
        }
        if let Some(max_delivery_time) = params.max_delivery_time {
            q = q.bind(max_delivery_time);
        }
        if let Some(min_delivery_time) = params.min_delivery_time {
            q = q.bind(min_delivery_time);
        }

        q = q.bind(limit).bind(offset);
        q.fetch_all(pool).await
    }

    /// List the tiers of one offer, basic → premium.
    pub async fn details_for_offer(
        pool: &PgPool,
        offer_id: DbId,
    ) -> Result<Vec<OfferDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM offer_details
             WHERE offer_id = $1
             ORDER BY price ASC, id ASC"
        );
        sqlx::query_as::<_, OfferDetail>(&query)
            .bind(offer_id)
            .fetch_all(pool)
            .await
    }

    /// List the tiers of several offers at once (for list responses).
    pub async fn details_for_offers(
        pool: &PgPool,
        offer_ids: &[DbId],
    ) -> Result<Vec<OfferDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM offer_details
             WHERE offer_id = ANY($1)
             ORDER BY offer_id ASC, price ASC, id ASC"
        );
        sqlx::query_as::<_, OfferDetail>(&query)
            .bind(offer_ids)
            .fetch_all(pool)
            .await
    }

    /// Find a single tier by its ID.
    pub async fn find_detail(
        pool: &PgPool,
        detail_id: DbId,
    ) -> Result<Option<OfferDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} FROM offer_details WHERE id = $1");
        sqlx::query_as::<_, OfferDetail>(&query)
            .bind(detail_id)
            .fetch_optional(pool)
            .await
    }

    /// Update an offer and merge any supplied tier payloads, in one
    /// transaction. Tier payloads must target existing labels; the caller
    /// validates that against the current tier set before calling.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOffer,
    ) -> Result<Option<(Offer, Vec<OfferDetail>)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let offer_query = format!(
            "UPDATE offers SET
                title = COALESCE($2, title),
                image = COALESCE($3, image),
                description = COALESCE($4, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {OFFER_COLUMNS}"
        );
        let offer = sqlx::query_as::<_, Offer>(&offer_query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.image)
            .bind(&input.description)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(offer) = offer else {
            return Ok(None);
        };

        if let Some(ref tiers) = input.details {
            for tier in tiers {
                sqlx::query(
                    "UPDATE offer_details SET
                        title = COALESCE($3, title),
                        revisions = COALESCE($4, revisions),
                        delivery_time_in_days = COALESCE($5, delivery_time_in_days),
                        price = COALESCE($6, price),
                        features = COALESCE($7, features)
                     WHERE offer_id = $1 AND offer_type = $2",
                )
                .bind(id)
                .bind(tier.offer_type.as_deref())
                .bind(&tier.title)
                .bind(tier.revisions)
                .bind(tier.delivery_time_in_days)
                .bind(tier.price)
                .bind(&tier.features)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        let details = Self::details_for_offer(pool, id).await?;
        Ok(Some((offer, details)))
    }

    /// Delete an offer by ID (tiers cascade). Returns `true` if a row was
    /// deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM offers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all offers.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM offers")
            .fetch_one(pool)
            .await
    }
}
