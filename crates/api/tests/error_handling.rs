//! Tests for the error response contract: status codes, JSON shape, and the
//! storage-level backstop behind the review uniqueness rule.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get, get_auth, token_for};
use gigdesk_db::models::review::CreateReview;
use gigdesk_db::repositories::ReviewRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_not_found_body_shape(pool: PgPool) {
    let user_id = create_test_user(&pool, "reader", "customer").await;
    let token = token_for(user_id, "customer");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/offers/424242", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].as_str().unwrap().contains("424242"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unauthorized_body_shape(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/orders").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

/// The unique constraint settles a duplicate-review race: even when the
/// application-level existence check is bypassed entirely, the second
/// insert fails at the storage layer.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_review_blocked_by_unique_constraint(pool: PgPool) {
    let business_id = create_test_user(&pool, "seller", "business").await;
    let customer_id = create_test_user(&pool, "buyer", "customer").await;

    let input = CreateReview {
        business_user: business_id,
        rating: 5,
        description: String::new(),
    };

    ReviewRepo::create(&pool, customer_id, &input)
        .await
        .expect("first review should insert");

    let err = ReviewRepo::create(&pool, customer_id, &input)
        .await
        .expect_err("second review must violate the unique constraint");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_reviews_reviewer_business"));
        }
        other => panic!("expected a database error, got: {other:?}"),
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1, "at most one review may persist");
}
