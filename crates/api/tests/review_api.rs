//! HTTP-level integration tests for the review registry endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, delete_auth, get, get_auth, patch_json_auth, post_json_auth,
    put_json_auth, staff_token_for, token_for,
};
use sqlx::PgPool;

/// Seed a business and a customer, returning (business_id, customer_id).
async fn seed_pair(pool: &PgPool) -> (i64, i64) {
    let business_id = create_test_user(pool, "seller", "business").await;
    let customer_id = create_test_user(pool, "buyer", "customer").await;
    (business_id, customer_id)
}

/// Create a review as the given customer, returning the review JSON.
async fn write_review(
    pool: &PgPool,
    customer_id: i64,
    business_id: i64,
    rating: i32,
) -> serde_json::Value {
    let token = token_for(customer_id, "customer");
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/reviews",
        serde_json::json!({
            "business_user": business_id,
            "rating": rating,
            "description": "Solid work"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_customer_creates_review(pool: PgPool) {
    let (business_id, customer_id) = seed_pair(&pool).await;

    let review = write_review(&pool, customer_id, business_id, 5).await;

    assert_eq!(review["reviewer_id"], customer_id);
    assert_eq!(review["business_user_id"], business_id);
    assert_eq!(review["rating"], 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_business_cannot_create_review(pool: PgPool) {
    let (business_id, _customer_id) = seed_pair(&pool).await;
    let token = token_for(business_id, "business");

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/reviews",
        serde_json::json!({ "business_user": business_id, "rating": 5 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_review_for_same_business_rejected(pool: PgPool) {
    let (business_id, customer_id) = seed_pair(&pool).await;
    write_review(&pool, customer_id, business_id, 4).await;

    let token = token_for(customer_id, "customer");
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/reviews",
        serde_json::json!({ "business_user": business_id, "rating": 1 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Exactly one review persisted.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_same_reviewer_can_review_another_business(pool: PgPool) {
    let (business_id, customer_id) = seed_pair(&pool).await;
    let other_business_id = create_test_user(&pool, "seller2", "business").await;

    write_review(&pool, customer_id, business_id, 4).await;
    write_review(&pool, customer_id, other_business_id, 5).await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_out_of_range_rating_rejected(pool: PgPool) {
    let (business_id, customer_id) = seed_pair(&pool).await;
    let token = token_for(customer_id, "customer");

    for rating in [0, 6, -1] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/reviews",
            serde_json::json!({ "business_user": business_id, "rating": rating }),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_review_of_unknown_business_rejected(pool: PgPool) {
    let customer_id = create_test_user(&pool, "buyer", "customer").await;
    let token = token_for(customer_id, "customer");

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/reviews",
        serde_json::json!({ "business_user": 999999, "rating": 3 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_accepts_only_rating_and_description(pool: PgPool) {
    let (business_id, customer_id) = seed_pair(&pool).await;
    let review = write_review(&pool, customer_id, business_id, 5).await;
    let review_id = review["id"].as_i64().unwrap();

    let token = token_for(customer_id, "customer");
    let app = common::build_test_app(pool);
    // extra_field must be silently dropped, not rejected.
    let response = patch_json_auth(
        app,
        &format!("/api/reviews/{review_id}"),
        serde_json::json!({ "rating": 4, "extra_field": "x" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["rating"], 4);
    assert_eq!(json["data"]["description"], "Solid work");
    assert!(json["data"].get("extra_field").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_cannot_reassign_review_target(pool: PgPool) {
    let (business_id, customer_id) = seed_pair(&pool).await;
    let other_business_id = create_test_user(&pool, "seller2", "business").await;
    let review = write_review(&pool, customer_id, business_id, 5).await;
    let review_id = review["id"].as_i64().unwrap();

    let token = token_for(customer_id, "customer");
    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/reviews/{review_id}"),
        serde_json::json!({ "business_user_id": other_business_id, "rating": 2 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    // The target is frozen; only the rating moved.
    assert_eq!(json["data"]["business_user_id"], business_id);
    assert_eq!(json["data"]["rating"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_put_edits_rating_and_description(pool: PgPool) {
    let (business_id, customer_id) = seed_pair(&pool).await;
    let review = write_review(&pool, customer_id, business_id, 5).await;
    let review_id = review["id"].as_i64().unwrap();

    let token = token_for(customer_id, "customer");
    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/reviews/{review_id}"),
        serde_json::json!({ "rating": 1, "description": "Changed my mind" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["rating"], 1);
    assert_eq!(json["data"]["description"], "Changed my mind");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_author_cannot_edit_review(pool: PgPool) {
    let (business_id, customer_id) = seed_pair(&pool).await;
    let review = write_review(&pool, customer_id, business_id, 5).await;
    let review_id = review["id"].as_i64().unwrap();

    let other_id = create_test_user(&pool, "buyer2", "customer").await;
    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/reviews/{review_id}"),
        serde_json::json!({ "rating": 1 }),
        &token_for(other_id, "customer"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_staff_can_edit_any_review(pool: PgPool) {
    let (business_id, customer_id) = seed_pair(&pool).await;
    let review = write_review(&pool, customer_id, business_id, 5).await;
    let review_id = review["id"].as_i64().unwrap();

    let moderator_id = create_test_user(&pool, "moderator", "customer").await;
    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/reviews/{review_id}"),
        serde_json::json!({ "rating": 3 }),
        &staff_token_for(moderator_id, "customer"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_author_deletes_review(pool: PgPool) {
    let (business_id, customer_id) = seed_pair(&pool).await;
    let review = write_review(&pool, customer_id, business_id, 5).await;
    let review_id = review["id"].as_i64().unwrap();

    let token = token_for(customer_id, "customer");
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/reviews/{review_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_filters_and_ordering(pool: PgPool) {
    let (business_id, customer_id) = seed_pair(&pool).await;
    let other_business_id = create_test_user(&pool, "seller2", "business").await;
    let other_customer_id = create_test_user(&pool, "buyer2", "customer").await;

    write_review(&pool, customer_id, business_id, 2).await;
    write_review(&pool, customer_id, other_business_id, 5).await;
    write_review(&pool, other_customer_id, business_id, 4).await;

    let token = token_for(customer_id, "customer");

    // Filter by business.
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        get_auth(
            app,
            &format!("/api/reviews?business_user_id={business_id}"),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // Filter by reviewer.
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        get_auth(
            app,
            &format!("/api/reviews?reviewer_id={customer_id}"),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // Order by rating descending.
    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/api/reviews?ordering=-rating", &token).await).await;
    let ratings: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["rating"].as_i64().unwrap())
        .collect();
    assert_eq!(ratings, vec![5, 4, 2]);
}
