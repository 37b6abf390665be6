//! HTTP-level integration tests for profile endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, get, get_auth, patch_json_auth, staff_token_for, token_for,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_profile_requires_auth(pool: PgPool) {
    let user_id = create_test_user(&pool, "someone", "customer").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/profiles/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = token_for(user_id, "customer");
    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/profiles/{user_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["user_id"], user_id);
    assert_eq!(json["data"]["username"], "someone");
    assert_eq!(json["data"]["profile_type"], "customer");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_profile_returns_404(pool: PgPool) {
    let user_id = create_test_user(&pool, "someone", "customer").await;
    let token = token_for(user_id, "customer");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/profiles/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_owner_updates_profile_fields(pool: PgPool) {
    let user_id = create_test_user(&pool, "owner", "business").await;
    let token = token_for(user_id, "business");

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/profiles/{user_id}"),
        serde_json::json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "location": "London",
            "email": "ada@example.com"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["first_name"], "Ada");
    assert_eq!(json["data"]["last_name"], "Lovelace");
    assert_eq!(json["data"]["location"], "London");
    // Email lives on the user row but is updated through the profile.
    assert_eq!(json["data"]["email"], "ada@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_role_is_not_editable(pool: PgPool) {
    let user_id = create_test_user(&pool, "owner", "customer").await;
    let token = token_for(user_id, "customer");

    let app = common::build_test_app(pool);
    // A submitted profile_type (or its alias) is dropped, not applied.
    let response = patch_json_auth(
        app,
        &format!("/api/profiles/{user_id}"),
        serde_json::json!({ "first_name": "Eve", "profile_type": "business", "type": "business" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["profile_type"], "customer");
    assert_eq!(json["data"]["first_name"], "Eve");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cannot_update_someone_elses_profile(pool: PgPool) {
    let owner_id = create_test_user(&pool, "owner", "customer").await;
    let intruder_id = create_test_user(&pool, "intruder", "customer").await;

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/profiles/{owner_id}"),
        serde_json::json!({ "first_name": "Mallory" }),
        &token_for(intruder_id, "customer"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_staff_can_update_any_profile(pool: PgPool) {
    let owner_id = create_test_user(&pool, "owner", "customer").await;
    let admin_id = create_test_user(&pool, "admin", "business").await;

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/profiles/{owner_id}"),
        serde_json::json!({ "description": "Curated by staff" }),
        &staff_token_for(admin_id, "business"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_profile_lists_filtered_by_role(pool: PgPool) {
    let business_id = create_test_user(&pool, "biz", "business").await;
    create_test_user(&pool, "cust1", "customer").await;
    create_test_user(&pool, "cust2", "customer").await;

    let token = token_for(business_id, "business");

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/profiles/business", &token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["username"], "biz");

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/api/profiles/customer", &token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}
