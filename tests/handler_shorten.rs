mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use linksnip::api::handlers::shorten_handler;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_shorten_success(pool: SqlitePool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let id = json["id"].as_str().unwrap();
    assert_eq!(id.len(), 6);
    assert_eq!(json["long_url"], "https://example.com");
    assert_eq!(
        json["short_url"].as_str().unwrap(),
        format!("{}/{}", common::TEST_BASE_URL, id)
    );
}

#[sqlx::test]
async fn test_shorten_with_alias(pool: SqlitePool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://example.com",
            "alias": "mycode"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], "mycode");
    assert_eq!(
        json["short_url"].as_str().unwrap(),
        format!("{}/mycode", common::TEST_BASE_URL)
    );
}

#[sqlx::test]
async fn test_shorten_repeat_url_returns_same_id(pool: SqlitePool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response1 = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://dedup.com" }))
        .await;
    let json1 = response1.json::<serde_json::Value>();
    let id1 = json1["id"].as_str().unwrap();

    let response2 = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://dedup.com" }))
        .await;
    let json2 = response2.json::<serde_json::Value>();
    let id2 = json2["id"].as_str().unwrap();

    assert_eq!(id1, id2);
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_taken_alias_falls_back_to_generated_id(pool: SqlitePool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_link(&pool, "taken1", "https://first.com").await;

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://second.com",
            "alias": "taken1"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let id = json["id"].as_str().unwrap();
    assert_ne!(id, "taken1");
    assert_eq!(id.len(), 6);
    assert_eq!(json["long_url"], "https://second.com");
    assert_eq!(common::count_links(&pool).await, 2);
}

#[sqlx::test]
async fn test_shorten_alias_for_known_url_returns_existing_mapping(pool: SqlitePool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_link(&pool, "orig", "https://known.com").await;

    // The alias is free, but the target is already mapped; the stored
    // mapping wins over the requested alias.
    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://known.com",
            "alias": "other"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], "orig");
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_blank_alias_treated_as_absent(pool: SqlitePool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://example.com",
            "alias": "   "
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let id = json["id"].as_str().unwrap();
    assert_eq!(id.len(), 6);
    assert_ne!(id, "   ");
}

#[sqlx::test]
async fn test_shorten_empty_url_rejected(pool: SqlitePool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_shorten_missing_url_rejected(pool: SqlitePool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.post("/api/shorten").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}
