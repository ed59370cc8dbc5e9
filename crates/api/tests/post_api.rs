//! HTTP-level integration tests for single-document Post endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use docket_store::DocumentStore;

#[tokio::test]
async fn create_post_returns_201() {
    let (app, _store) = common::build_test_app();

    let response = post_json(
        app,
        "/api/posts",
        serde_json::json!({"date": "2025-01-01T00:00:00Z", "number": 5, "string": "Test"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["string"], "Test");
    assert_eq!(json["number"], 5);
    assert!(json["id"].is_number());
}

#[tokio::test]
async fn create_post_without_string_returns_400() {
    let (app, store) = common::build_test_app();

    let response = post_json(app, "/api/posts", serde_json::json!({"number": 5})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["details"][0]["field"], "string");
    assert!(store.list_posts().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_post_by_id() {
    let (app, _store) = common::build_test_app();

    let created = body_json(
        post_json(
            app.clone(),
            "/api/posts",
            serde_json::json!({"string": "Get Me"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = get(app, &format!("/api/posts/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["string"], "Get Me");
}

#[tokio::test]
async fn get_nonexistent_post_returns_404() {
    let (app, _store) = common::build_test_app();

    let response = get(app, "/api/posts/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn update_post_applies_partial_changes() {
    let (app, _store) = common::build_test_app();

    let created = body_json(
        post_json(
            app.clone(),
            "/api/posts",
            serde_json::json!({"string": "Original", "number": 1}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        app,
        &format!("/api/posts/{id}"),
        serde_json::json!({"string": "Updated"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["string"], "Updated");
    assert_eq!(json["number"], 1);
}

#[tokio::test]
async fn update_post_with_empty_string_returns_400() {
    let (app, _store) = common::build_test_app();

    let created = body_json(
        post_json(
            app.clone(),
            "/api/posts",
            serde_json::json!({"string": "keep"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        app,
        &format!("/api/posts/{id}"),
        serde_json::json!({"string": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_post_returns_204_then_404() {
    let (app, _store) = common::build_test_app();

    let created = body_json(
        post_json(
            app.clone(),
            "/api/posts",
            serde_json::json!({"string": "Delete Me"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("/api/posts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/posts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_post_with_populate_resolves_relations() {
    let (app, _store) = common::build_test_app();

    let author = body_json(
        post_json(
            app.clone(),
            "/api/authors",
            serde_json::json!({"name": "Ann"}),
        )
        .await,
    )
    .await;
    let author_id = author["id"].as_i64().unwrap();

    let post = body_json(
        post_json(
            app.clone(),
            "/api/posts",
            serde_json::json!({"string": "parent", "author_id": author_id}),
        )
        .await,
    )
    .await;
    let post_id = post["id"].as_i64().unwrap();

    post_json(
        app.clone(),
        "/api/comments",
        serde_json::json!({"comment": "nice", "post_id": post_id, "author_id": author_id}),
    )
    .await;

    let response = get(app, &format!("/api/posts/{post_id}?populate=true")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["string"], "parent");
    assert_eq!(json["author"]["name"], "Ann");
    assert_eq!(json["comments"][0]["comment"], "nice");
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _store) = common::build_test_app();

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store_healthy"], true);
}
