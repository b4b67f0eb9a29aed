//! HTTP-level integration tests for `/chapters`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_chapter(pool: &PgPool, project_id: &str, number: i32, title: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/chapters",
        json!({
            "projectId": project_id,
            "chapterNumber": number,
            "title": title,
            "content": "Snow fell."
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_chapter_derives_word_count(pool: PgPool) {
    let project_id = common::create_project(&pool, "Winter").await;
    let chapter = create_chapter(&pool, &project_id, 1, "Cold open").await;

    assert_eq!(chapter["wordCount"], 10);
    assert_eq!(chapter["chapterNumber"], 1);
    assert!(chapter["episodeId"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn chapter_number_must_be_positive(pool: PgPool) {
    let project_id = common::create_project(&pool, "Counting").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/chapters",
        json!({"projectId": project_id, "chapterNumber": 0, "title": "Zero"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_by_project_is_ordered_and_number_lookup_filters(pool: PgPool) {
    let project_id = common::create_project(&pool, "Order").await;
    create_chapter(&pool, &project_id, 2, "Second").await;
    create_chapter(&pool, &project_id, 1, "First").await;
    create_chapter(&pool, &project_id, 2, "Second, again").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/projects/{project_id}/chapters")).await).await;
    let numbers: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["chapterNumber"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2, 2]);

    let app = common::build_test_app(pool);
    let json = body_json(
        get(app, &format!("/api/v1/projects/{project_id}/chapters/number/2")).await,
    )
    .await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_recomputes_word_count(pool: PgPool) {
    let project_id = common::create_project(&pool, "Rewrite").await;
    let chapter = create_chapter(&pool, &project_id, 1, "Draft").await;
    let id = chapter["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/chapters/{id}"),
        json!({"chapterNumber": 1, "title": "Draft 2", "content": "Sun."}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["wordCount"], 4);
    assert_eq!(json["title"], "Draft 2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_chapter_then_get_returns_404(pool: PgPool) {
    let project_id = common::create_project(&pool, "Cut").await;
    let chapter = create_chapter(&pool, &project_id, 1, "Cut me").await;
    let id = chapter["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        delete(app, &format!("/api/v1/chapters/{id}")).await.status(),
        StatusCode::NO_CONTENT
    );

    let app = common::build_test_app(pool);
    assert_eq!(
        get(app, &format!("/api/v1/chapters/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}
