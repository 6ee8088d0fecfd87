//! Handler tests for the event categories router, backed by the in-memory repository.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_event_categories::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    handlers::router(EventCategoryService::new(InMemoryEventCategoryRepository::new()))
}

fn post(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_duplicate_category_returns_409() {
    let app = app();
    let body = json!({ "categoryName": "Turísticos", "categoryDescription": "Passeios pela cidade" });

    let response = app.clone().oneshot(post(body.clone())).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = json_body(response.into_body()).await;
    assert!(created["categoryId"].is_string());
    assert_eq!(created["categoryName"], "Turísticos");

    let response = app.oneshot(post(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error: Value = json_body(response.into_body()).await;
    assert!(error["message"].as_str().unwrap().contains("já está cadastrada"));
    assert_eq!(error["error"], "CONFLICT");
}

#[tokio::test]
async fn test_duplicate_check_ignores_case() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post(json!({ "categoryName": "Shows" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(post(json!({ "categoryName": "SHOWS" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_with_short_name_returns_400() {
    let response = app()
        .oneshot(post(json!({ "categoryName": "ab" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("Nome da categoria"));
}

#[tokio::test]
async fn test_empty_list_returns_404() {
    let response = app().oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["message"], "Nenhuma categoria de eventos encontrada");
}

#[tokio::test]
async fn test_list_is_ordered_by_name() {
    let app = app();
    for name in ["Teatro", "Esportes", "Música"] {
        let response = app
            .clone()
            .oneshot(post(json!({ "categoryName": name })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let categories: Vec<EventCategory> = json_body(response.into_body()).await;
    let names: Vec<_> = categories.iter().map(|c| c.category_name.as_str()).collect();
    assert_eq!(names, vec!["Esportes", "Música", "Teatro"]);
}

#[tokio::test]
async fn test_get_with_malformed_id_returns_400() {
    let response = app().oneshot(get("/not-a-uuid")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["message"], "id deve estar no formato de uuid v4.");
}

#[tokio::test]
async fn test_get_missing_returns_404() {
    let uri = format!("/{}", uuid::Uuid::new_v4());
    let response = app().oneshot(get(&uri)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: Value = json_body(response.into_body()).await;
    assert!(error["message"].as_str().unwrap().contains("não encontrada"));
}

#[tokio::test]
async fn test_update_then_delete_twice() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post(json!({ "categoryName": "Gastronomia" })))
        .await
        .unwrap();
    let created: EventCategory = json_body(response.into_body()).await;
    let uri = format!("/{}", created.category_id);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(&uri)
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "categoryDescription": "Feiras e festivais" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: EventCategory = json_body(response.into_body()).await;
    assert_eq!(updated.category_name, "Gastronomia");
    assert_eq!(updated.category_description.as_deref(), Some("Feiras e festivais"));

    let delete = || {
        Request::builder()
            .method("DELETE")
            .uri(&uri)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
