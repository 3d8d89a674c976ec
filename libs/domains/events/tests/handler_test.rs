//! Handler tests for the events domain
//!
//! Drive the router with in-memory event and package repositories.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::ErrorResponse;
use domain_events::*;
use domain_packages::{Category, InMemoryPackageRepository, Package, PackageRepository};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app_with(packages: InMemoryPackageRepository) -> Router {
    let service =
        EventService::new(InMemoryEventRepository::new()).with_packages(Arc::new(packages));
    events_router().with_state(Arc::new(service))
}

fn app() -> Router {
    app_with(InMemoryPackageRepository::new())
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn event_body(title: &str, category: Option<&str>) -> Value {
    json!({
        "title": title,
        "date": "2025-06-21",
        "time": "14:30",
        "location": "Rose Garden",
        "description": "Ceremony and reception",
        "category": category,
    })
}

async fn create(app: &Router, body: Value) -> Event {
    let response = app
        .clone()
        .oneshot(request("POST", "/event", Some(body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

async fn list(app: &Router) -> Vec<Event> {
    let response = app
        .clone()
        .oneshot(request("GET", "/event", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_event_returns_201_not_completed() {
    let app = app();
    let mut body = event_body("Summer Wedding", Some("Weddings"));
    body["status"] = json!("Completed");

    let event = create(&app, body).await;
    assert_eq!(event.status, EventStatus::NotCompleted);
    assert_eq!(event.category, Some(Category::Weddings));

    let other = create(&app, event_body("Office Party", None)).await;
    assert_ne!(event.id, other.id);
}

#[tokio::test]
async fn test_create_event_missing_fields_is_400_envelope() {
    for field in ["title", "date", "time", "location", "description"] {
        let mut body = event_body("Summer Wedding", None);
        body.as_object_mut().unwrap().remove(field);

        let response = app()
            .oneshot(request("POST", "/event", Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{field}");

        let error: ErrorResponse = json_body(response.into_body()).await;
        assert!(!error.success);
        assert_eq!(error.status_code, 400);
        assert!(error.message.contains(field), "{}", error.message);
    }
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/event")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_returns_insertion_order() {
    let app = app();
    for title in ["Gamma", "Alpha", "Beta"] {
        create(&app, event_body(title, None)).await;
    }

    let titles: Vec<_> = list(&app).await.into_iter().map(|e| e.title).collect();
    assert_eq!(titles, ["Gamma", "Alpha", "Beta"]);
}

#[tokio::test]
async fn test_wedding_event_lifecycle() {
    let packages = InMemoryPackageRepository::new();
    let package = packages
        .create(Package::new(
            "Gold".into(),
            Category::Weddings,
            "Flowers and decor".into(),
            Some(1500.0),
        ))
        .await
        .unwrap();
    let app = app_with(packages);

    let mut body = event_body("Summer Wedding", Some("Weddings"));
    body["packageId"] = json!(package.id.to_string());
    let event = create(&app, body).await;
    assert_eq!(event.package_id, Some(package.id));

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(request(
                "PATCH",
                &format!("/event/{}/complete", event.id),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let completed: Event = json_body(response.into_body()).await;
        assert_eq!(completed.status, EventStatus::Completed);
    }

    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/event/{}", event.id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(request("GET", &format!("/event/{}", event.id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error, ErrorResponse::new(StatusCode::NOT_FOUND, "Event not found"));
}

#[tokio::test]
async fn test_package_from_other_category_is_400() {
    let packages = InMemoryPackageRepository::new();
    let package = packages
        .create(Package::new("Balloons".into(), Category::Birthdays, String::new(), None))
        .await
        .unwrap();
    let app = app_with(packages);

    let mut body = event_body("Summer Wedding", Some("Weddings"));
    body["packageId"] = json!(package.id.to_string());
    let response = app
        .clone()
        .oneshot(request("POST", "/event", Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn test_category_change_clears_package() {
    let packages = InMemoryPackageRepository::new();
    let package = packages
        .create(Package::new("Gold".into(), Category::Weddings, String::new(), None))
        .await
        .unwrap();
    let app = app_with(packages);

    let mut body = event_body("Summer Wedding", Some("Weddings"));
    body["packageId"] = json!(package.id.to_string());
    let event = create(&app, body).await;

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/event/{}", event.id),
            Some(json!({ "category": "Engagement" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Event = json_body(response.into_body()).await;
    assert_eq!(updated.category, Some(Category::Engagement));
    assert_eq!(updated.package_id, None);
    assert_eq!(updated.title, "Summer Wedding");
}

#[tokio::test]
async fn test_update_unknown_event_leaves_store_unchanged() {
    let app = app();
    create(&app, event_body("Summer Wedding", None)).await;
    let before = list(&app).await.len();

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/event/{}", uuid::Uuid::now_v7()),
            Some(json!({ "title": "Ghost" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(list(&app).await.len(), before);
}

#[tokio::test]
async fn test_complete_and_delete_unknown_event_are_404() {
    let app = app();
    let id = uuid::Uuid::now_v7();

    for (method, uri) in [
        ("PATCH", format!("/event/{id}/complete")),
        ("DELETE", format!("/event/{id}")),
    ] {
        let response = app
            .clone()
            .oneshot(request(method, &uri, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
    }
}

#[tokio::test]
async fn test_malformed_id_is_400() {
    let response = app()
        .oneshot(request("GET", "/event/not-a-uuid", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.status_code, 400);
}

#[tokio::test]
async fn test_count_events() {
    let app = app();
    create(&app, event_body("One", None)).await;
    create(&app, event_body("Two", None)).await;

    let response = app
        .oneshot(request("GET", "/event/count", None))
        .await
        .unwrap();
    let body: CountResponse = json_body(response.into_body()).await;
    assert_eq!(body.count, 2);
}
