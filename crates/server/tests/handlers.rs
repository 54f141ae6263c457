//! Router-level tests over the in-memory gateway; no database or socket.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use service::repository::mock::InMemoryRepository;
use service::repository::Repository;
use tower::ServiceExt;

use models::book;
use server::{routes, state::ServerState};

fn app() -> (Arc<InMemoryRepository<book::Model>>, Router) {
    let repo = Arc::new(InMemoryRepository::new());
    let router = routes::build_router(ServerState::new(repo.clone()));
    (repo, router)
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(res: axum::response::Response) -> Value {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_returns_location_of_new_resource() {
    let (_, app) = app();
    let res = app.oneshot(request(Method::POST, "/books", Some(json!({"name": "Dune"})))).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.headers()[header::LOCATION], "/books/1");
    assert_eq!(json_body(res).await, json!({"id": 1, "name": "Dune"}));
}

#[tokio::test]
async fn update_changes_only_the_name() {
    let (repo, app) = app();
    app.clone().oneshot(request(Method::POST, "/books", Some(json!({"name": "Dune"})))).await.unwrap();

    let res = app
        .clone()
        .oneshot(request(Method::PUT, "/books/1", Some(json!({"id": 1, "name": "Dune Messiah"}))))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(repo.len(), 1);
    let stored = repo.get_by_id(1).await.unwrap();
    assert_eq!(stored, Some(book::Model { id: 1, name: "Dune Messiah".into() }));

    let res = app.oneshot(request(Method::GET, "/books/1", None)).await.unwrap();
    assert_eq!(json_body(res).await, json!({"id": 1, "name": "Dune Messiah"}));
}

#[tokio::test]
async fn mismatched_update_leaves_state_untouched() {
    let (_, app) = app();
    app.clone().oneshot(request(Method::POST, "/books", Some(json!({"name": "X"})))).await.unwrap();

    let res = app
        .clone()
        .oneshot(request(Method::PUT, "/books/5", Some(json!({"id": 7, "name": "X"}))))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = json_body(res).await;
    assert_eq!(body["error"], "Invalid book data.");

    let res = app.oneshot(request(Method::GET, "/books", None)).await.unwrap();
    assert_eq!(json_body(res).await, json!([{"id": 1, "name": "X"}]));
}

#[tokio::test]
async fn store_failure_is_internal_server_error() {
    let (repo, app) = app();
    repo.set_failing(true);

    for (method, uri, body) in [
        (Method::GET, "/books", None),
        (Method::GET, "/books/1", None),
        (Method::POST, "/books", Some(json!({"name": "Dune"}))),
        (Method::PUT, "/books/1", Some(json!({"id": 1, "name": "Dune"}))),
        (Method::DELETE, "/books/1", None),
    ] {
        let res = app.clone().oneshot(request(method, uri, body)).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        let body = json_body(res).await;
        assert!(body.get("message").is_none());
    }
}

#[tokio::test]
async fn validation_failures_do_not_reach_failing_store() {
    let (repo, app) = app();
    repo.set_failing(true);

    let res = app.clone().oneshot(request(Method::POST, "/books", Some(json!({"name": ""})))).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app
        .oneshot(request(Method::PUT, "/books/0", Some(json!({"id": 0, "name": "X"}))))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let (_, app) = app();
    let res = app.oneshot(request(Method::GET, "/books/dune", None)).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
