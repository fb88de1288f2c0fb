//! End-to-end smoke tests for the full shelfd stack.
//!
//! Each test spins up the complete application (JSON file store in a
//! temporary directory, real service, real axum router, the shipped static
//! pages) and exercises the HTTP layer via `tower::ServiceExt::oneshot` — no
//! TCP port is bound.

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shelf_adapter_http_axum::pages::StaticPages;
use shelf_adapter_http_axum::router;
use shelf_adapter_http_axum::state::AppState;
use shelf_adapter_storage_json_file::JsonFileItemStore;
use shelf_app::services::item_service::ItemService;
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    dir: TempDir,
    router: router::App,
}

impl TestApp {
    fn data_file(&self) -> PathBuf {
        self.dir.path().join("items.json")
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = self.send(builder.body(body).unwrap()).await;
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

fn static_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../static")
}

/// Build a fully-wired router backed by a JSON file in a fresh directory.
fn app() -> TestApp {
    let dir = tempfile::tempdir().expect("temporary directory should be created");
    let store = JsonFileItemStore::new(dir.path().join("items.json"));
    let state = AppState::new(ItemService::new(store), StaticPages::new(static_dir()));

    TestApp {
        dir,
        router: router::build(state),
    }
}

async fn create(app: &TestApp, payload: Value) -> Value {
    let (status, body) = app.call(Method::POST, "/api/items", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"].clone()
}

// ---------------------------------------------------------------------------
// Items lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_then_fetch_item_by_generated_id() {
    let app = app();

    let created = create(&app, json!({"name": "Tee", "price": 19.99, "size": "m"})).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app.call(Method::GET, &format!("/api/items/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "data": created}));
}

#[tokio::test]
async fn should_persist_items_to_the_data_file() {
    let app = app();

    let created = create(&app, json!({"name": "Cap", "price": 5, "size": "s"})).await;

    let raw = std::fs::read_to_string(app.data_file()).unwrap();
    let stored: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, json!([created]));
}

#[tokio::test]
async fn should_store_and_echo_integer_price_unchanged() {
    let app = app();

    let created = create(&app, json!({"name": "Mug", "price": 10, "size": "m"})).await;
    assert_eq!(created["price"].to_string(), "10");

    let raw = std::fs::read_to_string(app.data_file()).unwrap();
    assert!(raw.contains(r#""price": 10,"#), "{raw}");
}

#[tokio::test]
async fn should_list_sequential_creates_in_order() {
    let app = app();

    let first = create(&app, json!({"name": "A", "price": 1, "size": "s"})).await;
    let second = create(&app, json!({"name": "B", "price": 2, "size": "l"})).await;

    let (status, body) = app.call(Method::GET, "/api/items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([first, second]));
}

#[tokio::test]
async fn should_keep_both_items_when_posts_race() {
    let app = app();

    let (a, b) = tokio::join!(
        app.call(
            Method::POST,
            "/api/items",
            Some(json!({"name": "A", "price": 1, "size": "s"}))
        ),
        app.call(
            Method::POST,
            "/api/items",
            Some(json!({"name": "B", "price": 2, "size": "m"}))
        ),
    );
    assert_eq!(a.0, StatusCode::CREATED);
    assert_eq!(b.0, StatusCode::CREATED);

    let (_, body) = app.call(Method::GET, "/api/items", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn should_update_price_and_keep_other_fields() {
    let app = app();
    let created = create(&app, json!({"name": "Hoodie", "price": 40, "size": "l"})).await;
    let uri = format!("/api/items/{}", created["id"].as_str().unwrap());

    let (status, body) = app
        .call(Method::PUT, &uri, Some(json!({"price": 35.5})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Hoodie");
    assert_eq!(body["data"]["size"], "l");
    assert_eq!(body["data"]["price"], 35.5);

    let (_, body) = app.call(Method::GET, &uri, None).await;
    assert_eq!(body["data"]["price"], 35.5);
}

#[tokio::test]
async fn should_delete_item_then_report_not_found() {
    let app = app();
    let created = create(&app, json!({"name": "Sock", "price": 2, "size": "s"})).await;
    let uri = format!("/api/items/{}", created["id"].as_str().unwrap());

    let (status, body) = app.call(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], created);

    let (status, body) = app.call(Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, _) = app.call(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Validation & errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_post_without_name() {
    let app = app();

    let (status, body) = app
        .call(
            Method::POST,
            "/api/items",
            Some(json!({"price": 1, "size": "m"})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Name"));
}

#[tokio::test]
async fn should_reject_post_with_size_xl() {
    let app = app();

    let (status, body) = app
        .call(
            Method::POST,
            "/api/items",
            Some(json!({"name": "Tee", "price": 1, "size": "xl"})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Size is required and must be one of s,m,l");
}

#[tokio::test]
async fn should_return_404_for_unknown_item() {
    let app = app();

    let (status, body) = app
        .call(Method::GET, "/api/items/doesnotexist", None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "error": "Item not found"}));
}

#[tokio::test]
async fn should_recover_from_corrupted_data_file() {
    let app = app();
    std::fs::write(app.data_file(), "not json at all").unwrap();

    let (status, body) = app.call(Method::GET, "/api/items", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "data": []}));
    assert_eq!(std::fs::read_to_string(app.data_file()).unwrap(), "[]");
}

#[tokio::test]
async fn should_answer_405_for_unsupported_method() {
    let app = app();

    let (status, body) = app.call(Method::PATCH, "/api/items", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");
}

// ---------------------------------------------------------------------------
// Static pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_shipped_index_page() {
    let app = app();

    let response = app
        .send(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let expected = std::fs::read(static_dir().join("index.html")).unwrap();
    assert_eq!(bytes.to_vec(), expected);
}

#[tokio::test]
async fn should_serve_shipped_not_found_page() {
    let app = app();

    let response = app
        .send(
            Request::builder()
                .uri("/missing.html")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let expected = std::fs::read(static_dir().join("404.html")).unwrap();
    assert_eq!(bytes.to_vec(), expected);
}
