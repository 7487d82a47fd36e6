//! Common test utilities.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use todo_core::TodoStore;
use todo_server::{create_router, AppState};

/// Router backed by a store in a temporary directory.
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    // Held so the directory outlives the test.
    pub temp_dir: TempDir,
}

/// Create a test app with an empty store.
pub fn test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let store = TodoStore::open(temp_dir.path().join("data").join("todos.json")).unwrap();
    let state = Arc::new(AppState::new(store));

    TestApp {
        router: create_router(state.clone()),
        state,
        temp_dir,
    }
}

impl TestApp {
    /// Send a request and return the status with the raw body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    /// Send a request and decode the body as JSON.
    pub async fn send_json(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn patch_json(uri: &str, body: &str) -> Request<Body> {
    Request::patch(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
