//! Common test utilities and fixtures
#![allow(dead_code)]

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use roster_server::{create_router, AppState};
use roster_storage::SqliteUserStore;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router over a throwaway file-backed database
///
/// The `TempDir` must outlive the router.
pub struct TestApp {
    pub router: Router,
    pub store: SqliteUserStore,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
        let store = SqliteUserStore::connect(&db_url).await?;

        let router = create_router(AppState::new(Arc::new(store.clone())));

        Ok(Self {
            router,
            store,
            _temp_dir: temp_dir,
        })
    }

    /// Send a request through a clone of the router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> Response<Body> {
        self.send(json_request("POST", uri, body)).await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> Response<Body> {
        self.send(json_request("PUT", uri, body)).await
    }
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Read the whole body as bytes
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Read the whole body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Test user fixtures
pub mod fixtures {
    use serde_json::{json, Value};

    pub const TEST_NAME: &str = "Pradeep Raj";
    pub const TEST_EMAIL: &str = "pradeep@example.com";
    pub const TEST_PASSWORD: &str = "12345";

    pub fn test_user() -> Value {
        json!({
            "name": TEST_NAME,
            "email": TEST_EMAIL,
            "password": TEST_PASSWORD,
        })
    }
}
