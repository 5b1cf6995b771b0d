/// API integration tests
/// Tests complete HTTP request/response cycles with a real database
mod common;

use axum::http::{header, StatusCode};
use common::{body_bytes, body_json, fixtures, json_request, TestApp};
use roster_core::UserStore;
use serde_json::json;

async fn create_user(app: &TestApp) -> String {
    let response = app.post_json("/api/users", &fixtures::test_user()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_user() {
    let app = TestApp::new().await.unwrap();

    let response = app.post_json("/api/users", &fixtures::test_user()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["name"], fixtures::TEST_NAME);
    assert_eq!(body["email"], fixtures::TEST_EMAIL);
    assert_eq!(body["password"], fixtures::TEST_PASSWORD);
    assert!(body["id"].is_string());
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_user_missing_fields() {
    let app = TestApp::new().await.unwrap();

    let response = app.post_json("/api/users", &json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["fields"]["name"], "name is required");
    assert_eq!(body["fields"]["email"], "email is required");
    assert_eq!(body["fields"]["password"], "password is required");
}

#[tokio::test]
async fn test_create_user_empty_field() {
    let app = TestApp::new().await.unwrap();

    let response = app
        .post_json(
            "/api/users",
            &json!({ "name": "", "email": "pradeep@example.com", "password": "12345" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    let fields = body["fields"].as_object().unwrap();
    assert_eq!(fields.len(), 1);
    assert!(fields.contains_key("name"));
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let app = TestApp::new().await.unwrap();
    create_user(&app).await;

    let response = app.post_json("/api/users", &fixtures::test_user()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"], "Email already in use");

    let matching = app.store.find_by_email(fixtures::TEST_EMAIL).await.unwrap();
    assert!(matching.is_some());
    assert_eq!(app.store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_user_malformed_json() {
    let app = TestApp::new().await.unwrap();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = app.send(request).await;

    assert!(response.status().is_client_error());
    assert_eq!(app.store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_users() {
    let app = TestApp::new().await.unwrap();

    let response = app.get("/api/users").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));

    create_user(&app).await;
    for n in 0..2 {
        let user = json!({
            "name": format!("User {n}"),
            "email": format!("user{n}@example.com"),
            "password": "secret",
        });
        let response = app.post_json("/api/users", &user).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.get("/api/users").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0]["name"], fixtures::TEST_NAME);
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = TestApp::new().await.unwrap();
    let id = create_user(&app).await;

    let response = app.get(&format!("/api/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["name"], fixtures::TEST_NAME);
}

#[tokio::test]
async fn test_unknown_and_malformed_ids_are_not_found() {
    let app = TestApp::new().await.unwrap();
    create_user(&app).await;

    for uri in [
        "/api/users/5f0c9a5e-2d7b-4c1e-9a61-0d1b2c3d4e5f",
        "/api/users/not-an-id",
        "/api/users/507f1f77bcf86cd799439011",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri}");
        assert!(body_bytes(response).await.is_empty());

        let response = app.put_json(uri, &json!({ "name": "X" })).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "PUT {uri}");
        assert!(body_bytes(response).await.is_empty());

        let response = app.delete(uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "DELETE {uri}");
        assert!(body_bytes(response).await.is_empty());
    }

    assert_eq!(app.store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_user_by_id() {
    let app = TestApp::new().await.unwrap();
    let id = create_user(&app).await;

    let response = app
        .put_json(&format!("/api/users/{id}"), &json!({ "name": "Pradeep" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Pradeep");
    assert_eq!(body["email"], fixtures::TEST_EMAIL);
    assert_eq!(body["password"], fixtures::TEST_PASSWORD);
}

#[tokio::test]
async fn test_update_user_null_fields_rejected() {
    let app = TestApp::new().await.unwrap();
    let id = create_user(&app).await;
    let uri = format!("/api/users/{id}");

    let response = app
        .put_json(&uri, &json!({ "name": null, "password": null }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["fields"]["name"], "name is required");
    assert_eq!(body["fields"]["password"], "password is required");
    assert!(body["fields"].get("email").is_none());

    let body = body_json(app.get(&uri).await).await;
    assert_eq!(body["name"], fixtures::TEST_NAME);
    assert_eq!(body["password"], fixtures::TEST_PASSWORD);
}

#[tokio::test]
async fn test_update_user_validation_and_conflict() {
    let app = TestApp::new().await.unwrap();
    create_user(&app).await;

    let other = json!({ "name": "Alice", "email": "alice@example.com", "password": "secret" });
    let response = app.post_json("/api/users", &other).await;
    let other_id = body_json(response).await["id"].as_str().unwrap().to_string();
    let uri = format!("/api/users/{other_id}");

    let response = app.put_json(&uri, &json!({ "email": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["fields"]["email"].is_string());

    let response = app
        .put_json(&uri, &json!({ "email": fixtures::TEST_EMAIL }))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(app.get(&uri).await).await;
    assert_eq!(body["email"], "alice@example.com");
}

#[tokio::test]
async fn test_delete_user_by_id() {
    let app = TestApp::new().await.unwrap();
    let id = create_user(&app).await;
    let uri = format!("/api/users/{id}");

    let response = app.delete(&uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], fixtures::TEST_NAME);

    let response = app.get(&uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// POST, list, PUT, DELETE, then GET on the same user
#[tokio::test]
async fn test_full_lifecycle() {
    let app = TestApp::new().await.unwrap();

    let response = app.post_json("/api/users", &fixtures::test_user()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["name"], "Pradeep Raj");
    let uri = format!("/api/users/{}", created["id"].as_str().unwrap());

    let response = app.get("/api/users").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = app.put_json(&uri, &json!({ "name": "Pradeep" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Pradeep");

    let response = app.delete(&uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Pradeep");

    let response = app.get(&uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unmatched_route_fallback() {
    let app = TestApp::new().await.unwrap();

    for response in [
        app.get("/nowhere").await,
        app.get("/api/unknown").await,
        app.send(json_request("PATCH", "/api/users", &json!({}))).await,
        app.send(json_request("POST", "/api/health", &json!({}))).await,
    ] {
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body_bytes(response).await, b"Route not found");
    }
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await.unwrap();

    create_user(&app).await;

    let response = app.get("/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["users"], 1);
}
