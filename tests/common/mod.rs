use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use std::env;
use tower::ServiceExt;

use venturehub_backend::{routes::api_router, AppState};

/// Set up a migrated test database.
/// Uses TEST_DATABASE_URL if set, otherwise an in-memory SQLite database
/// (pinned to a single pooled connection so every query sees it).
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let database_url =
        env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());

    let mut options = ConnectOptions::new(database_url);
    options.max_connections(1);
    let db = Database::connect(options).await?;

    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Build the full API router over a fresh test database
pub async fn test_app() -> Router {
    let db = setup_test_db().await.expect("Failed to set up test DB");
    api_router(AppState { db })
}

/// Fire one request at the app and decode the JSON response body.
/// `user_id` populates the x-user-id header the auth extractor reads.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    user_id: Option<i32>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = user_id {
        builder = builder.header("x-user-id", id.to_string());
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Sign up a user through the API and return their id
#[allow(dead_code)]
pub async fn signup(app: &Router, name: &str, role: &str) -> i32 {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            "role": role,
            "phone": "9876543210",
            "location": { "city": "Pune", "state": "Maharashtra", "country": "India" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "signup failed: {}", body);
    body["id"].as_i64().unwrap() as i32
}

/// Create a business idea owned by `entrepreneur_id` and return its id
#[allow(dead_code)]
pub async fn create_idea(app: &Router, entrepreneur_id: i32, title: &str) -> i32 {
    let (status, body) = send(
        app,
        "POST",
        "/api/ideas",
        Some(entrepreneur_id),
        Some(json!({
            "title": title,
            "category": "Technology",
            "description": "A marketplace for refurbished farm equipment",
            "fundingRequired": 500000.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "idea creation failed: {}", body);
    body["id"].as_i64().unwrap() as i32
}

/// Create a connection request from `investor_id` to `idea_id`
#[allow(dead_code)]
pub async fn request_connection(app: &Router, investor_id: i32, idea_id: i32) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/api/connections/request",
        Some(investor_id),
        Some(json!({ "businessIdeaId": idea_id, "message": "Interested in your idea" })),
    )
    .await
}

/// Fetch an idea's current status string
#[allow(dead_code)]
pub async fn idea_status(app: &Router, idea_id: i32) -> String {
    let (status, body) = send(app, "GET", &format!("/api/ideas/{}", idea_id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    body["status"].as_str().unwrap().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_db() {
        let db = setup_test_db().await;
        assert!(db.is_ok(), "Test database connection should succeed");
    }
}
