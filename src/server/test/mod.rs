//! Router-level tests driving the complete application through `tower::ServiceExt`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::server::{
    router,
    state::AppState,
    util::password::{PasswordHasher, Sha256PasswordHasher},
};


const PASSWORD: &str = "correct-password";

/// Builds the application over the test database with an in-memory session store.
fn app(db: &DatabaseConnection) -> Router {
    router::app(AppState::new(db.clone(), Arc::new(Sha256PasswordHasher)))
        .layer(SessionManagerLayer::new(MemoryStore::default()).with_secure(false))
}

/// Inserts a manager that can log in with `PASSWORD`.
async fn create_login_manager(
    db: &DatabaseConnection,
    email: &str,
    all_permissions: bool,
) -> entity::mwd_manager::Model {
    let mut builder = factory::manager::ManagerFactory::new(db)
        .email(email)
        .password_hash(Sha256PasswordHasher.hash(PASSWORD));
    if all_permissions {
        builder = builder.all_permissions();
    }
    builder.build().await.unwrap()
}

/// Sends a request and returns the status with the parsed JSON body.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, cookie, body)
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Logs in and returns the session cookie.
async fn login(app: &Router, email: &str) -> String {
    let (status, cookie, _) = send(
        app,
        post_json(
            "/api/auth/login",
            None,
            serde_json::json!({ "email": email, "password": PASSWORD }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    cookie.unwrap()
}

async fn test_db() -> DatabaseConnection {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    test.db.unwrap()
}
