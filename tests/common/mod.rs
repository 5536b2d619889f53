#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use serde_json::{Value, json};
use user_service::api::handlers::health_handler;
use user_service::api::routes::api_routes;
use user_service::application::services::UserService;
use user_service::infrastructure::persistence::InMemoryUserRepository;
use user_service::state::AppState;

/// Builds application state over a fresh in-memory store.
pub fn create_test_state() -> AppState {
    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service = Arc::new(UserService::new(repository));

    AppState::new(user_service)
}

/// Spins up a test server with the API and health routes mounted.
pub fn create_test_server() -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(create_test_state());

    TestServer::new(app).unwrap()
}

pub fn user_body(first: &str, last: &str, email: &str) -> Value {
    json!({
        "firstName": first,
        "lastName": last,
        "email": email
    })
}

/// Creates a user through the API and returns its assigned id.
pub async fn create_user(server: &TestServer, first: &str, last: &str, email: &str) -> i64 {
    let response = server
        .post("/api/users")
        .json(&user_body(first, last, email))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}
