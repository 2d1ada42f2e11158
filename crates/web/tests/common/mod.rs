#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use onboard_intake::IntakeClient;
use onboard_web::config::ServerConfig;
use onboard_web::router::build_app_router;
use onboard_web::state::AppState;

/// Build a test `ServerConfig` pointing at `intake_url`.
pub fn test_config(intake_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        intake_url: intake_url.to_string(),
        intake_timeout_secs: 5,
    }
}

/// Build the full application router, exactly as `main.rs` does.
pub fn build_test_app(intake_url: &str) -> Router {
    let config = test_config(intake_url);
    let intake = IntakeClient::new(
        config.intake_url.clone(),
        Duration::from_secs(config.intake_timeout_secs),
    )
    .expect("intake client");
    build_app_router(AppState { intake }, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body to `/`.
pub async fn post_form(app: Router, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A fully valid form post with a start date far in the future.
pub const VALID_FORM: &str = "fullName=Ada+Lovelace\
    &email=ada%40example.com\
    &companyName=Analytical+Engines+Ltd\
    &services=UI%2FUX\
    &services=Web+Dev\
    &budgetUsd=50000\
    &projectStartDate=2099-01-01\
    &acceptTerms=on";
