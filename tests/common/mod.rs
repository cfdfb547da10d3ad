#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use sarthi_site::config::Config;
use sarthi_site::state::AppState;
use sarthi_site::store::{DocumentStore, MemoryDocumentStore};
use sarthi_site::web;

pub const ADMIN_KEY: &str = "test-admin-key";

/// Config pointing the completion client at `api_url`, admin key set.
pub fn test_config(api_url: &str) -> Config {
    Config {
        environment: "test".to_string(),
        database_url: None,
        database_max_connections: 5,
        openai_api_key: "test-openai-key".to_string(),
        openai_model: "gpt-4o-mini".to_string(),
        openai_api_url: api_url.to_string(),
        openai_temperature: 0.7,
        completion_max_tokens: 4000,
        admin_api_key: Some(ADMIN_KEY.to_string()),
        port: 0,
    }
}

/// Router over a fresh in-memory store. The store is returned for assertions.
pub fn build_test_app(api_url: &str) -> (Router, Arc<MemoryDocumentStore>) {
    let store = Arc::new(MemoryDocumentStore::new());
    let state = AppState::new(
        test_config(api_url),
        Arc::clone(&store) as Arc<dyn DocumentStore>,
    );
    (web::router(state), store)
}

/// Router whose completion endpoint is never reached.
pub fn build_offline_app() -> (Router, Arc<MemoryDocumentStore>) {
    build_test_app("http://127.0.0.1:9/v1/chat/completions")
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: &Value,
    admin_key: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(key) = admin_key {
        builder = builder.header("authorization", format!("Bearer {key}"));
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body, None).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
