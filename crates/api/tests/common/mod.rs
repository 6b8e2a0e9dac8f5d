#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use pcbuild_core::config::EngineConfig;
use serde_json::Value;
use tower::ServiceExt;

use pcbuild_api::config::ServerConfig;
use pcbuild_api::router::build_app_router;
use pcbuild_api::state::AppState;

pub const TEST_ORIGIN: &str = "http://localhost:5173";

/// A `ServerConfig` with the development CORS origin and default engine.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        engine: EngineConfig::default(),
    }
}

/// The production router over [`test_config`].
pub fn build_test_app() -> Router {
    build_test_app_with(test_config())
}

/// The production router over a caller-supplied configuration.
pub fn build_test_app_with(config: ServerConfig) -> Router {
    build_app_router(AppState {
        config: Arc::new(config),
    })
}

/// Send a request with no body.
pub async fn send(app: Router, method: Method, uri: &str, headers: &[(&str, &str)]) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, &[]).await
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    post_raw(app, uri, &body.to_string()).await
}

/// Send a POST request with a raw body labelled as JSON.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A catalog component in wire format.
pub fn component(kind: &str, id: i64, price: u64, specs: &[(&str, &str)]) -> Value {
    let specifications: Vec<Value> = specs
        .iter()
        .map(|(name, value)| serde_json::json!({"spec_name": name, "spec_value": value}))
        .collect();
    serde_json::json!({
        "component_type": kind,
        "product_id": id,
        "product_name": format!("{kind} {id}"),
        "product_code": format!("{}-{id}", kind.to_uppercase()),
        "brand_name": "Test Brand",
        "price": price,
        "stock_quantity": 5,
        "specifications": specifications,
    })
}
