#![allow(dead_code)]

use axum::{
    Json, Router,
    body::Body,
    http::{Request, Response},
    middleware,
    routing::get,
};
use serde_json::{Value, json};

use querycrate::{ParsedQuery, QueryResults, SharedStrategy, parse_query};

/// Serialize parsed results for comparison against `json!` literals.
pub fn to_json(results: &QueryResults) -> Value {
    serde_json::to_value(results).expect("results serialize to JSON")
}

async fn echo_handler(query: ParsedQuery) -> Json<Value> {
    Json(json!({
        "results": query.results,
        "query_string": query.query_string,
    }))
}

/// Router echoing the parsed query back as JSON.
///
/// The strategy layers run in the order given.
pub fn setup_echo_app(strategies: Vec<SharedStrategy>) -> Router {
    strategies
        .into_iter()
        .rev()
        .fold(Router::new().route("/items", get(echo_handler)), |router, strategy| {
            router.layer(middleware::from_fn_with_state(strategy, parse_query))
        })
}

/// Router without any parsing layer.
pub fn setup_bare_app() -> Router {
    Router::new().route("/items", get(echo_handler))
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
