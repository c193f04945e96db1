//! Diagnostic Route
//!
//! `ANY /test` answers a fixed digest so deployments can check that the
//! server and its hashing helpers are wired up.

use axum::{Json, Router, routing::any};
use serde_json::{Value, json};

pub fn router() -> Router {
    Router::new().route("/test", any(digest))
}

async fn digest() -> Json<Value> {
    Json(json!({ "data": platform::crypto::sha256_hex(b"hello") }))
}
