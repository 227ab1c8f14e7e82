pub mod todos;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// Mounts the todo routes next to a `/health` liveness probe.
pub fn app(router: Router) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(router)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
