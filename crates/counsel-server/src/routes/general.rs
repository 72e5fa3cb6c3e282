//! Welcome and health routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

/// GET /: service banner and endpoint listing.
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the NLP API Service",
        "endpoints": [
            "/api/responses",
            "/api/responses/random",
            "/api/responses/{response_id}",
            "/api/responses/happy",
            "/api/responses/sad",
            "/api/nlu/sentiment",
            "/api/nlu/entities",
            "/api/nlu/summarize",
            "/api/nlu/translate",
            "/api/nlu/qa",
            "/api/nlu/info",
            "/api/simulate",
        ],
    }))
}

/// GET /api: welcome message.
pub async fn index() -> Json<serde_json::Value> {
    info!("GET / endpoint called");
    Json(serde_json::json!({ "message": "Welcome to the Advanced NLP API" }))
}

/// GET /health: corpus and recognizer readiness.
async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let stats = state.corpus.stats();
    Json(serde_json::json!({
        "status": "healthy",
        "records": state.corpus.len(),
        "indexed": stats.indexed,
        "load_mode": state.corpus.mode(),
        "entities_available": state.recognizer.is_available(),
        "entity_backend": state.recognizer.name(),
    }))
}
