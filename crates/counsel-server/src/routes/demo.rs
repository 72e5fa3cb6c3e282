//! Demo endpoints and the load simulation route.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use counsel_runtime::{simulate_load, SimulationReport};
use tracing::{error, info};

use super::detail;
use crate::state::AppState;

/// Number of generated `/demo/endpoint/{i}` routes.
pub const DEMO_ENDPOINT_COUNT: usize = 50;

pub fn routes() -> Router<Arc<AppState>> {
    let mut router = Router::new().route("/simulate", get(simulate_tasks));
    for i in 0..DEMO_ENDPOINT_COUNT {
        // Each handler owns its copy of `i`
        router = router.route(&format!("/demo/endpoint/{}", i), get(move || demo_endpoint(i)));
    }
    router
}

async fn demo_endpoint(i: usize) -> Json<serde_json::Value> {
    info!("Demo endpoint {} called", i);
    Json(serde_json::json!({ "demo": format!("This is demo endpoint number {}", i) }))
}

/// GET /simulate: run the synthetic workload on a blocking thread.
async fn simulate_tasks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SimulationReport>, (StatusCode, Json<serde_json::Value>)> {
    let mut rng = state.fork_rng();
    tokio::task::spawn_blocking(move || simulate_load(&mut rng))
        .await
        .map(Json)
        .map_err(|e| {
            error!("Simulation task failed: {}", e);
            detail(StatusCode::INTERNAL_SERVER_ERROR, "Simulation failed")
        })
}
