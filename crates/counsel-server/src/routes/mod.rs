//! HTTP route handlers.
//!
//! Every route is served at the root and again under `/api`.

pub mod demo;
pub mod general;
pub mod nlu;
pub mod responses;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(general::root))
        .merge(service_routes())
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(general::index))
        .merge(service_routes())
}

fn service_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(general::routes())
        .merge(responses::routes())
        .merge(nlu::routes())
        .merge(demo::routes())
}

/// Error body in the `{"detail": ...}` shape clients expect.
pub(crate) fn detail(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "detail": message.into() })))
}

/// Map a core error to a status code and detail body.
pub(crate) fn error_response(err: &counsel_core::Error) -> (StatusCode, Json<serde_json::Value>) {
    use counsel_core::Error;

    let status = match err {
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    detail(status, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use counsel_core::Error;

    #[test]
    fn test_error_response_status_mapping() {
        let cases = [
            (Error::NotFound("response 9".into()), StatusCode::NOT_FOUND),
            (Error::ServiceUnavailable("no model".into()), StatusCode::SERVICE_UNAVAILABLE),
            (Error::LoadFailure("bad.json".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (Error::Config("PORT".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            let (status, Json(body)) = error_response(&err);
            assert_eq!(status, expected);
            assert_eq!(body["detail"], err.to_string());
        }
    }
}
