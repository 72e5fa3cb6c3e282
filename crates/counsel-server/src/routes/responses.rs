//! Psychologist response routes: paging, random pick, lookup, categories.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use counsel_store::{pick_random, Category, Page, Record, ResponseFilter};
use serde::Deserialize;
use tracing::{info, warn};

use super::detail;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/responses", get(list_responses))
        .route("/responses/random", get(random_response))
        .route("/responses/happy", get(happy_responses))
        .route("/responses/sad", get(sad_responses))
        .route("/responses/{response_id}", get(get_response))
}

#[derive(Deserialize)]
struct ListResponsesQuery {
    limit: Option<usize>,
    skip: Option<usize>,
    input_text: Option<String>,
    output_text: Option<String>,
}

#[derive(Deserialize)]
struct RandomResponseQuery {
    input_text: Option<String>,
    output_text: Option<String>,
}

#[derive(Deserialize)]
struct PageQuery {
    limit: Option<usize>,
    skip: Option<usize>,
}

fn page(state: &AppState, skip: Option<usize>, limit: Option<usize>) -> Page {
    Page::new(skip.unwrap_or(0), limit.unwrap_or(state.config.default_limit))
}

/// GET /responses: filtered, paginated records.
async fn list_responses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListResponsesQuery>,
) -> Json<Vec<Record>> {
    let page = page(&state, params.skip, params.limit);
    info!(
        "GET /responses limit={} skip={} input_text={:?} output_text={:?}",
        page.limit, page.skip, params.input_text, params.output_text
    );

    let filter = ResponseFilter::new(params.input_text, params.output_text);
    let result: Vec<Record> = state
        .corpus
        .query(&filter, page)
        .into_iter()
        .cloned()
        .collect();

    info!("Returning {} responses", result.len());
    Json(result)
}

/// GET /responses/random: one record drawn from the filtered set.
async fn random_response(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RandomResponseQuery>,
) -> Result<Json<Record>, (StatusCode, Json<serde_json::Value>)> {
    let filter = ResponseFilter::new(params.input_text, params.output_text);
    let candidates = state.corpus.filter(&filter);
    let picked = state.with_rng(|rng| pick_random(&candidates, rng).cloned());

    match picked {
        Ok(record) => {
            info!("Random response selected: {:?}", record.id_key());
            Ok(Json(record))
        }
        Err(e) => {
            warn!("No matching responses found: {}", e);
            Err(detail(StatusCode::NOT_FOUND, "No matching responses found"))
        }
    }
}

/// GET /responses/{response_id}: point lookup by id.
async fn get_response(
    State(state): State<Arc<AppState>>,
    Path(response_id): Path<String>,
) -> Result<Json<Record>, (StatusCode, Json<serde_json::Value>)> {
    match state.corpus.get_by_id(&response_id) {
        Ok(record) => Ok(Json(record.clone())),
        Err(e) => {
            warn!("Response not found for id {}: {}", response_id, e);
            Err(detail(StatusCode::NOT_FOUND, "Response not found"))
        }
    }
}

async fn happy_responses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageQuery>,
) -> Json<Vec<Record>> {
    category_responses(&state, Category::Happy, params)
}

async fn sad_responses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageQuery>,
) -> Json<Vec<Record>> {
    category_responses(&state, Category::Sad, params)
}

fn category_responses(state: &AppState, category: Category, params: PageQuery) -> Json<Vec<Record>> {
    let page = page(state, params.skip, params.limit);
    let result: Vec<Record> = state
        .corpus
        .category(category, page)
        .into_iter()
        .cloned()
        .collect();
    info!("Returning {} {} responses", result.len(), category.keyword());
    Json(result)
}
