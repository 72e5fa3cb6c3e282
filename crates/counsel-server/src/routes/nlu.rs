//! Text transform routes: sentiment, entities, summary, translation, QA.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use counsel_nlp::{Sentiment, DEFAULT_TARGET_LANG};
use serde::Deserialize;
use tracing::{error, info};

use super::{detail, error_response};
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/nlu/sentiment", post(analyze_sentiment))
        .route("/nlu/entities", post(extract_entities))
        .route("/nlu/summarize", post(summarize_text))
        .route("/nlu/translate", get(translate_text))
        .route("/nlu/qa", post(question_answer))
        .route("/nlu/info", get(nlu_info))
}

#[derive(Deserialize)]
struct TextInput {
    text: String,
}

#[derive(Deserialize)]
struct TranslateQuery {
    text: String,
    target_lang: Option<String>,
}

#[derive(Deserialize)]
struct QuestionQuery {
    question: String,
}

async fn analyze_sentiment(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TextInput>,
) -> Json<Sentiment> {
    let result = state.with_rng(|rng| counsel_nlp::analyze_sentiment(&input.text, rng));
    info!("Sentiment score: {}, label: {}", result.score, result.label);
    Json(result)
}

async fn extract_entities(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TextInput>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    match state.recognizer.extract(&input.text) {
        Ok(entities) => {
            info!("Extracted {} entities", entities.len());
            Ok(Json(serde_json::json!({ "entities": entities })))
        }
        Err(counsel_core::Error::ServiceUnavailable(reason)) => {
            error!("NLP model not loaded: {}", reason);
            Err(detail(StatusCode::SERVICE_UNAVAILABLE, "NLP model not available"))
        }
        Err(e) => {
            error!("Entity extraction failed: {}", e);
            Err(error_response(&e))
        }
    }
}

async fn summarize_text(Json(input): Json<TextInput>) -> Json<serde_json::Value> {
    let summary = counsel_nlp::summarize(&input.text);
    info!("Generated summary: {}", summary);
    Json(serde_json::json!({ "summary": summary }))
}

async fn translate_text(Query(params): Query<TranslateQuery>) -> Json<serde_json::Value> {
    let target_lang = params.target_lang.as_deref().unwrap_or(DEFAULT_TARGET_LANG);
    let translated = counsel_nlp::translate(&params.text, target_lang);
    info!("Translated text: {}", translated);
    Json(serde_json::json!({ "translated_text": translated }))
}

async fn question_answer(
    Query(params): Query<QuestionQuery>,
    Json(input): Json<TextInput>,
) -> Json<serde_json::Value> {
    let answer = counsel_nlp::answer_question(&input.text, &params.question);
    info!("Answer: {}", answer);
    Json(serde_json::json!({
        "question": params.question,
        "answer": answer,
    }))
}

async fn nlu_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "version": "1.0",
        "description": "Advanced NLP API with multiple NLP endpoints",
        "endpoints": [
            "/nlu/sentiment",
            "/nlu/entities",
            "/nlu/summarize",
            "/nlu/translate",
            "/nlu/qa",
        ],
    }))
}

