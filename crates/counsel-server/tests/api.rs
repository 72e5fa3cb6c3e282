//! API tests: drive the router in-process (no socket) and check status
//! codes and response shapes.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use counsel_core::{CounselConfig, LoadMode};
use counsel_nlp::{EntityRecognizer, HeuristicRecognizer, UnavailableRecognizer};
use counsel_server::{build_router, AppState};
use counsel_store::{Corpus, Record};
use serde_json::{json, Value};
use tower::ServiceExt;

fn records() -> Vec<Record> {
    vec![
        Record::new("1", "I feel sad all the time", "It's okay to feel sad sometimes."),
        Record::new("2", "I got the job!", "I'm so happy for you!"),
        Record::new("3", "My exam went well", "That must make you happy."),
        Record::new("4", "I can't sleep", "Let's talk about your evenings."),
        Record::new("5", "Still can't sleep", "Let's talk about your evenings."),
    ]
}

fn app_with(mode: LoadMode, recognizer: Arc<dyn EntityRecognizer>) -> Router {
    let config = CounselConfig {
        rng_seed: Some(7),
        load_mode: mode,
        ..CounselConfig::default()
    };
    let corpus = Corpus::from_records(records(), mode);
    build_router(Arc::new(AppState::new(config, corpus, recognizer)))
}

fn app() -> Router {
    app_with(LoadMode::All, Arc::new(HeuristicRecognizer::new()))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

fn ids(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let (status, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
    assert!(body["endpoints"].is_array());
}

#[tokio::test]
async fn test_list_responses_filters_and_pages() {
    let (status, body) = get(app(), "/responses").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["1", "2", "3", "4", "5"]);

    let (_, body) = get(app(), "/responses?output_text=HAPPY").await;
    assert_eq!(ids(&body), vec!["2", "3"]);

    let (_, body) = get(app(), "/responses?input_text=sleep&output_text=evenings&skip=1&limit=5").await;
    assert_eq!(ids(&body), vec!["5"]);

    let (_, body) = get(app(), "/responses?skip=50").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_routes_are_mirrored_under_api() {
    let (status, body) = get(app(), "/api/responses?limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["1", "2"]);
}

#[tokio::test]
async fn test_get_response_by_id() {
    let (status, body) = get(app(), "/responses/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": "3", "input": "My exam went well", "output": "That must make you happy."})
    );

    let (status, body) = get(app(), "/responses/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Response not found");
}

#[tokio::test]
async fn test_category_routes_are_not_shadowed_by_id() {
    let (status, body) = get(app(), "/responses/happy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["2", "3"]);

    let (_, body) = get(app(), "/responses/sad?limit=1").await;
    assert_eq!(ids(&body), vec!["1"]);
}

#[tokio::test]
async fn test_random_response() {
    let (status, body) = get(app(), "/responses/random?output_text=happy").await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_str().unwrap();
    assert!(id == "2" || id == "3");

    let (status, body) = get(app(), "/responses/random?input_text=zebra").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "No matching responses found");
}

#[tokio::test]
async fn test_unique_mode_drops_duplicate_outputs() {
    let app = app_with(LoadMode::Unique, Arc::new(HeuristicRecognizer::new()));
    let (_, body) = get(app.clone(), "/responses").await;
    assert_eq!(ids(&body), vec!["1", "2", "3", "4"]);

    let (status, _) = get(app, "/responses/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_sentiment_shape() {
    let (status, body) = post(app(), "/nlu/sentiment", json!({"text": "I feel great"})).await;
    assert_eq!(status, StatusCode::OK);
    let score = body["sentiment"].as_f64().unwrap();
    assert!((-1.0..=1.0).contains(&score));
    let expected = if score > 0.0 {
        "positive"
    } else if score < 0.0 {
        "negative"
    } else {
        "neutral"
    };
    assert_eq!(body["label"], expected);
}

#[tokio::test]
async fn test_entities() {
    let (status, body) = post(
        app(),
        "/nlu/entities",
        json!({"text": "Dr. Smith moved to London last week."}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["entities"],
        json!([
            {"text": "Dr. Smith", "label": "PERSON"},
            {"text": "London", "label": "GPE"},
            {"text": "last week", "label": "DATE"},
        ])
    );

    let (status, body) = post(app(), "/nlu/entities", json!({"text": "nothing here"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entities"], json!([]));
}

#[tokio::test]
async fn test_entities_unavailable_is_distinct_from_empty() {
    let app = app_with(
        LoadMode::All,
        Arc::new(UnavailableRecognizer::new("model failed to load")),
    );
    let (status, body) = post(app, "/nlu/entities", json!({"text": "Paris"})).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["detail"], "NLP model not available");
}

#[tokio::test]
async fn test_summarize() {
    let (status, body) = post(
        app(),
        "/nlu/summarize",
        json!({"text": "Hello world. Second part."}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "Hello world.");
}

#[tokio::test]
async fn test_translate_defaults_to_es() {
    let (_, body) = get(app(), "/nlu/translate?text=abc").await;
    assert_eq!(body["translated_text"], "cba (es)");

    let (_, body) = get(app(), "/nlu/translate?text=abc&target_lang=fr").await;
    assert_eq!(body["translated_text"], "cba (fr)");
}

#[tokio::test]
async fn test_question_answer() {
    let (status, body) = post(
        app(),
        "/nlu/qa?question=loyal",
        json!({"text": "Cats are great. Dogs are loyal."}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"question": "loyal", "answer": "Dogs are loyal"}));

    let (status, _) = post(app(), "/nlu/qa", json!({"text": "Cats."})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_nlu_info() {
    let (status, body) = get(app(), "/nlu/info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_demo_endpoints_capture_their_index() {
    for i in [0, 17, 49] {
        let (status, body) = get(app(), &format!("/demo/endpoint/{}", i)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["demo"], format!("This is demo endpoint number {}", i));
    }

    let (status, _) = get(app(), "/demo/endpoint/50").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_simulate_shape() {
    let (status, body) = get(app(), "/simulate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 10_000);
    assert_eq!(body["simulation_results"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_health_reports_readiness() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["records"], 5);
    assert_eq!(body["indexed"], 5);
    assert_eq!(body["load_mode"], "all");
    assert_eq!(body["entities_available"], true);
    assert_eq!(body["entity_backend"], "heuristic");

    let (_, body) = get(app_with(LoadMode::Unique, Arc::new(HeuristicRecognizer::new())), "/health").await;
    assert_eq!(body["records"], 4);
    assert_eq!(body["load_mode"], "unique");

    let app = app_with(LoadMode::All, Arc::new(UnavailableRecognizer::new("off")));
    let (_, body) = get(app, "/api/health").await;
    assert_eq!(body["entities_available"], false);
}
