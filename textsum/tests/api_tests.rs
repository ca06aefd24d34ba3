use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use warp::http::StatusCode;

use textsum::api;
use textsum::store::QueryStore;
use textsum::summarizer::{SummarizeParams, Summarizer, TextSummarizer};

/// Echoes the first `max_length` words of its input.
struct Leading;

#[async_trait]
impl Summarizer for Leading {
    async fn summarize(&self, params: SummarizeParams) -> Result<String> {
        Ok(params
            .text
            .split_whitespace()
            .take(params.max_length)
            .collect::<Vec<_>>()
            .join(" "))
    }
}

struct Unavailable;

#[async_trait]
impl Summarizer for Unavailable {
    async fn summarize(&self, _params: SummarizeParams) -> Result<String> {
        Err(anyhow!("connection refused"))
    }
}

fn app(
    model: Arc<dyn Summarizer>,
) -> (
    impl warp::Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone,
    QueryStore,
) {
    let store = QueryStore::new();
    (api::routes(TextSummarizer::new(model), store.clone()), store)
}

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

const PYTHON_TEXT: &str = "Python is a high-level, general-purpose programming language. \
    Python's design philosophy emphasizes code readability with the use of significant \
    indentation. Python is dynamically typed and garbage-collected. It supports multiple \
    programming paradigms, including structured, object-oriented and functional programming. \
    It is often described as a \"batteries included\" language due to its comprehensive \
    standard library.";

#[tokio::test]
async fn test_health_check() {
    let (filter, _) = app(Arc::new(Leading));
    let resp = warp::test::request()
        .method("GET")
        .path("/health")
        .reply(&filter)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp.body()), json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_query_is_recorded_and_listed() {
    let (filter, store) = app(Arc::new(Leading));

    let resp = warp::test::request()
        .method("POST")
        .path("/query")
        .json(&json!({"query": "test query"}))
        .reply(&filter)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp.body());
    assert_eq!(body["query"], "test query");
    assert_eq!(body["message"], "Query processed successfully");
    assert_eq!(store.all().await, vec!["test query"]);

    let resp = warp::test::request()
        .method("GET")
        .path("/queries")
        .reply(&filter)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp.body()), json!(["test query"]));
}

#[tokio::test]
async fn test_queries_empty_list() {
    let (filter, _) = app(Arc::new(Leading));
    let resp = warp::test::request()
        .method("GET")
        .path("/queries")
        .reply(&filter)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp.body()), json!([]));
}

#[tokio::test]
async fn test_empty_query_rejected() {
    let (filter, store) = app(Arc::new(Leading));
    let resp = warp::test::request()
        .method("POST")
        .path("/query")
        .json(&json!({"query": ""}))
        .reply(&filter)
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(store.all().await.is_empty());
}

#[tokio::test]
async fn test_summarize_success() {
    let (filter, _) = app(Arc::new(Leading));
    let text = "This is a very long text that needs to be summarized. ".repeat(20);

    let resp = warp::test::request()
        .method("POST")
        .path("/summarize")
        .json(&json!({"text": text, "max_length": 130, "min_length": 30}))
        .reply(&filter)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp.body());
    let summary = body["summary"].as_str().unwrap();
    let words = summary.split_whitespace().count();
    assert!((1..=130).contains(&words));
    assert_eq!(body["original_length"], text.chars().count());
    assert_eq!(body["summary_length"], summary.chars().count());
}

#[tokio::test]
async fn test_summarize_defaults_bounds() {
    let (filter, _) = app(Arc::new(Leading));
    let text = "word ".repeat(300);

    let resp = warp::test::request()
        .method("POST")
        .path("/summarize")
        .json(&json!({"text": text}))
        .reply(&filter)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp.body());
    assert_eq!(
        body["summary"].as_str().unwrap().split_whitespace().count(),
        130
    );
}

#[tokio::test]
async fn test_summarize_short_text_is_client_error() {
    let (filter, _) = app(Arc::new(Leading));
    let resp = warp::test::request()
        .method("POST")
        .path("/summarize")
        .json(&json!({"text": "This is too short to summarize."}))
        .reply(&filter)
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp.body());
    assert_eq!(body["error"], "Bad request");
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("Text too short for summarization"));
}

#[tokio::test]
async fn test_summarize_inverted_bounds_is_client_error() {
    let (filter, _) = app(Arc::new(Leading));
    let resp = warp::test::request()
        .method("POST")
        .path("/summarize")
        .json(&json!({"text": PYTHON_TEXT, "max_length": 50, "min_length": 100}))
        .reply(&filter)
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp.body());
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("cannot be greater than max_length"));
}

#[tokio::test]
async fn test_summarize_out_of_range_length_rejected() {
    let (filter, _) = app(Arc::new(Leading));
    let resp = warp::test::request()
        .method("POST")
        .path("/summarize")
        .json(&json!({"text": PYTHON_TEXT, "max_length": 1000}))
        .reply(&filter)
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_summarize_model_failure_is_server_error() {
    let (filter, _) = app(Arc::new(Unavailable));
    let resp = warp::test::request()
        .method("POST")
        .path("/summarize")
        .json(&json!({"text": PYTHON_TEXT}))
        .reply(&filter)
        .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp.body());
    assert_eq!(body["error"], "Internal server error");
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let (filter, _) = app(Arc::new(Leading));
    let resp = warp::test::request()
        .method("POST")
        .path("/summarize")
        .header("content-type", "application/json")
        .body("{not json")
        .reply(&filter)
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_metrics_exposed() {
    let (filter, _) = app(Arc::new(Leading));

    warp::test::request()
        .method("POST")
        .path("/query")
        .json(&json!({"query": "count me"}))
        .reply(&filter)
        .await;

    let resp = warp::test::request()
        .method("GET")
        .path("/metrics")
        .reply(&filter)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let text = String::from_utf8(resp.body().to_vec()).unwrap();
    assert!(text.contains("textsum_queries_total"));
}
