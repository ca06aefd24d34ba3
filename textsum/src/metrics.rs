use once_cell::sync::Lazy;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Encoder, Histogram,
    IntCounter, IntCounterVec, TextEncoder,
};
use tracing::error;
use warp::Reply;

pub static SUMMARIZE_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "textsum_summarize_requests_total",
        "Summarization requests by outcome",
        &["outcome"]
    )
    .expect("summarize request counter registers once")
});

pub static QUERIES: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("textsum_queries_total", "Queries recorded")
        .expect("query counter registers once")
});

pub static MODEL_LATENCY: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "textsum_model_latency_seconds",
        "Time spent waiting on the summarization model"
    )
    .expect("model latency histogram registers once")
});

/// Render the default registry in the Prometheus text format.
pub fn render() -> impl Reply {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        error!("Failed to encode metrics: {}", e);
        buffer.clear();
    }
    warp::reply::with_header(buffer, "Content-Type", encoder.format_type())
}
