use warp::{Filter, Rejection, Reply};

use crate::error::handle_rejection;
use crate::metrics;
use crate::models::HealthResponse;
use crate::store::QueryStore;
use crate::summarizer::TextSummarizer;

mod query;
mod summarize;

/// Upper bound on accepted JSON bodies.
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Every route the service exposes, with rejections rendered as JSON errors.
pub fn routes(
    summarizer: TextSummarizer,
    store: QueryStore,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| {
            warp::reply::json(&HealthResponse {
                status: "healthy".to_string(),
            })
        });

    let metrics = warp::path("metrics")
        .and(warp::path::end())
        .and(warp::get())
        .map(metrics::render);

    let summarize_route = warp::path("summarize")
        .and(warp::path::end())
        .and(warp::post())
        .and(json_body())
        .and(with_summarizer(summarizer))
        .and_then(summarize::handle_summarize);

    let query_route = warp::path("query")
        .and(warp::path::end())
        .and(warp::post())
        .and(json_body())
        .and(with_store(store.clone()))
        .and_then(query::handle_query);

    let queries_route = warp::path("queries")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store))
        .and_then(query::handle_list_queries);

    health
        .or(metrics)
        .or(summarize_route)
        .or(query_route)
        .or(queries_route)
        .recover(handle_rejection)
}

fn json_body<T>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone
where
    T: serde::de::DeserializeOwned + Send,
{
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}

fn with_summarizer(
    summarizer: TextSummarizer,
) -> impl Filter<Extract = (TextSummarizer,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || summarizer.clone())
}

fn with_store(
    store: QueryStore,
) -> impl Filter<Extract = (QueryStore,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || store.clone())
}
