use tracing::info;
use warp::{Rejection, Reply};

use crate::metrics::QUERIES;
use crate::models::{QueryRequest, QueryResponse};
use crate::store::QueryStore;

pub async fn handle_query(
    request: QueryRequest,
    store: QueryStore,
) -> Result<impl Reply, Rejection> {
    request.validate().map_err(warp::reject::custom)?;
    info!("Processing query request: {}", request.query);

    store.record(request.query.clone()).await;
    QUERIES.inc();

    Ok(warp::reply::json(&QueryResponse {
        message: "Query processed successfully".to_string(),
        query: request.query,
    }))
}

pub async fn handle_list_queries(store: QueryStore) -> Result<impl Reply, Rejection> {
    info!("Fetching all stored queries");
    let queries = store.all().await;
    Ok(warp::reply::json(&queries))
}
