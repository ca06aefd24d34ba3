use tracing::{error, info, warn};
use uuid::Uuid;
use warp::{Rejection, Reply};

use crate::error::ApiError;
use crate::metrics::SUMMARIZE_REQUESTS;
use crate::models::{SummarizeRequest, SummarizeResponse};
use crate::summarizer::TextSummarizer;

pub async fn handle_summarize(
    request: SummarizeRequest,
    summarizer: TextSummarizer,
) -> Result<impl Reply, Rejection> {
    let request_id = Uuid::new_v4();
    let original_length = request.text.chars().count();
    info!(
        "Processing summarization request [{}], text length: {}",
        request_id, original_length
    );

    let (max_length, min_length) = request.validated_lengths().map_err(|e| {
        warn!("Rejected summarization request [{}]: {}", request_id, e);
        SUMMARIZE_REQUESTS.with_label_values(&["client_error"]).inc();
        warp::reject::custom(e)
    })?;

    let result = summarizer
        .summarize(&request.text, max_length, min_length)
        .await;

    match result {
        Ok(summary) => {
            SUMMARIZE_REQUESTS.with_label_values(&["ok"]).inc();
            info!(
                "Summarization request [{}] done, summary length: {}",
                request_id,
                summary.chars().count()
            );
            Ok(warp::reply::json(&SummarizeResponse {
                original_length,
                summary_length: summary.chars().count(),
                summary,
            }))
        }
        Err(e) if e.is_client_error() => {
            warn!("Rejected summarization request [{}]: {}", request_id, e);
            SUMMARIZE_REQUESTS.with_label_values(&["client_error"]).inc();
            Err(warp::reject::custom(ApiError::from(e)))
        }
        Err(e) => {
            error!("Error during summarization [{}]: {}", request_id, e);
            SUMMARIZE_REQUESTS.with_label_values(&["model_error"]).inc();
            Err(warp::reject::custom(ApiError::from(e)))
        }
    }
}
