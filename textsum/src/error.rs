use serde::Serialize;
use thiserror::Error;
use warp::http::StatusCode;
use warp::{reject::Reject, Rejection, Reply};

use crate::summarizer::SummarizeError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Summarization(#[from] SummarizeError),
}

impl Reject for ApiError {}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Summarization(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Summarization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
}

pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Rejection> {
    if let Some(api_err) = err.find::<ApiError>() {
        let code = api_err.status();
        let message = if code == StatusCode::BAD_REQUEST {
            "Bad request"
        } else {
            "Internal server error"
        };
        return Ok(error_reply(code, message, api_err.to_string()));
    }

    if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        return Ok(error_reply(StatusCode::BAD_REQUEST, "Bad request", e.to_string()));
    }

    if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        return Ok(error_reply(
            StatusCode::PAYLOAD_TOO_LARGE,
            "Payload too large",
            "request body exceeds the size limit".to_string(),
        ));
    }

    Err(err)
}

fn error_reply(
    code: StatusCode,
    message: &str,
    details: String,
) -> warp::reply::WithStatus<warp::reply::Json> {
    let json = warp::reply::json(&ErrorBody {
        error: message.to_string(),
        details,
    });
    warp::reply::with_status(json, code)
}
