//! HTTP text summarization service.
//!
//! Requests are validated and their length bounds adjusted before the text is
//! handed to a [`summarizer::Summarizer`]; the returned summary is trimmed to
//! the caller's word limit.

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod store;
pub mod summarizer;
