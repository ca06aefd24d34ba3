use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use warp::Filter;

use textsum::summarizer::{HttpSummarizer, TextSummarizer};
use textsum::{api, config, middleware, store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!("Starting text summarization service");
    info!("Model endpoint: {}", config.model_endpoint);

    let model = HttpSummarizer::new(
        config.model_endpoint.clone(),
        config.model_api_key.clone(),
        Duration::from_secs(config.model_timeout_secs),
    )?;
    let summarizer = TextSummarizer::new(Arc::new(model));
    let queries = store::QueryStore::new();

    let routes = api::routes(summarizer, queries)
        .with(warp::log("textsum"))
        .with(middleware::cors());

    // Start server
    let addr = ([0, 0, 0, 0], config.port);
    info!("Server listening on {}", addr.1);

    warp::serve(routes).run(addr).await;

    Ok(())
}
