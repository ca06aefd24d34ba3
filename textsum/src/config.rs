use anyhow::{Context, Result};

pub const DEFAULT_MODEL_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/sshleifer/distilbart-cnn-12-6";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub model_endpoint: String,
    pub model_api_key: Option<String>,
    pub model_timeout_secs: u64,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid port number")?,
            model_endpoint: lookup("MODEL_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_MODEL_ENDPOINT.to_string()),
            model_api_key: lookup("MODEL_API_KEY").filter(|k| !k.is_empty()),
            model_timeout_secs: lookup("MODEL_TIMEOUT_SECS")
                .unwrap_or_else(|| "60".to_string())
                .parse()
                .context("MODEL_TIMEOUT_SECS must be a whole number of seconds")?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}
