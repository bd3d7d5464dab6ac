use crate::config::Config;
use crate::domain::MemeSource;
use crate::errors::FetchError;
use crate::models::{MemeListResponse, MemeRecord};
use async_trait::async_trait;
use rand::Rng;

/// HTTP client for the Imgflip meme API.
#[derive(Debug, Clone)]
pub struct ImgflipClient {
    http: reqwest::Client,
    base_url: String,
}

impl ImgflipClient {
    /// Creates a client from application config, applying the request
    /// timeout when one is configured.
    pub fn new(config: &Config) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().expect("Failed to build HTTP client");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client with default transport settings against the given
    /// base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn get_memes_url(&self) -> String {
        format!("{}/get_memes", self.base_url)
    }
}

#[async_trait]
impl MemeSource for ImgflipClient {
    async fn fetch_random_meme(&self) -> Result<MemeRecord, FetchError> {
        let response = self
            .http
            .get(self.get_memes_url())
            .send()
            .await
            .map_err(FetchError::Network)?;

        if !response.status().is_success() {
            return Err(FetchError::NoMemesAvailable);
        }

        // Read the body before parsing so transport failures mid-body stay
        // distinct from schema failures.
        let body = response.text().await.map_err(FetchError::Network)?;
        let envelope: MemeListResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::InvalidResponse(format!("malformed meme list payload: {e}")))?;

        let mut memes = envelope.data.memes;
        if memes.is_empty() {
            return Err(FetchError::NoMemesAvailable);
        }
        for meme in &memes {
            meme.check_fields().map_err(FetchError::InvalidResponse)?;
        }

        let index = rand::thread_rng().gen_range(0..memes.len());
        Ok(memes.swap_remove(index))
    }
}
