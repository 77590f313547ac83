use anyhow::Context;
use async_trait::async_trait;
use mtgcall_core::{CardRecord, CardSearch};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::types::SearchResponse;

/// Scryfall client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScryfallConfig {
    /// API root, without trailing slash
    #[serde(default = "ScryfallConfig::default_base_url")]
    pub base_url: String,

    /// Request timeout (seconds)
    #[serde(default = "ScryfallConfig::default_timeout")]
    pub timeout: u64,

    /// User-Agent header, required by the Scryfall API
    #[serde(default = "ScryfallConfig::default_user_agent")]
    pub user_agent: String,
}

impl ScryfallConfig {
    fn default_base_url() -> String {
        "https://api.scryfall.com".to_string()
    }

    const fn default_timeout() -> u64 {
        10
    }

    fn default_user_agent() -> String {
        format!("mtgcall/{}", env!("CARGO_PKG_VERSION"))
    }
}

impl Default for ScryfallConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout: Self::default_timeout(),
            user_agent: Self::default_user_agent(),
        }
    }
}

/// Full-text card search against `/cards/search`.
#[derive(Debug, Clone)]
pub struct ScryfallClient {
    client: Client,
    base_url: String,
}

impl ScryfallClient {
    pub fn new(config: &ScryfallConfig) -> anyhow::Result<Self> {
        info!("Creating ScryfallClient for {}", config.base_url);
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search URL for `query`, with the query form-escaped into `q`.
    pub fn search_url(&self, query: &str) -> anyhow::Result<Url> {
        Url::parse_with_params(&format!("{}/cards/search", self.base_url), &[("q", query)])
            .with_context(|| format!("Invalid Scryfall base URL: {}", self.base_url))
    }
}

#[async_trait]
impl CardSearch for ScryfallClient {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<CardRecord>> {
        let url = self.search_url(query)?;
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        // Scryfall reports "no cards matched" as a 404 error object.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let body = response.error_for_status()?.json::<SearchResponse>().await?;

        if let (None, Some(details)) = (&body.data, &body.details) {
            debug!("Scryfall returned no data for \"{query}\": {details}");
        }

        Ok(body
            .data
            .unwrap_or_default()
            .into_iter()
            .map(CardRecord::from)
            .collect())
    }
}
