use crate::domain::model::{Pokemon, PokemonList, PokemonRef};
use crate::domain::ports::PokeSource;
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// The upstream API rejects requests without a browser-style agent.
const USER_AGENT: &str = "Mozilla/5.0";

/// HTTP client for the PokéAPI. Every fetch failure is logged and converted
/// to an empty list or an absent record at this boundary.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            source: e,
        })?;

        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}

#[async_trait]
impl PokeSource for ApiClient {
    async fn fetch_list(&self, limit: usize) -> Vec<PokemonRef> {
        let url = format!("{}/pokemon/?limit={}", self.base_url, limit);
        tracing::info!("Requesting Pokémon list from: {}", url);

        match self.get_json::<PokemonList>(&url).await {
            Ok(list) => list.results,
            Err(e) => {
                tracing::warn!("Error fetching Pokémon list: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_detail(&self, reference: &PokemonRef) -> Option<Pokemon> {
        match self.get_json(&reference.url).await {
            Ok(pokemon) => Some(pokemon),
            Err(e) => {
                tracing::warn!("Error fetching details for {}: {}", reference.name, e);
                None
            }
        }
    }

    async fn fetch_by_name(&self, name_or_id: &str) -> Option<Pokemon> {
        let selector = name_or_id.trim().to_ascii_lowercase();
        let url = format!("{}/pokemon/{}/", self.base_url, selector);

        match self.get_json(&url).await {
            Ok(pokemon) => Some(pokemon),
            Err(e) => {
                tracing::warn!("Error: Pokémon '{}' not found. {}", name_or_id, e);
                None
            }
        }
    }
}
