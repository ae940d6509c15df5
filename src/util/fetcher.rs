use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::{
    data::{FetchConfig, models::Giveaway},
    error::FetchError,
    util::parser,
};

const MAX_BODY_BYTES: usize = 5_000_000;

#[async_trait]
pub trait Source: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Giveaway>, FetchError>;
}

pub struct GamerPower {
    client: Client,
    endpoint: Url,
}

impl GamerPower {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            endpoint: Url::parse(&config.endpoint)?,
        })
    }
}

#[async_trait]
impl Source for GamerPower {
    async fn fetch(&self) -> Result<Vec<Giveaway>, FetchError> {
        let content = fetch(&self.client, self.endpoint.clone()).await?;
        let giveaways = parser::parse(&content)?;
        debug!("Fetched {} giveaways from {}", giveaways.len(), self.endpoint);
        Ok(giveaways)
    }
}

async fn fetch(client: &Client, url: Url) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let bytes = response.bytes().await?;
    if bytes.len() > MAX_BODY_BYTES {
        return Err(FetchError::TooLarge(bytes.len()));
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
