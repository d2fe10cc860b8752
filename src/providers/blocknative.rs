//! Blocknative block prices provider implementation

use crate::{
    constants::{
        BLOCKNATIVE_API_URL, FAST_CONFIDENCE, REQUEST_TIMEOUT_SECS, SAFE_CONFIDENCE, USER_AGENT,
    },
    error::{FetchError, ParseError, TransportError},
    provider::FeeProvider,
    types::{Chain, FeeEstimate},
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Blocknative block prices response
#[derive(Debug, Deserialize)]
struct BlockPricesResponse {
    #[serde(default, rename = "blockPrices")]
    block_prices: Vec<BlockPrice>,
}

#[derive(Debug, Deserialize)]
struct BlockPrice {
    #[serde(default, rename = "estimatedPrices")]
    estimated_prices: Vec<EstimatedPrice>,
}

#[derive(Debug, Deserialize)]
struct EstimatedPrice {
    confidence: u32,
    price: f64,
}

/// Blocknative block prices provider
///
/// The endpoint needs no API key; any configured key is for the Ethereum
/// source and is never sent here.
pub struct BlocknativeProvider {
    client: Client,
}

impl BlocknativeProvider {
    /// Creates a new Blocknative provider
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(TransportError::from)?;

        Ok(Self { client })
    }

    /// Builds the block prices request URL
    fn build_url(&self) -> String {
        format!("{}?chainid=0", BLOCKNATIVE_API_URL)
    }

    /// Decodes a block prices body into fee estimates
    ///
    /// Scans the next block's estimated prices for the safe (70) and fast
    /// (99) confidence tiers; both must be present.
    fn parse_response(&self, body: &str) -> Result<FeeEstimate, ParseError> {
        let response: BlockPricesResponse =
            serde_json::from_str(body).map_err(|_| ParseError::Malformed)?;

        let next_block = response.block_prices.first().ok_or(ParseError::ApiError)?;

        let mut safe = None;
        let mut fast = None;
        for entry in &next_block.estimated_prices {
            if entry.confidence == SAFE_CONFIDENCE {
                safe = Some(entry.price);
            } else if entry.confidence == FAST_CONFIDENCE {
                fast = Some(entry.price);
            }
        }

        match (safe, fast) {
            (Some(safe), Some(fast)) => Ok(FeeEstimate::new(Chain::Bitcoin, safe, fast)),
            _ => Err(ParseError::MissingData),
        }
    }
}

impl Default for BlocknativeProvider {
    fn default() -> Self {
        Self::new().expect("Failed to create Blocknative provider")
    }
}

#[async_trait]
impl FeeProvider for BlocknativeProvider {
    async fn fetch_fees(&self, _api_key: &str) -> Result<FeeEstimate, FetchError> {
        let url = self.build_url();
        log::debug!("Fetching block prices from Blocknative");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(TransportError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::HttpStatus(status.as_u16()).into());
        }

        let body = response.text().await.map_err(TransportError::from)?;
        let estimate = self.parse_response(&body)?;

        log::debug!(
            "BTC block prices - safe ({}%): {}, fast ({}%): {}",
            SAFE_CONFIDENCE,
            estimate.safe,
            FAST_CONFIDENCE,
            estimate.fast
        );

        Ok(estimate)
    }

    fn chain(&self) -> Chain {
        Chain::Bitcoin
    }

    fn provider_name(&self) -> &'static str {
        "blocknative"
    }
}
