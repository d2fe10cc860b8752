//! Etherscan gas oracle provider implementation

use crate::{
    constants::{ETHERSCAN_API_URL, REQUEST_TIMEOUT_SECS, USER_AGENT},
    error::{FetchError, ParseError, TransportError},
    provider::FeeProvider,
    types::{Chain, FeeEstimate},
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Etherscan gas oracle response envelope
///
/// `result` is an object on success but a bare string on API-level errors,
/// so it stays untyped until `status` has been checked.
#[derive(Debug, Deserialize)]
struct GasOracleResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    result: Option<Value>,
}

/// Etherscan gas oracle provider
pub struct EtherscanProvider {
    client: Client,
}

impl EtherscanProvider {
    /// Creates a new Etherscan provider
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(TransportError::from)?;

        Ok(Self { client })
    }

    /// Builds the gas oracle request URL
    ///
    /// The key parameter is appended only when a key is configured.
    fn build_url(&self, api_key: &str) -> String {
        let mut url = format!(
            "{}?chainid=1&module=gastracker&action=gasoracle",
            ETHERSCAN_API_URL
        );
        if !api_key.is_empty() {
            url.push_str("&apikey=");
            url.push_str(api_key);
        }
        url
    }

    /// Decodes a gas oracle body into fee estimates
    fn parse_response(&self, body: &str) -> Result<FeeEstimate, ParseError> {
        let response: GasOracleResponse =
            serde_json::from_str(body).map_err(|_| ParseError::Malformed)?;

        if response.status == "1" {
            let fields = response
                .result
                .as_ref()
                .and_then(Value::as_object)
                .filter(|obj| !obj.is_empty());

            if let Some(fields) = fields {
                let safe = parse_price_field(fields.get("SafeGasPrice"))?;
                let fast = parse_price_field(fields.get("FastGasPrice"))?;
                return Ok(FeeEstimate::new(Chain::Ethereum, safe, fast));
            }
        }

        Err(classify_message(&response.message))
    }
}

/// Reads one numeric-as-string price field
fn parse_price_field(value: Option<&Value>) -> Result<f64, ParseError> {
    value
        .and_then(Value::as_str)
        .and_then(|raw| raw.parse::<f64>().ok())
        .ok_or(ParseError::Malformed)
}

/// Classifies an Etherscan error payload by its message text
///
/// The matching is a case-insensitive substring check, which is what the
/// API's free-form messages require.
fn classify_message(message: &str) -> ParseError {
    let message = message.to_lowercase();
    if message.contains("rate limit") {
        ParseError::RateLimited
    } else if message.contains("invalid") {
        ParseError::InvalidApiKey
    } else {
        ParseError::ApiError
    }
}

impl Default for EtherscanProvider {
    fn default() -> Self {
        Self::new().expect("Failed to create Etherscan provider")
    }
}

#[async_trait]
impl FeeProvider for EtherscanProvider {
    async fn fetch_fees(&self, api_key: &str) -> Result<FeeEstimate, FetchError> {
        let url = self.build_url(api_key);
        log::debug!("Fetching gas oracle from Etherscan");

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
            "ETH gas oracle - safe: {}, fast: {}",
            estimate.safe,
            estimate.fast
        );

        Ok(estimate)
    }

    fn chain(&self) -> Chain {
        Chain::Ethereum
    }

    fn provider_name(&self) -> &'static str {
        "etherscan"
    }
}
