//! Constants for the chain fee tracker
//!
//! All compile-time configuration for the polling engine is centralized here.
//! Runtime state (selected chain, API key, auto-start flag) lives in the
//! persisted config file instead.

/// How often the background task polls the fee API (in seconds)
pub const POLL_INTERVAL_SECS: u64 = 30;

/// HTTP request timeout when fetching fee estimates (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Etherscan v2 API base URL (gas oracle)
pub const ETHERSCAN_API_URL: &str = "https://api.etherscan.io/v2/api";

/// Blocknative gas platform base URL (block prices)
pub const BLOCKNATIVE_API_URL: &str = "https://api.blocknative.com/gasprices/blockprices";

/// Confidence tier treated as the safe estimate
pub const SAFE_CONFIDENCE: u32 = 70;

/// Confidence tier treated as the fast estimate
pub const FAST_CONFIDENCE: u32 = 99;

/// Placeholder shown until the first cycle completes
pub const LOADING_STATUS: &str = "Loading...";

/// User agent for HTTP requests
pub const USER_AGENT: &str = "chain-fee-sdk/0.1.0";
