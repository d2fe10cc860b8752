//! Provider abstraction for fetching fee estimates from remote APIs

use crate::{
    error::FetchError,
    types::{Chain, FeeEstimate},
};
use async_trait::async_trait;

/// Trait for chain fee providers
///
/// Implementations fetch confidence-tiered fee estimates from a single
/// remote source (Etherscan, Blocknative, ...). One fetch is one HTTP
/// round trip; retrying is the next poll cycle's job, not the provider's.
#[async_trait]
pub trait FeeProvider: Send + Sync {
    /// Fetches the current safe/fast fee estimates
    ///
    /// # Arguments
    /// * `api_key` - Static key appended to the request when the source
    ///   accepts one; providers that take no key ignore it. Empty means
    ///   unset.
    ///
    /// # Returns
    /// The fee estimates, or a classified error describing exactly how
    /// the fetch or decode failed
    async fn fetch_fees(&self, api_key: &str) -> Result<FeeEstimate, FetchError>;

    /// The chain this provider serves
    fn chain(&self) -> Chain;

    /// Returns the name of this provider
    fn provider_name(&self) -> &'static str;
}
