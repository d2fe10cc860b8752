//! Types for the chain fee tracker

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Monitored blockchain networks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Ethereum mainnet, fees from the Etherscan gas oracle
    #[default]
    Ethereum,
    /// Bitcoin mainnet, fees from Blocknative block prices
    Bitcoin,
}

impl Chain {
    /// Get the glyph prefixed to every status line for this chain
    pub fn glyph(&self) -> &'static str {
        match self {
            Chain::Ethereum => "Ξ",
            Chain::Bitcoin => "₿",
        }
    }

    /// Get the unit the fee estimates are quoted in
    pub fn unit(&self) -> &'static str {
        match self {
            Chain::Ethereum => "gwei",
            Chain::Bitcoin => "sat/vB",
        }
    }

    /// Get the name used in the persisted config file
    pub fn config_name(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ethereum",
            Chain::Bitcoin => "bitcoin",
        }
    }

    /// Get the human-readable chain name
    pub fn display_name(&self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Bitcoin => "Bitcoin",
        }
    }

    /// Get all monitorable chains
    pub fn all() -> &'static [Chain] {
        &[Chain::Ethereum, Chain::Bitcoin]
    }
}

/// Two confidence-tiered fee estimates from one successful poll
///
/// Ephemeral: rendered to a status line and discarded, no history is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeEstimate {
    /// Price expected to confirm at the safe (70% confidence) tier
    pub safe: f64,
    /// Price expected to confirm at the fast (99% confidence) tier
    pub fast: f64,
    /// Unit the prices are quoted in
    pub unit: &'static str,
}

impl FeeEstimate {
    /// Creates a fee estimate quoted in the chain's native unit
    pub fn new(chain: Chain, safe: f64, fast: f64) -> Self {
        Self {
            safe,
            fast,
            unit: chain.unit(),
        }
    }
}

/// Result of one poll cycle
pub type PollOutcome = Result<FeeEstimate, FetchError>;
