//! # Chain Fee Tracker SDK
//!
//! Polls confidence-tiered fee estimates for one chain at a time, either
//! Ethereum gas prices (gwei, Etherscan gas oracle) or Bitcoin next-block
//! fees (sat/vB, Blocknative block prices), and keeps a short status line
//! current, e.g. `Ξ S:12.50 F:30.10`. `S` is the safe (70% confidence)
//! estimate, `F` the fast (99%) one.
//!
//! The SDK owns the whole polling engine: URL construction, the fixed
//! 30-second fetch loop, chain-specific response decoding and the failure
//! taxonomy that turns every fetch or decode error into a distinct,
//! user-meaningful status. The embedding application only implements
//! [`StatusSink`] and forwards user actions (refresh, chain switch, API
//! key, auto-start) to the tracker.
//!
//! ## Usage
//!
//! ```no_run
//! use chain_fee_sdk::{Chain, ChainFeeTracker, ConfigStore, LogSink};
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let config = Arc::new(ConfigStore::open_default());
//! let tracker = ChainFeeTracker::new(config, Arc::new(LogSink));
//! tracker.start_background_task();
//!
//! // From the UI, later:
//! tracker.refresh_now();
//! tracker.switch_chain(Chain::Bitcoin).await.unwrap();
//! println!("{}", tracker.current_status().await);
//! # }
//! ```
//!
//! Failures never escape a poll cycle; they surface only as the status
//! line (`Ξ Timeout`, `₿ Rate Limited`, ...) and the next cycle starts
//! from a clean slate.

pub mod autostart;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod provider;
pub mod providers;
pub mod sink;
pub mod store;
pub mod tracker;
pub mod types;

// Re-export commonly used types
pub use config::ConfigStore;
pub use display::status_line;
pub use error::{AutostartError, ConfigError, FetchError, ParseError, TransportError};
pub use provider::FeeProvider;
pub use sink::{LogSink, StatusSink};
pub use store::StatusStore;
pub use tracker::ChainFeeTracker;
pub use types::{Chain, FeeEstimate, PollOutcome};
