//! Chain fee tracker service
//!
//! Owns the poll loop: snapshots the config, fetches from the provider for
//! the selected chain, renders the outcome and publishes it to the store
//! and the display sink.

use crate::{
    config::ConfigStore,
    constants::{LOADING_STATUS, POLL_INTERVAL_SECS},
    display::status_line,
    error::ConfigError,
    provider::FeeProvider,
    providers::{BlocknativeProvider, EtherscanProvider},
    sink::StatusSink,
    store::StatusStore,
    types::{Chain, PollOutcome},
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::{interval, MissedTickBehavior};

/// One provider per chain, built once at startup
#[derive(Clone)]
struct ProviderSet {
    ethereum: Arc<dyn FeeProvider>,
    bitcoin: Arc<dyn FeeProvider>,
}

impl ProviderSet {
    fn for_chain(&self, chain: Chain) -> &Arc<dyn FeeProvider> {
        match chain {
            Chain::Ethereum => &self.ethereum,
            Chain::Bitcoin => &self.bitcoin,
        }
    }
}

/// Chain fee tracker
///
/// Polls the selected chain's fee API on a fixed interval and keeps the
/// latest status line available. User actions (refresh, chain switch, API
/// key changes) go through the methods here; they signal the background
/// task instead of racing it, so there is a single status writer.
///
/// # Example
/// ```no_run
/// use chain_fee_sdk::{ChainFeeTracker, ConfigStore, LogSink};
/// use std::sync::Arc;
///
/// # async fn example() {
/// let config = Arc::new(ConfigStore::open_default());
/// let tracker = ChainFeeTracker::new(config, Arc::new(LogSink));
/// tracker.start_background_task();
///
/// // later, from the UI:
/// tracker.refresh_now();
/// println!("{}", tracker.current_status().await);
/// # }
/// ```
pub struct ChainFeeTracker {
    store: Arc<StatusStore>,
    config: Arc<ConfigStore>,
    sink: Arc<dyn StatusSink>,
    providers: ProviderSet,
    refresh: Arc<Notify>,
}

impl ChainFeeTracker {
    /// Creates a tracker with the default Etherscan and Blocknative providers
    pub fn new(config: Arc<ConfigStore>, sink: Arc<dyn StatusSink>) -> Self {
        Self::with_providers(
            config,
            sink,
            Arc::new(EtherscanProvider::default()),
            Arc::new(BlocknativeProvider::default()),
        )
    }

    /// Creates a tracker with custom providers
    ///
    /// This is primarily for testing with mock providers.
    pub fn with_providers(
        config: Arc<ConfigStore>,
        sink: Arc<dyn StatusSink>,
        ethereum: Arc<dyn FeeProvider>,
        bitcoin: Arc<dyn FeeProvider>,
    ) -> Self {
        Self {
            store: Arc::new(StatusStore::new()),
            config,
            sink,
            providers: ProviderSet { ethereum, bitcoin },
            refresh: Arc::new(Notify::new()),
        }
    }

    /// Starts the background polling task
    ///
    /// The first cycle runs immediately, then one cycle per interval tick.
    /// A manual-refresh signal wakes the task early without shifting the
    /// tick cadence; signals arriving while a cycle is in flight coalesce
    /// into at most one extra cycle.
    pub fn start_background_task(&self) {
        let store = self.store.clone();
        let config = self.config.clone();
        let sink = self.sink.clone();
        let providers = self.providers.clone();
        let refresh = self.refresh.clone();

        tokio::spawn(async move {
            tracing::info!(
                poll_interval_secs = POLL_INTERVAL_SECS,
                "Starting chain fee tracker background task"
            );

            let mut ticker = interval(Duration::from_secs(POLL_INTERVAL_SECS));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = refresh.notified() => {}
                }

                Self::run_cycle(&providers, &config, &store, sink.as_ref()).await;
            }
        });
    }

    /// Runs one poll cycle: snapshot config, fetch, render, publish
    async fn run_cycle(
        providers: &ProviderSet,
        config: &ConfigStore,
        store: &StatusStore,
        sink: &dyn StatusSink,
    ) {
        // The snapshot binds this cycle's chain and key; a switch landing
        // mid-cycle takes effect on the next one.
        let (chain, api_key) = config.snapshot().await;
        let provider = providers.for_chain(chain);

        tracing::debug!(
            chain = chain.config_name(),
            provider = provider.provider_name(),
            "Polling fee estimates"
        );

        let outcome: PollOutcome = provider.fetch_fees(&api_key).await;

        match &outcome {
            Ok(est) => tracing::debug!(
                chain = chain.config_name(),
                safe = est.safe,
                fast = est.fast,
                unit = est.unit,
                "Fetched fee estimates"
            ),
            Err(err) => tracing::warn!(
                chain = chain.config_name(),
                error = %err,
                "Fee poll failed"
            ),
        }

        let status = status_line(chain, &outcome);
        store.set(status.clone()).await;
        sink.set_status(&status);
    }

    /// Runs one cycle inline, outside the background schedule
    ///
    /// Useful at startup before the task is spawned, and in tests.
    pub async fn poll_once(&self) {
        Self::run_cycle(&self.providers, &self.config, &self.store, self.sink.as_ref()).await;
    }

    /// Requests an immediate poll
    ///
    /// Signals are coalesced: many requests during one in-flight cycle
    /// produce a single extra cycle.
    pub fn refresh_now(&self) {
        self.refresh.notify_one();
    }

    /// Switches the monitored chain
    ///
    /// No-op when the chain is already selected. Otherwise persists the
    /// selection, shows the loading placeholder and requests an immediate
    /// poll. The in-flight cycle, if any, still publishes under the chain
    /// it snapshotted.
    pub async fn switch_chain(&self, chain: Chain) -> Result<(), ConfigError> {
        if self.config.chain().await == chain {
            return Ok(());
        }

        self.config.set_chain(chain).await?;
        tracing::info!(chain = chain.config_name(), "Switched chain");

        self.store.set(LOADING_STATUS.to_string()).await;
        self.sink.set_status(LOADING_STATUS);
        self.refresh.notify_one();
        Ok(())
    }

    /// Stores a new API key (trimmed; empty clears it) and requests a poll
    pub async fn set_api_key(&self, api_key: &str) -> Result<(), ConfigError> {
        self.config.set_api_key(api_key.trim().to_string()).await?;
        self.refresh.notify_one();
        Ok(())
    }

    /// Flips the persisted auto-start flag, returning the new state
    ///
    /// Login-item registration itself is the embedding app's job (it knows
    /// its bundle path); see the `autostart` module.
    pub async fn toggle_auto_start(&self) -> Result<bool, ConfigError> {
        let enabled = !self.config.auto_start().await;
        self.config.set_auto_start(enabled).await?;
        Ok(enabled)
    }

    /// Latest committed status line
    pub async fn current_status(&self) -> String {
        self.store.get().await
    }

    /// When a status was last published, if ever
    pub async fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.store.last_updated().await
    }

    /// Currently selected chain
    pub async fn chain(&self) -> Chain {
        self.config.chain().await
    }

    /// Whether an API key is configured
    pub async fn has_api_key(&self) -> bool {
        !self.config.api_key().await.is_empty()
    }

    /// Whether auto-start is enabled
    pub async fn auto_start(&self) -> bool {
        self.config.auto_start().await
    }
}
