//! Display boundary for status updates

/// Receives every committed status line
///
/// The embedding application implements this to render the status wherever
/// it lives (menu-bar title, TUI widget, log stream). Implementations must
/// return quickly; they are called from the poll loop.
pub trait StatusSink: Send + Sync {
    /// Called once per completed poll cycle with the new status line
    fn set_status(&self, status: &str);
}

/// Sink that writes status lines to the tracing log
///
/// Useful headless, or as a stand-in until a UI is attached.
#[derive(Debug, Default)]
pub struct LogSink;

impl StatusSink for LogSink {
    fn set_status(&self, status: &str) {
        tracing::info!(status = %status, "status updated");
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Sink that records every status line it receives
    #[derive(Default)]
    pub struct RecordingSink {
        statuses: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn statuses(&self) -> Vec<String> {
            self.statuses.lock().unwrap().clone()
        }

        pub fn last(&self) -> Option<String> {
            self.statuses.lock().unwrap().last().cloned()
        }
    }

    impl StatusSink for RecordingSink {
        fn set_status(&self, status: &str) {
            self.statuses.lock().unwrap().push(status.to_string());
        }
    }
}
