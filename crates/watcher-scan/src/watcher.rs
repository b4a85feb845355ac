use crate::client::ChainClient;
use crate::fetcher::EventFetcher;
use crate::reconciler::Reconciler;
use crate::subscription::{subscription_form, FormField};
use alloy_primitives::Address;
use std::sync::Arc;
use tracing::info;
use watcher_core::types::{BlockRange, Notification};
use watcher_core::Result;

/// Host-facing lifecycle of the watcher: construction binds the chain client
/// (init), `subscription_form` describes the subscribe-time inputs, and
/// `on_blocks` is the scan entry point the host drives per block range.
pub struct TwapOrderWatcher {
    fetcher: EventFetcher,
    reconciler: Reconciler,
}

impl TwapOrderWatcher {
    pub const DISPLAY_NAME: &'static str = "TWAP All Events";
    pub const DESCRIPTION: &'static str = "Get notified for all events regarding your TWAP orders";

    pub fn new(client: Arc<dyn ChainClient>) -> Self {
        Self {
            fetcher: EventFetcher::new(client.clone()),
            reconciler: Reconciler::new(client),
        }
    }

    pub fn subscription_form(&self) -> Vec<FormField> {
        subscription_form()
    }

    /// One stateless scan: fetch all contract events in the range, then keep
    /// only those belonging to orders the watched address owns.
    pub async fn on_blocks(
        &self,
        range: BlockRange,
        watched: Address,
    ) -> Result<Vec<Notification>> {
        let events = self.fetcher.fetch(range).await?;
        let notifications = self.reconciler.reconcile(&events, watched).await?;

        info!(
            from = range.from_block,
            to = range.to_block,
            events = events.len(),
            notifications = notifications.len(),
            "Scan complete"
        );

        Ok(notifications)
    }
}
