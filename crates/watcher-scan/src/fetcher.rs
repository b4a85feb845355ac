use crate::client::ChainClient;
use std::sync::Arc;
use tracing::debug;
use watcher_core::types::{BlockRange, RawEvent};
use watcher_core::Result;

/// Retrieves the raw set of contract events for one block range. Performs no
/// filtering and no interpretation of event contents.
pub struct EventFetcher {
    client: Arc<dyn ChainClient>,
}

impl EventFetcher {
    pub fn new(client: Arc<dyn ChainClient>) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, range: BlockRange) -> Result<Vec<RawEvent>> {
        range.validate()?;

        let events = self.client.events_in_range(range).await?;

        debug!(
            from = range.from_block,
            to = range.to_block,
            count = events.len(),
            "Scan window fetched"
        );

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockChainClient;
    use watcher_core::WatcherError;

    #[tokio::test]
    async fn inverted_range_is_rejected_before_any_rpc() {
        let fetcher = EventFetcher::new(Arc::new(MockChainClient::default()));
        let err = fetcher.fetch(BlockRange::new(100, 50)).await.unwrap_err();
        assert!(matches!(err, WatcherError::InvalidRange { from: 100, to: 50 }));
    }

    #[tokio::test]
    async fn empty_range_yields_empty_sequence() {
        let fetcher = EventFetcher::new(Arc::new(MockChainClient::default()));
        let events = fetcher.fetch(BlockRange::new(50, 100)).await.unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn events_pass_through_unmodified() {
        let mut client = MockChainClient::default();
        client.push_event(watcher_core::events::EventKind::OrderFilled, Some(42), 60);
        client.push_event(
            watcher_core::events::EventKind::Other("OrderBid".to_string()),
            Some(42),
            61,
        );

        let fetcher = EventFetcher::new(Arc::new(client));
        let events = fetcher.fetch(BlockRange::new(50, 100)).await.unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].order_id, Some(42));
        assert_eq!(events[1].kind.to_string(), "OrderBid");
    }
}
