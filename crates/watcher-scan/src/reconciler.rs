use crate::client::ChainClient;
use alloy_primitives::Address;
use std::sync::Arc;
use tracing::{debug, trace};
use watcher_core::events::EventKind;
use watcher_core::types::{Notification, RawEvent};
use watcher_core::Result;

/// Resolves each event to its parent order via a fresh chain read, keeps only
/// orders owned by the watched address, and maps them to notifications.
pub struct Reconciler {
    client: Arc<dyn ChainClient>,
}

impl Reconciler {
    pub fn new(client: Arc<dyn ChainClient>) -> Self {
        Self { client }
    }

    /// One notification per qualifying event, input order preserved. A failed
    /// order lookup aborts the whole batch; no partial result is returned.
    pub async fn reconcile(
        &self,
        events: &[RawEvent],
        watched: Address,
    ) -> Result<Vec<Notification>> {
        let mut notifications = Vec::new();

        for event in events {
            let Some(order_id) = event.order_id else {
                trace!(
                    kind = %event.kind,
                    block = event.block_number,
                    "Log carries no order id, skipping"
                );
                continue;
            };

            // Always re-read: order state may have changed since the event's block
            let order = self.client.order(order_id).await?;

            let Some(ask) = &order.ask else {
                trace!(order_id, "Order has no ownership data, skipping");
                continue;
            };

            if ask.maker != watched {
                continue;
            }

            debug!(
                order_id = order.id,
                kind = %event.kind,
                block = event.block_number,
                tx = ?event.tx_hash,
                "Owned order event"
            );

            notifications.push(Notification::for_order(
                order.id,
                message_for(&event.kind, order.id),
            ));
        }

        Ok(notifications)
    }
}

/// Notification wording per event kind. Total by construction: kinds without
/// dedicated wording fall through to the generic arm under their literal name.
fn message_for(kind: &EventKind, order_id: u64) -> String {
    match kind {
        EventKind::OrderCompleted => format!("Your TWAP order {order_id} is complete!"),
        EventKind::OrderFilled => format!("A trade of your TWAP order {order_id} is filled!"),
        EventKind::Other(name) => format!("Your TWAP order {order_id} is {name}!"),
    }
}
