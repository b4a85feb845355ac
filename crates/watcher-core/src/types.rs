use crate::error::{Result, WatcherError};
use crate::events::EventKind;
use alloy_primitives::{Address, B256, U256};
use serde::Serialize;

/// Prefix for notification unique ids. Stable across scans so the host can
/// collapse repeated deliveries for the same order.
pub const UNIQUE_ID_PREFIX: &str = "order-all-";

/// Inclusive range of already-mined blocks to scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub from_block: u64,
    pub to_block: u64,
}

impl BlockRange {
    pub fn new(from_block: u64, to_block: u64) -> Self {
        Self {
            from_block,
            to_block,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.from_block > self.to_block {
            return Err(WatcherError::InvalidRange {
                from: self.from_block,
                to: self.to_block,
            });
        }
        Ok(())
    }
}

/// One decoded contract log. `order_id` is `None` for logs that carry no
/// order identifier; block/tx metadata is carried for logging only.
#[derive(Debug, Clone)]
pub struct RawEvent {
    pub kind: EventKind,
    pub order_id: Option<u64>,
    pub block_number: u64,
    pub tx_hash: B256,
    pub log_index: u64,
}

/// Ask side of an order as stored on chain. The maker is the ownership
/// criterion for notification relevance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ask {
    pub maker: Address,
    pub exchange: Address,
    pub src_token: Address,
    pub dst_token: Address,
    pub src_amount: U256,
}

/// Current on-chain state of a TWAP order, read fresh per event. `ask` is
/// `None` when the contract returns a zeroed record (order not yet indexed
/// or in an inconsistent state).
#[derive(Debug, Clone)]
pub struct Order {
    pub id: u64,
    pub status: u32,
    pub ask: Option<Ask>,
}

/// One notification ready for delivery to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    #[serde(rename = "uniqueId")]
    pub unique_id: String,
    pub notification: String,
}

impl Notification {
    pub fn for_order(order_id: u64, message: String) -> Self {
        Self {
            unique_id: format!("{UNIQUE_ID_PREFIX}{order_id}"),
            notification: message,
        }
    }
}
