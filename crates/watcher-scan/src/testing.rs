//! In-memory chain client for tests.

use crate::client::ChainClient;
use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use watcher_core::events::EventKind;
use watcher_core::types::{Ask, BlockRange, Order, RawEvent};
use watcher_core::{Result, WatcherError};

#[derive(Default, Clone)]
pub struct MockChainClient {
    pub events: Vec<RawEvent>,
    orders: HashMap<u64, Order>,
    failing: HashSet<u64>,
}

impl MockChainClient {
    pub fn push_event(&mut self, kind: EventKind, order_id: Option<u64>, block: u64) {
        let log_index = self.events.len() as u64;
        self.events.push(RawEvent {
            kind,
            order_id,
            block_number: block,
            tx_hash: B256::repeat_byte(0x11),
            log_index,
        });
    }

    pub fn insert_order(&mut self, id: u64, maker: &str) {
        let maker = Address::from_str(maker).unwrap();
        self.orders.insert(
            id,
            Order {
                id,
                status: 1,
                ask: Some(Ask {
                    maker,
                    exchange: Address::ZERO,
                    src_token: Address::ZERO,
                    dst_token: Address::ZERO,
                    src_amount: U256::from(1_000u64),
                }),
            },
        );
    }

    pub fn fail_order_lookup(&mut self, id: u64) {
        self.failing.insert(id);
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn events_in_range(&self, range: BlockRange) -> Result<Vec<RawEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.block_number >= range.from_block && e.block_number <= range.to_block)
            .cloned()
            .collect())
    }

    async fn order(&self, order_id: u64) -> Result<Order> {
        if self.failing.contains(&order_id) {
            return Err(WatcherError::Rpc("order lookup failed".to_string()));
        }
        // Unknown ids behave like the contract: a zeroed record with no ask
        Ok(self.orders.get(&order_id).cloned().unwrap_or(Order {
            id: order_id,
            status: 0,
            ask: None,
        }))
    }
}
