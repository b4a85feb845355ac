use crate::provider::ProviderManager;
use alloy::network::TransactionBuilder;
use alloy::rpc::types::{Filter, Log, TransactionRequest};
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{sol, SolCall};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use watcher_core::events::EventKind;
use watcher_core::types::{Ask, BlockRange, Order, RawEvent};
use watcher_core::{Result, WatcherError};

sol! {
    struct TwapAsk {
        address exchange;
        address maker;
        address srcToken;
        address dstToken;
        uint256 srcAmount;
    }

    struct TwapOrder {
        uint64 id;
        uint32 status;
        TwapAsk ask;
    }

    function order(uint64 id) external view returns (TwapOrder);
}

/// Capability surface onto the watched contract: log retrieval over a block
/// range and fresh per-order state reads.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// All contract logs emitted in the inclusive range, decoded but unfiltered
    async fn events_in_range(&self, range: BlockRange) -> Result<Vec<RawEvent>>;

    /// Current on-chain state of one order
    async fn order(&self, order_id: u64) -> Result<Order>;
}

/// Alloy-backed chain client bound to the TWAP contract address
pub struct RpcChainClient {
    provider: Arc<ProviderManager>,
    contract: Address,
}

impl RpcChainClient {
    pub fn new(provider: Arc<ProviderManager>, contract: Address) -> Self {
        Self { provider, contract }
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    async fn events_in_range(&self, range: BlockRange) -> Result<Vec<RawEvent>> {
        let filter = Filter::new()
            .address(self.contract)
            .from_block(range.from_block)
            .to_block(range.to_block);

        let logs = self
            .provider
            .http()
            .get_logs(&filter)
            .await
            .map_err(|e| WatcherError::Rpc(format!("{:?}", e)))?;

        if !logs.is_empty() {
            debug!(
                address = ?self.contract,
                from = range.from_block,
                to = range.to_block,
                count = logs.len(),
                "Fetched contract logs"
            );
        }

        Ok(logs.iter().map(decode_event).collect())
    }

    async fn order(&self, order_id: u64) -> Result<Order> {
        let calldata = Bytes::from(orderCall { id: order_id }.abi_encode());
        let tx = TransactionRequest::default()
            .with_to(self.contract)
            .with_input(calldata);

        let data = self
            .provider
            .http()
            .call(tx)
            .await
            .map_err(|e| WatcherError::Rpc(format!("{:?}", e)))?;

        let raw = orderCall::abi_decode_returns(&data)
            .map_err(|e| WatcherError::AbiDecode(e.to_string()))?;

        Ok(order_from_sol(raw))
    }
}

/// Decode a raw log into its kind and order id. Every order event of this
/// contract indexes the order id as the first topic; logs without a second
/// topic carry no order id.
fn decode_event(log: &Log) -> RawEvent {
    let topic0 = log.topic0().copied().unwrap_or_default();
    let order_id = log
        .topics()
        .get(1)
        .map(|t| U256::from_be_bytes(t.0).saturating_to::<u64>());

    RawEvent {
        kind: EventKind::from_topic0(topic0),
        order_id,
        block_number: log.block_number.unwrap_or_default(),
        tx_hash: log.transaction_hash.unwrap_or_default(),
        log_index: log.log_index.unwrap_or_default(),
    }
}

/// A zeroed maker means the contract returned an empty record: the order has
/// no ownership data yet.
fn order_from_sol(raw: TwapOrder) -> Order {
    let ask = if raw.ask.maker == Address::ZERO {
        None
    } else {
        Some(Ask {
            maker: raw.ask.maker,
            exchange: raw.ask.exchange,
            src_token: raw.ask.srcToken,
            dst_token: raw.ask.dstToken,
            src_amount: raw.ask.srcAmount,
        })
    };

    Order {
        id: raw.id,
        status: raw.status,
        ask,
    }
}
