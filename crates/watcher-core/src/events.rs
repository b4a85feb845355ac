use alloy_primitives::B256;
use alloy_sol_types::{sol, SolEvent};
use std::fmt;

sol! {
    /// Emitted once per partial fill of an order
    #[derive(Debug)]
    event OrderFilled(
        uint64 indexed id,
        address indexed taker,
        uint256 srcAmountIn,
        uint256 dstAmountOut
    );

    /// Emitted when the final chunk of an order has been executed
    #[derive(Debug)]
    event OrderCompleted(
        uint64 indexed id,
        address indexed exchange,
        address indexed taker
    );

    /// Emitted when a new order is submitted to the contract
    #[derive(Debug)]
    event OrderCreated(
        uint64 indexed id,
        address indexed maker,
        address exchange
    );

    /// Emitted when a taker bids to fill the next chunk
    #[derive(Debug)]
    event OrderBid(
        uint64 indexed id,
        address indexed taker,
        address exchange,
        uint32 slippagePercent,
        uint256 amount
    );

    /// Emitted when the maker cancels an order
    #[derive(Debug)]
    event OrderCanceled(
        uint64 indexed id,
        address indexed sender
    );
}

/// Kind of a contract log, as an open set: the two kinds with dedicated
/// notification wording are tagged, everything else carries its literal name
/// and flows through the generic wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    OrderCompleted,
    OrderFilled,
    Other(String),
}

impl EventKind {
    /// Map a log's topic0 to its event kind. Unknown signatures are kept,
    /// not dropped: they surface under their hex signature.
    pub fn from_topic0(topic0: B256) -> Self {
        match topic0 {
            t if t == OrderCompleted::SIGNATURE_HASH => Self::OrderCompleted,
            t if t == OrderFilled::SIGNATURE_HASH => Self::OrderFilled,
            t if t == OrderCreated::SIGNATURE_HASH => Self::Other("OrderCreated".to_string()),
            t if t == OrderBid::SIGNATURE_HASH => Self::Other("OrderBid".to_string()),
            t if t == OrderCanceled::SIGNATURE_HASH => Self::Other("OrderCanceled".to_string()),
            t => Self::Other(format!("{t}")),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrderCompleted => write!(f, "OrderCompleted"),
            Self::OrderFilled => write!(f, "OrderFilled"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_topics_map_to_their_kind() {
        assert_eq!(
            EventKind::from_topic0(OrderCompleted::SIGNATURE_HASH),
            EventKind::OrderCompleted
        );
        assert_eq!(
            EventKind::from_topic0(OrderFilled::SIGNATURE_HASH),
            EventKind::OrderFilled
        );
        assert_eq!(
            EventKind::from_topic0(OrderCanceled::SIGNATURE_HASH),
            EventKind::Other("OrderCanceled".to_string())
        );
    }

    #[test]
    fn unknown_topic_keeps_its_signature() {
        let topic = B256::repeat_byte(0xab);
        let kind = EventKind::from_topic0(topic);
        match &kind {
            EventKind::Other(name) => assert!(name.starts_with("0xab")),
            other => panic!("expected Other, got {other:?}"),
        }
        // Display must carry the literal name for the generic message arm
        assert_eq!(kind.to_string(), format!("{topic}"));
    }

    #[test]
    fn display_matches_contract_event_names() {
        assert_eq!(EventKind::OrderCompleted.to_string(), "OrderCompleted");
        assert_eq!(EventKind::OrderFilled.to_string(), "OrderFilled");
    }
}
