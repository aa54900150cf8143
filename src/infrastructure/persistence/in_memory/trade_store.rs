//! # In-Memory Trade Store
//!
//! In-memory implementation of [`TradeStore`].
//!
//! Records live in an insertion-ordered `Vec` built once at seed time.
//! The snapshot is immutable afterwards, so concurrent readers need no
//! locking; the store is shared as `Arc<dyn TradeStore>`.

use crate::domain::entities::trade::Trade;
use crate::infrastructure::persistence::traits::TradeStore;

/// In-memory implementation of [`TradeStore`].
///
/// Holds the seeded records in insertion order. `trade_id` uniqueness is
/// NOT enforced: duplicate IDs are kept as-is and lookups resolve them to
/// the first record in store order.
///
/// # Examples
///
/// ```
/// use trade_query::infrastructure::persistence::in_memory::InMemoryTradeStore;
/// use trade_query::infrastructure::persistence::traits::TradeStore;
///
/// let store = InMemoryTradeStore::empty();
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryTradeStore {
    trades: Vec<Trade>,
}

impl InMemoryTradeStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn empty() -> Self {
        Self { trades: Vec::new() }
    }

    /// Creates a store from seeded records, preserving their order.
    #[must_use]
    pub fn from_trades(trades: Vec<Trade>) -> Self {
        Self { trades }
    }
}

impl TradeStore for InMemoryTradeStore {
    fn list(&self) -> &[Trade] {
        &self.trades
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::trade::TradeDetails;
    use crate::domain::value_objects::{Price, Quantity, Side, Timestamp};

    fn test_trade(id: &str, instrument: &str) -> Trade {
        Trade::builder(
            id,
            instrument,
            format!("{instrument} Inc."),
            Timestamp::parse("2023-05-01T10:30").unwrap(),
            TradeDetails::new(Side::Buy, Price::new(100.0).unwrap(), Quantity::new(10)),
            "John Doe",
        )
        .build()
    }

    #[test]
    fn empty_store_has_no_records() {
        let store = InMemoryTradeStore::empty();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn from_trades_preserves_insertion_order() {
        let store = InMemoryTradeStore::from_trades(vec![
            test_trade("1", "AAPL"),
            test_trade("2", "TSLA"),
            test_trade("3", "MSFT"),
        ]);

        let ids: Vec<&str> = store
            .list()
            .iter()
            .map(|t| t.trade_id().as_str())
            .collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn len_counts_records() {
        let store =
            InMemoryTradeStore::from_trades(vec![test_trade("1", "AAPL"), test_trade("2", "TSLA")]);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }

    #[test]
    fn duplicate_trade_ids_are_kept() {
        let store =
            InMemoryTradeStore::from_trades(vec![test_trade("1", "AAPL"), test_trade("1", "TSLA")]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn repeated_list_calls_return_the_same_snapshot() {
        let store = InMemoryTradeStore::from_trades(vec![test_trade("1", "AAPL")]);
        assert_eq!(store.list(), store.list());
    }
}
