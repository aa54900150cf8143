//! # Trade Query Engine
//!
//! The query operations exposed over the record store: exact lookup,
//! free-text search, multi-field filtering and offset pagination.
//!
//! Every operation is a pure, synchronous function of the store snapshot
//! and its parameters. Results always preserve store order; nothing here
//! re-sorts, mutates or caches. Because the snapshot is immutable for the
//! process lifetime, any number of callers may query concurrently without
//! coordination.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use trade_query::application::queries::{TradeFilter, TradeQueryEngine};
//! use trade_query::infrastructure::persistence::in_memory::{demo_trades, InMemoryTradeStore};
//!
//! let store = InMemoryTradeStore::from_trades(demo_trades().unwrap());
//! let engine = TradeQueryEngine::new(Arc::new(store));
//!
//! assert!(engine.get_by_id("1").is_some());
//! assert!(engine.get_by_id("missing").is_none());
//! ```

use crate::application::queries::filter::TradeFilter;
use crate::domain::entities::trade::Trade;
use crate::infrastructure::persistence::traits::TradeStore;
use std::sync::Arc;

/// Lower-case fold used for case-insensitive matching.
///
/// The single canonicalization point for search: the term is folded once
/// per query, each candidate field once per record.
fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Stateless query operations over a shared record store snapshot.
#[derive(Debug, Clone)]
pub struct TradeQueryEngine {
    store: Arc<dyn TradeStore>,
}

impl TradeQueryEngine {
    /// Creates an engine over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn TradeStore>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &dyn TradeStore {
        self.store.as_ref()
    }

    /// Looks up a trade by its exact, case-sensitive ID.
    ///
    /// Scans in store order and returns the first match; `None` is the
    /// normal outcome for an absent ID, not a fault. Duplicate IDs (the
    /// store does not enforce uniqueness) resolve to the earliest record.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Trade> {
        self.store
            .list()
            .iter()
            .find(|trade| trade.trade_id().as_str() == id)
    }

    /// Searches for `term` as a case-insensitive substring of any of the
    /// four searchable fields (counterparty, instrument ID, instrument
    /// name, trader).
    ///
    /// An empty term matches every record. Results preserve store order.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Trade> {
        let needle = fold(term);

        self.store
            .list()
            .iter()
            .filter(|trade| {
                trade
                    .searchable_fields()
                    .iter()
                    .any(|field| fold(field).contains(&needle))
            })
            .collect()
    }

    /// Returns the records satisfying every supplied criterion of
    /// `criteria`, in store order.
    ///
    /// An unconstrained filter returns the full store.
    #[must_use]
    pub fn filter(&self, criteria: &TradeFilter) -> Vec<&Trade> {
        self.store
            .list()
            .iter()
            .filter(|trade| criteria.matches(trade))
            .collect()
    }

    /// Returns the page `[(page-1)*size, (page-1)*size + size)` of the
    /// full store, clamped to the store length.
    ///
    /// A page starting beyond the end of the store yields an empty slice.
    /// Parameters are assumed boundary-validated (`page >= 1`,
    /// `size` in `[1, 100]`); no re-validation happens here.
    #[must_use]
    pub fn paginate(&self, page: u32, size: u32) -> &[Trade] {
        let trades = self.store.list();
        let size = size as usize;
        let start = (page as usize).saturating_sub(1).saturating_mul(size);

        if start >= trades.len() {
            return &[];
        }
        let end = start.saturating_add(size).min(trades.len());
        &trades[start..end]
    }
}
