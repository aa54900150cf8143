//! # Filter Criteria
//!
//! Multi-field filter criteria for trade queries.
//!
//! All criteria are optional; an omitted criterion imposes no constraint,
//! and supplied criteria combine with logical AND. A filter with no
//! criteria matches every record.
//!
//! # Examples
//!
//! ```
//! use trade_query::application::queries::TradeFilter;
//! use trade_query::domain::value_objects::{Price, Side};
//!
//! let filter = TradeFilter::new()
//!     .with_trade_type(Side::Buy)
//!     .with_min_price(Price::new(100.0).unwrap());
//! assert!(!filter.is_unconstrained());
//! ```

use crate::domain::entities::trade::Trade;
use crate::domain::value_objects::{Price, Side, Timestamp};

/// Optional criteria applied conjunctively to trade records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeFilter {
    /// Exact match against the asset class; unclassified records never match.
    asset_class: Option<String>,
    /// Inclusive lower bound on the execution time.
    start: Option<Timestamp>,
    /// Inclusive upper bound on the execution time.
    end: Option<Timestamp>,
    /// Inclusive lower bound on the execution price.
    min_price: Option<Price>,
    /// Inclusive upper bound on the execution price.
    max_price: Option<Price>,
    /// Exact match against the buy/sell indicator.
    trade_type: Option<Side>,
}

impl TradeFilter {
    /// Creates an unconstrained filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrains to an exact asset class.
    #[must_use]
    pub fn with_asset_class(mut self, asset_class: impl Into<String>) -> Self {
        self.asset_class = Some(asset_class.into());
        self
    }

    /// Constrains to executions at or after `start`.
    #[must_use]
    pub const fn with_start(mut self, start: Timestamp) -> Self {
        self.start = Some(start);
        self
    }

    /// Constrains to executions at or before `end`.
    #[must_use]
    pub const fn with_end(mut self, end: Timestamp) -> Self {
        self.end = Some(end);
        self
    }

    /// Constrains to prices at or above `min_price`.
    #[must_use]
    pub const fn with_min_price(mut self, min_price: Price) -> Self {
        self.min_price = Some(min_price);
        self
    }

    /// Constrains to prices at or below `max_price`.
    #[must_use]
    pub const fn with_max_price(mut self, max_price: Price) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Constrains to a buy/sell side.
    #[must_use]
    pub const fn with_trade_type(mut self, trade_type: Side) -> Self {
        self.trade_type = Some(trade_type);
        self
    }

    /// Returns true if no criterion is set.
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.asset_class.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.trade_type.is_none()
    }

    /// Returns true if the record satisfies every supplied criterion.
    #[must_use]
    pub fn matches(&self, trade: &Trade) -> bool {
        let details = trade.trade_details();

        self.asset_class
            .as_ref()
            .is_none_or(|a| trade.asset_class() == Some(a.as_str()))
            && self.start.is_none_or(|s| trade.trade_date_time() >= s)
            && self.end.is_none_or(|e| trade.trade_date_time() <= e)
            && self.min_price.is_none_or(|p| details.price() >= p)
            && self.max_price.is_none_or(|p| details.price() <= p)
            && self
                .trade_type
                .is_none_or(|t| details.buy_sell_indicator() == t)
    }
}
