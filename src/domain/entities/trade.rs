//! # Trade Record
//!
//! Represents an executed trade held in the record store.
//!
//! This module provides the [`Trade`] entity together with the embedded
//! [`TradeDetails`] value describing the execution, and the
//! [`TradeBuilder`] used to construct canonical records.
//!
//! # Canonical Construction
//!
//! Optional string data is normalized exactly once, at construction:
//! an absent counterparty becomes the empty string rather than a null
//! that every search would have to guard against. The asset class stays
//! optional because an absent asset class carries meaning for filtering
//! (it never matches an asset-class criterion).
//!
//! # Examples
//!
//! ```
//! use trade_query::domain::entities::trade::{Trade, TradeDetails};
//! use trade_query::domain::value_objects::{Price, Quantity, Side, Timestamp};
//!
//! let trade = Trade::builder(
//!     "1",
//!     "AAPL",
//!     "Apple Inc.",
//!     Timestamp::parse("2023-05-01T10:30").unwrap(),
//!     TradeDetails::new(Side::Buy, Price::new(150.0).unwrap(), Quantity::new(100)),
//!     "John Doe",
//! )
//! .asset_class("Equity")
//! .counterparty("ABC Corp")
//! .build();
//!
//! assert_eq!(trade.trade_id().as_str(), "1");
//! assert_eq!(trade.counterparty(), "ABC Corp");
//! ```

use crate::domain::value_objects::{InstrumentId, Price, Quantity, Side, Timestamp, TradeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Execution details embedded in every trade record.
///
/// # Examples
///
/// ```
/// use trade_query::domain::entities::trade::TradeDetails;
/// use trade_query::domain::value_objects::{Price, Quantity, Side};
///
/// let details = TradeDetails::new(Side::Buy, Price::new(150.0).unwrap(), Quantity::new(100));
/// assert!(details.buy_sell_indicator().is_buy());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeDetails {
    /// Whether the reporting party bought or sold.
    buy_sell_indicator: Side,
    /// Execution price.
    price: Price,
    /// Amount of units traded.
    quantity: Quantity,
}

impl TradeDetails {
    /// Creates new trade details.
    #[inline]
    #[must_use]
    pub const fn new(buy_sell_indicator: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            buy_sell_indicator,
            price,
            quantity,
        }
    }

    /// Returns the buy/sell indicator.
    #[inline]
    #[must_use]
    pub const fn buy_sell_indicator(&self) -> Side {
        self.buy_sell_indicator
    }

    /// Returns the execution price.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the executed quantity.
    #[inline]
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }
}

/// An executed trade record.
///
/// Immutable once constructed; the record store never mutates entries
/// after seeding.
///
/// # Invariants
///
/// - `counterparty` is never null: absence is normalized to the empty
///   string by [`TradeBuilder::build`].
/// - `trade_id` uniqueness is an expectation of the data, not an enforced
///   invariant; lookups resolve duplicates by store order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Unique identifier for this trade.
    trade_id: TradeId,
    /// Asset class of the instrument traded, when classified.
    #[serde(default)]
    asset_class: Option<String>,
    /// Counterparty the trade was executed with; empty when unknown.
    #[serde(default)]
    counterparty: String,
    /// ISIN/ID of the instrument traded.
    instrument_id: InstrumentId,
    /// Name of the instrument traded.
    instrument_name: String,
    /// Date-time the trade was executed.
    trade_date_time: Timestamp,
    /// Details of the execution.
    trade_details: TradeDetails,
    /// Name of the trader.
    trader: String,
}

impl Trade {
    /// Starts building a trade from its required fields.
    ///
    /// Optional fields (asset class, counterparty) are supplied on the
    /// returned [`TradeBuilder`].
    #[must_use]
    pub fn builder(
        trade_id: impl Into<TradeId>,
        instrument_id: impl Into<InstrumentId>,
        instrument_name: impl Into<String>,
        trade_date_time: Timestamp,
        trade_details: TradeDetails,
        trader: impl Into<String>,
    ) -> TradeBuilder {
        TradeBuilder {
            trade_id: trade_id.into(),
            asset_class: None,
            counterparty: None,
            instrument_id: instrument_id.into(),
            instrument_name: instrument_name.into(),
            trade_date_time,
            trade_details,
            trader: trader.into(),
        }
    }

    // ========== Accessors ==========

    /// Returns the trade ID.
    #[inline]
    #[must_use]
    pub const fn trade_id(&self) -> &TradeId {
        &self.trade_id
    }

    /// Returns the asset class, if classified.
    #[inline]
    #[must_use]
    pub fn asset_class(&self) -> Option<&str> {
        self.asset_class.as_deref()
    }

    /// Returns the counterparty name; empty when unknown.
    #[inline]
    #[must_use]
    pub fn counterparty(&self) -> &str {
        &self.counterparty
    }

    /// Returns the instrument ID.
    #[inline]
    #[must_use]
    pub const fn instrument_id(&self) -> &InstrumentId {
        &self.instrument_id
    }

    /// Returns the instrument name.
    #[inline]
    #[must_use]
    pub fn instrument_name(&self) -> &str {
        &self.instrument_name
    }

    /// Returns when the trade was executed.
    #[inline]
    #[must_use]
    pub const fn trade_date_time(&self) -> Timestamp {
        self.trade_date_time
    }

    /// Returns the execution details.
    #[inline]
    #[must_use]
    pub const fn trade_details(&self) -> &TradeDetails {
        &self.trade_details
    }

    /// Returns the trader name.
    #[inline]
    #[must_use]
    pub fn trader(&self) -> &str {
        &self.trader
    }

    /// Returns the four fields designated for free-text search, in a
    /// fixed order: counterparty, instrument ID, instrument name, trader.
    ///
    /// Keeping the designation here keeps the matching semantics in one
    /// auditable place.
    #[must_use]
    pub fn searchable_fields(&self) -> [&str; 4] {
        [
            &self.counterparty,
            self.instrument_id.as_str(),
            &self.instrument_name,
            &self.trader,
        ]
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trade({} {} {} {} @ {})",
            self.trade_id,
            self.trade_details.buy_sell_indicator,
            self.trade_details.quantity,
            self.instrument_id,
            self.trade_details.price,
        )
    }
}

/// Builder for [`Trade`] records.
///
/// Required fields are taken by [`Trade::builder`]; optional fields are
/// supplied here. [`build`](Self::build) performs the canonical
/// normalization of absent optional strings.
#[derive(Debug, Clone)]
pub struct TradeBuilder {
    trade_id: TradeId,
    asset_class: Option<String>,
    counterparty: Option<String>,
    instrument_id: InstrumentId,
    instrument_name: String,
    trade_date_time: Timestamp,
    trade_details: TradeDetails,
    trader: String,
}

impl TradeBuilder {
    /// Sets the asset class.
    #[must_use]
    pub fn asset_class(mut self, asset_class: impl Into<String>) -> Self {
        self.asset_class = Some(asset_class.into());
        self
    }

    /// Sets the counterparty.
    #[must_use]
    pub fn counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = Some(counterparty.into());
        self
    }

    /// Builds the trade record.
    ///
    /// An absent counterparty is normalized to the empty string here so
    /// that no query path ever observes a null searchable field.
    #[must_use]
    pub fn build(self) -> Trade {
        Trade {
            trade_id: self.trade_id,
            asset_class: self.asset_class,
            counterparty: self.counterparty.unwrap_or_default(),
            instrument_id: self.instrument_id,
            instrument_name: self.instrument_name,
            trade_date_time: self.trade_date_time,
            trade_details: self.trade_details,
            trader: self.trader,
        }
    }
}
