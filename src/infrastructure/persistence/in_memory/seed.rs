//! # Demo Seed Data
//!
//! Mock trade records used to populate the store at startup when no
//! ingestion feed is wired in.

use crate::domain::entities::trade::{Trade, TradeDetails};
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{Price, Quantity, Side, Timestamp};

/// Returns the demo trade records, in seed order.
///
/// The dataset deliberately covers the query surface: multiple asset
/// classes, an unclassified record, a record with an unknown
/// counterparty, repeated traders and counterparties, and both sides.
///
/// # Errors
///
/// Returns a `DomainError` if a seed literal fails validation.
pub fn demo_trades() -> DomainResult<Vec<Trade>> {
    Ok(vec![
        Trade::builder(
            "1",
            "AAPL",
            "Apple Inc.",
            Timestamp::parse("2023-05-01T10:30")?,
            TradeDetails::new(Side::Buy, Price::new(150.0)?, Quantity::new(100)),
            "John Doe",
        )
        .asset_class("Equity")
        .counterparty("ABC Corp")
        .build(),
        Trade::builder(
            "2",
            "TSLA",
            "Tesla Inc.",
            Timestamp::parse("2023-05-02T09:45")?,
            TradeDetails::new(Side::Sell, Price::new(800.0)?, Quantity::new(50)),
            "Jane Smith",
        )
        .asset_class("Equity")
        .counterparty("XYZ Inc")
        .build(),
        Trade::builder(
            "3",
            "US10Y",
            "US Treasury 10Y",
            Timestamp::parse("2023-05-02T14:05")?,
            TradeDetails::new(Side::Buy, Price::new(98.25)?, Quantity::new(200)),
            "John Doe",
        )
        .asset_class("Bond")
        .counterparty("Global Markets")
        .build(),
        // Counterparty unknown at ingestion; normalized to empty
        Trade::builder(
            "4",
            "MSFT",
            "Microsoft Corp.",
            Timestamp::parse("2023-05-03T11:20")?,
            TradeDetails::new(Side::Buy, Price::new(310.5)?, Quantity::new(75)),
            "Alice Wong",
        )
        .asset_class("Equity")
        .build(),
        // Unclassified instrument
        Trade::builder(
            "5",
            "EURUSD",
            "Euro / US Dollar",
            Timestamp::parse("2023-05-04T08:15")?,
            TradeDetails::new(Side::Sell, Price::new(1.09)?, Quantity::new(1_000_000)),
            "Jane Smith",
        )
        .counterparty("ABC Corp")
        .build(),
        Trade::builder(
            "6",
            "GOOG",
            "Alphabet Inc.",
            Timestamp::parse("2023-05-05T16:40")?,
            TradeDetails::new(Side::Sell, Price::new(125.3)?, Quantity::new(40)),
            "Bob Tanaka",
        )
        .asset_class("Equity")
        .counterparty("DEF Partners")
        .build(),
    ])
}
