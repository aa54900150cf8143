//! # Domain Entities
//!
//! The trade record and its embedded execution details.

pub mod trade;

pub use trade::{Trade, TradeBuilder, TradeDetails};
