//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`TradeId`], [`InstrumentId`]: string-based identifiers
//!
//! ## Numeric Types
//!
//! - [`Price`]: non-negative decimal price
//! - [`Quantity`]: whole-unit trade quantity
//!
//! ## Domain Enums
//!
//! - [`Side`]: buy/sell indicator
//!
//! ## Time
//!
//! - [`Timestamp`]: timezone-less execution timestamp

pub mod ids;
pub mod price;
pub mod quantity;
pub mod side;
pub mod timestamp;

pub use ids::{InstrumentId, TradeId};
pub use price::Price;
pub use quantity::Quantity;
pub use side::{ParseSideError, Side};
pub use timestamp::Timestamp;
