//! # Trade Query Service
//!
//! Read-oriented query service over a collection of trade records:
//! lookup by identifier, free-text search, multi-field filtering and
//! paginated listing.
//!
//! ## Architecture
//!
//! This crate follows Domain-Driven Design with a layered architecture:
//!
//! - **Domain Layer** (`domain`): the trade record, value objects and domain errors
//! - **Application Layer** (`application`): the query engine and filter criteria
//! - **Infrastructure Layer** (`infrastructure`): the immutable in-memory record store
//! - **API Layer** (`api`): the REST interface
//!
//! The record store is seeded once at process start and is read-only
//! thereafter; every query operation is a pure function over that
//! snapshot, safe under concurrent readers.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use trade_query::application::queries::{TradeFilter, TradeQueryEngine};
//! use trade_query::domain::value_objects::Side;
//! use trade_query::infrastructure::persistence::in_memory::{demo_trades, InMemoryTradeStore};
//!
//! let store = InMemoryTradeStore::from_trades(demo_trades().unwrap());
//! let engine = TradeQueryEngine::new(Arc::new(store));
//!
//! let buys = engine.filter(&TradeFilter::new().with_trade_type(Side::Buy));
//! assert!(buys.iter().all(|t| t.trade_details().buy_sell_indicator().is_buy()));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
