//! # Application Layer
//!
//! Query orchestration over the domain.
//!
//! ## Queries
//!
//! - [`TradeQueryEngine`]: lookup, search, filter and pagination
//! - [`TradeFilter`]: conjunctive filter criteria
//!
//! ## Errors
//!
//! - [`ApplicationError`]: typed failures for the transport boundary

pub mod error;
pub mod queries;

pub use error::{ApplicationError, ApplicationResult};
pub use queries::{TradeFilter, TradeQueryEngine};
