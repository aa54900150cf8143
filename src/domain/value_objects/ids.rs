//! # Identity Value Objects
//!
//! Type-safe identity wrappers for domain identifiers.
//!
//! This module provides newtype wrappers for the record identifiers,
//! ensuring type safety and preventing accidental mixing of different
//! ID types.
//!
//! ## String-based Identifiers
//!
//! - [`TradeId`] - Trade identifier
//! - [`InstrumentId`] - Instrument identifier (ISIN or ticker)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade identifier.
///
/// A string-based identifier for trade records. Uniqueness within a store
/// is a documented expectation, not an enforced invariant: lookups resolve
/// duplicates by returning the first record in store order.
///
/// # Examples
///
/// ```
/// use trade_query::domain::value_objects::ids::TradeId;
///
/// let trade_id = TradeId::new("T-001");
/// assert_eq!(trade_id.as_str(), "T-001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(String);

impl TradeId {
    /// Creates a new Trade ID from a string.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the trade ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the TradeId and returns the inner String.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TradeId {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TradeId {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for TradeId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Instrument identifier.
///
/// A string-based identifier for traded instruments (ISIN, ticker or
/// venue-specific symbol).
///
/// # Examples
///
/// ```
/// use trade_query::domain::value_objects::ids::InstrumentId;
///
/// let instrument_id = InstrumentId::new("AAPL");
/// assert_eq!(instrument_id.as_str(), "AAPL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(String);

impl InstrumentId {
    /// Creates a new Instrument ID from a string.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the instrument ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the InstrumentId and returns the inner String.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for InstrumentId {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for InstrumentId {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for InstrumentId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}
