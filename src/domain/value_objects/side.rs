//! # Trade Side
//!
//! Buy/sell indicator for executed trades.
//!
//! This module provides the [`Side`] enum carried in the trade details of
//! every record. The wire form is `"BUY"` / `"SELL"`.
//!
//! # Examples
//!
//! ```
//! use trade_query::domain::value_objects::side::Side;
//!
//! let side: Side = "BUY".parse().unwrap();
//! assert!(side.is_buy());
//! assert_eq!(side.to_string(), "BUY");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Buy/sell indicator.
///
/// # Examples
///
/// ```
/// use trade_query::domain::value_objects::side::Side;
///
/// assert_eq!(Side::Buy.as_str(), "BUY");
/// assert_eq!(Side::Sell.as_str(), "SELL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    /// The reporting party bought the instrument.
    Buy,
    /// The reporting party sold the instrument.
    Sell,
}

impl Side {
    /// Returns the canonical string form (`"BUY"` / `"SELL"`).
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }

    /// Returns true if this is the buy side.
    #[inline]
    #[must_use]
    pub const fn is_buy(&self) -> bool {
        matches!(self, Self::Buy)
    }

    /// Returns true if this is the sell side.
    #[inline]
    #[must_use]
    pub const fn is_sell(&self) -> bool {
        matches!(self, Self::Sell)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an invalid side string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSideError(pub String);

impl fmt::Display for ParseSideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid side: {} (expected BUY or SELL)", self.0)
    }
}

impl std::error::Error for ParseSideError {}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            other => Err(ParseSideError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn as_str_matches_wire_form() {
        assert_eq!(Side::Buy.as_str(), "BUY");
        assert_eq!(Side::Sell.as_str(), "SELL");
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Side::Buy.to_string(), "BUY");
        assert_eq!(Side::Sell.to_string(), "SELL");
    }

    #[test]
    fn from_str_parses_canonical_forms() {
        assert_eq!("BUY".parse::<Side>().unwrap(), Side::Buy);
        assert_eq!("SELL".parse::<Side>().unwrap(), Side::Sell);
    }

    #[test]
    fn from_str_rejects_other_casing() {
        assert!("buy".parse::<Side>().is_err());
        assert!("Sell".parse::<Side>().is_err());
        assert!("HOLD".parse::<Side>().is_err());
    }

    #[test]
    fn predicates() {
        assert!(Side::Buy.is_buy());
        assert!(!Side::Buy.is_sell());
        assert!(Side::Sell.is_sell());
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"SELL\"");

        let side: Side = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(side, Side::Sell);
    }

    #[test]
    fn parse_error_names_the_input() {
        let err = "HOLD".parse::<Side>().unwrap_err();
        assert!(err.to_string().contains("HOLD"));
    }
}
