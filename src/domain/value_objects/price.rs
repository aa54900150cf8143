//! # Price Value Object
//!
//! Non-negative decimal price.
//!
//! This module provides the [`Price`] type, a type-safe wrapper around
//! [`Decimal`] for representing execution prices with validation.
//!
//! # Examples
//!
//! ```
//! use trade_query::domain::value_objects::price::Price;
//!
//! let price = Price::new(150.0).unwrap();
//! let higher = Price::new(800.0).unwrap();
//! assert!(price < higher);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A validated price value.
///
/// Represents a non-negative decimal price. Prices are compared, never
/// computed with, in the query surface; ordering is total.
///
/// # Invariants
///
/// - Price is always >= 0
///
/// # Examples
///
/// ```
/// use trade_query::domain::value_objects::price::Price;
///
/// // Create from f64
/// let price = Price::new(100.50).unwrap();
///
/// // Create from Decimal
/// use rust_decimal::Decimal;
/// let price = Price::from_decimal(Decimal::new(10050, 2)).unwrap();
///
/// // Zero price
/// let zero = Price::zero();
/// assert!(zero.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Zero price constant.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new price from an f64 value.
    ///
    /// # Arguments
    ///
    /// * `value` - The price value (must be non-negative)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the value is negative or not
    /// representable as a decimal.
    ///
    /// # Examples
    ///
    /// ```
    /// use trade_query::domain::value_objects::price::Price;
    ///
    /// let price = Price::new(100.50).unwrap();
    /// assert!(!price.is_zero());
    ///
    /// let invalid = Price::new(-10.0);
    /// assert!(invalid.is_err());
    /// ```
    #[must_use = "this returns a Result that should be handled"]
    pub fn new(value: f64) -> DomainResult<Self> {
        let decimal = Decimal::try_from(value)
            .map_err(|_| DomainError::InvalidPrice("not representable as decimal".to_string()))?;
        Self::from_decimal(decimal)
    }

    /// Creates a new price from a Decimal value.
    ///
    /// # Arguments
    ///
    /// * `value` - The decimal price value (must be non-negative)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the value is negative.
    #[must_use = "this returns a Result that should be handled"]
    pub fn from_decimal(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() {
            return Err(DomainError::InvalidPrice(
                "price cannot be negative".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Creates a zero price.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the inner Decimal value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }

    /// Returns true if the price is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s)
            .map_err(|_| DomainError::InvalidPrice(format!("invalid decimal: {s}")))?;
        Self::from_decimal(decimal)
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::ZERO
    }
}
