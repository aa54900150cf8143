//! # Quantity Value Object
//!
//! Whole-unit trade quantity.
//!
//! This module provides the [`Quantity`] type, a wrapper around `u64`
//! representing the number of units traded. Non-negativity holds by
//! construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole-unit quantity.
///
/// # Examples
///
/// ```
/// use trade_query::domain::value_objects::quantity::Quantity;
///
/// let quantity = Quantity::new(100);
/// assert_eq!(quantity.get(), 100);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// Zero quantity constant.
    pub const ZERO: Self = Self(0);

    /// Creates a new quantity.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the inner value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns true if the quantity is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Quantity {
    #[inline]
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Quantity> for u64 {
    #[inline]
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}
