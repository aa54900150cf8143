//! # Domain Errors
//!
//! Typed domain error definitions.
//!
//! This module provides the [`DomainError`] enum for representing
//! domain-level errors with numeric error codes.
//!
//! # Error Code Ranges
//!
//! - **1000-1999**: Validation errors
//! - **2000-2999**: Lookup/state errors
//!
//! # Examples
//!
//! ```
//! use trade_query::domain::errors::DomainError;
//!
//! let error = DomainError::InvalidPrice("price cannot be negative".to_string());
//! assert_eq!(error.code(), 1001);
//! ```

use thiserror::Error;

/// Domain-level error with numeric error codes.
///
/// Provides typed errors for domain operations with consistent
/// error codes for logging and API responses.
///
/// # Error Code Ranges
///
/// | Range | Category |
/// |-------|----------|
/// | 1000-1999 | Validation errors |
/// | 2000-2999 | Lookup/state errors |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (1000-1999)
    // ========================================================================
    /// Invalid price value.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Invalid timestamp.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Invalid buy/sell indicator.
    #[error("invalid side: {0}")]
    InvalidSide(String),

    /// Generic validation error.
    #[error("validation error: {0}")]
    ValidationError(String),

    // ========================================================================
    // Lookup/State Errors (2000-2999)
    // ========================================================================
    /// Trade not found.
    #[error("trade not found: {0}")]
    TradeNotFound(String),
}

impl DomainError {
    /// Returns the numeric error code.
    ///
    /// # Examples
    ///
    /// ```
    /// use trade_query::domain::errors::DomainError;
    ///
    /// assert_eq!(DomainError::InvalidPrice("test".to_string()).code(), 1001);
    /// assert_eq!(DomainError::TradeNotFound("T-1".to_string()).code(), 2001);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            // Validation errors (1000-1999)
            Self::InvalidPrice(_) => 1001,
            Self::InvalidTimestamp(_) => 1002,
            Self::InvalidSide(_) => 1003,
            Self::ValidationError(_) => 1099,

            // Lookup/state errors (2000-2999)
            Self::TradeNotFound(_) => 2001,
        }
    }

    /// Returns the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.code() {
            1000..=1999 => "validation",
            2000..=2999 => "lookup",
            _ => "unknown",
        }
    }

    /// Returns true if this is a validation error.
    #[inline]
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self.code(), 1000..=1999)
    }

    /// Returns true if this is a lookup error.
    #[inline]
    #[must_use]
    pub const fn is_lookup_error(&self) -> bool {
        matches!(self.code(), 2000..=2999)
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
