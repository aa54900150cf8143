//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors represent failures surfaced to the transport boundary:
//! lookups that found nothing and parameters that failed validation.
//! Both are ordinary, typed outcomes, never panics.

use crate::domain::errors::DomainError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Trade not found.
    #[error("trade not found: {0}")]
    TradeNotFound(String),

    /// Request validation failed.
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Domain error.
    #[error("domain error: {0}")]
    DomainError(#[from] DomainError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a trade not found error.
    #[must_use]
    pub fn trade_not_found(trade_id: impl Into<String>) -> Self {
        Self::TradeNotFound(trade_id.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
