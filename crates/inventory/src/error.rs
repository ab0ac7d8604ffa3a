//! Domain error model.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// invariants, conflicts). Transport concerns belong in the delivery layer.
///
/// Errors that reject a change carry the last-known-valid value where the
/// caller needs it, so no follow-up read is required to learn the effective
/// state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A value failed validation (empty name, negative quantity or rate).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced product does not exist in the collection.
    #[error("product not found")]
    NotFound,

    /// A product with the same name already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// An outbound movement would drive the on-hand quantity negative.
    /// Carries the current (unchanged) quantity.
    #[error("insufficient quantity: only {available} available")]
    InsufficientQuantity { available: i64 },

    /// A price update was negative. Carries the current (unchanged) price.
    #[error("price cannot be negative; current price is {current}")]
    InvalidPrice { current: Decimal },

    /// A derived total exceeded the representable decimal range.
    #[error("total value exceeds the representable numeric range")]
    Overflow,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
