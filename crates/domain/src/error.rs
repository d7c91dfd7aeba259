//! Domain error types.

use thiserror::Error;

/// Errors raised when constructing domain value objects.
///
/// These represent malformed input rejected before any external service
/// is contacted — the "invalid request" class of failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A required identifier field was blank.
    #[error("invalid request: {field} cannot be blank")]
    BlankField { field: &'static str },

    /// The trip amount was zero, negative, or not a finite number.
    #[error("invalid request: amount must be greater than zero, got {amount}")]
    NonPositiveAmount { amount: f64 },
}
