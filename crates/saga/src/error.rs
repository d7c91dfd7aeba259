//! Saga error types.

use domain::DomainError;
use thiserror::Error;

/// Terminal failure outcomes of a trip booking saga.
///
/// Gateway-level failures are translated into one of these kinds at the
/// orchestrator boundary; a raw gateway error never escapes uninterpreted.
/// Compensation failures are logged and swallowed — the reported error
/// always names the triggering failure.
#[derive(Debug, Error)]
pub enum BookingError {
    /// Malformed input, rejected before any gateway is contacted.
    #[error(transparent)]
    InvalidRequest(#[from] DomainError),

    /// Flight reservation rejected; nothing was committed, no compensation.
    #[error("flight unavailable: {reason}")]
    FlightUnavailable { reason: String },

    /// Hotel reservation rejected after the flight succeeded; the flight
    /// reservation was cancelled.
    #[error("hotel unavailable: {reason}")]
    HotelUnavailable { reason: String },

    /// Payment rejected after both reservations succeeded; hotel then
    /// flight were cancelled.
    #[error("payment failed: {reason}")]
    PaymentFailed { reason: String },
}

/// Convenience type alias for saga results.
pub type Result<T> = std::result::Result<T, BookingError>;
