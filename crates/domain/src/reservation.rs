//! Outcome of an external reservation call.

use serde::{Deserialize, Serialize};

/// Result returned by a flight or hotel reservation gateway.
///
/// Rejection is an ordinary value here, not an error: every call site
/// must handle both variants, which keeps the orchestrator's
/// compensation logic exhaustive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReservationResult {
    /// The external system confirmed the reservation.
    Success {
        /// Booking reference issued by the external system.
        booking_id: String,
    },

    /// The external system rejected the reservation (sold out, outage).
    Failed {
        /// Human-readable rejection reason.
        reason: String,
    },
}

impl ReservationResult {
    /// Creates a successful result carrying a booking reference.
    ///
    /// # Panics
    ///
    /// Panics if `booking_id` is blank. A success without a booking
    /// reference is a gateway programming error, caught here rather than
    /// surfacing later as an un-cancellable reservation.
    pub fn success(booking_id: impl Into<String>) -> Self {
        let booking_id = booking_id.into();
        assert!(
            !booking_id.trim().is_empty(),
            "successful reservation must carry a booking id"
        );
        Self::Success { booking_id }
    }

    /// Creates a failed result with the given reason.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// Returns true if the reservation was confirmed.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the booking reference, if the reservation succeeded.
    pub fn booking_id(&self) -> Option<&str> {
        match self {
            Self::Success { booking_id } => Some(booking_id),
            Self::Failed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_booking_id() {
        let result = ReservationResult::success("BK-1");
        assert!(result.is_success());
        assert_eq!(result.booking_id(), Some("BK-1"));
    }

    #[test]
    fn test_failed_has_no_booking_id() {
        let result = ReservationResult::failed("sold out");
        assert!(!result.is_success());
        assert_eq!(result.booking_id(), None);
    }

    #[test]
    #[should_panic(expected = "must carry a booking id")]
    fn test_success_with_blank_id_panics() {
        let _ = ReservationResult::success("  ");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let results = vec![
            ReservationResult::success("BK-42"),
            ReservationResult::failed("simulated rejection"),
        ];
        for result in results {
            let json = serde_json::to_string(&result).unwrap();
            let deserialized: ReservationResult = serde_json::from_str(&json).unwrap();
            assert_eq!(result, deserialized);
        }
    }
}
