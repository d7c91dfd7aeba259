//! The trip booking request value object.

use crate::error::DomainError;

/// Immutable, validated input for a trip booking saga.
///
/// Construction is the validation boundary: `TripRequest::new` rejects
/// blank identifiers and non-positive amounts, so any instance handed to
/// the orchestrator is known to be well-formed. No partially-valid
/// instance can exist.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    flight_id: String,
    hotel_id: String,
    user_id: String,
    amount: f64,
}

impl TripRequest {
    /// Creates a validated trip request.
    ///
    /// Fails with [`DomainError::BlankField`] if any identifier is empty or
    /// whitespace-only, and with [`DomainError::NonPositiveAmount`] if the
    /// amount is not a finite number strictly greater than zero.
    pub fn new(
        flight_id: impl Into<String>,
        hotel_id: impl Into<String>,
        user_id: impl Into<String>,
        amount: f64,
    ) -> Result<Self, DomainError> {
        let flight_id = non_blank(flight_id.into(), "flight_id")?;
        let hotel_id = non_blank(hotel_id.into(), "hotel_id")?;
        let user_id = non_blank(user_id.into(), "user_id")?;

        if !(amount.is_finite() && amount > 0.0) {
            return Err(DomainError::NonPositiveAmount { amount });
        }

        Ok(Self {
            flight_id,
            hotel_id,
            user_id,
            amount,
        })
    }

    /// The flight to reserve.
    pub fn flight_id(&self) -> &str {
        &self.flight_id
    }

    /// The hotel to reserve.
    pub fn hotel_id(&self) -> &str {
        &self.hotel_id
    }

    /// The user paying for the trip.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Total cost of the trip.
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

fn non_blank(value: String, field: &'static str) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        Err(DomainError::BlankField { field })
    } else {
        Ok(value)
    }
}
