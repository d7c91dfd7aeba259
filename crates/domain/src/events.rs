//! Domain events published by the booking saga.

use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

/// Trait for domain events with a stable type name.
pub trait DomainEvent {
    /// Returns the event type name used in logs and serialized envelopes.
    fn event_type(&self) -> &'static str;
}

/// Published when a trip is fully booked and paid for.
///
/// Emitted exactly once per successful saga run, after the payment charge —
/// the point past which no compensation is possible. There is no
/// compensating event for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmedEvent {
    /// Newly generated identifier for the confirmed order.
    pub booking_id: OrderId,
    /// The user who booked the trip.
    pub user_id: String,
    /// The flight that was reserved.
    pub flight_id: String,
    /// The hotel that was reserved.
    pub hotel_id: String,
    /// When the booking was confirmed.
    pub confirmed_at: DateTime<Utc>,
}

impl BookingConfirmedEvent {
    /// Creates a confirmation event for the given order and trip details.
    pub fn new(
        booking_id: OrderId,
        user_id: impl Into<String>,
        flight_id: impl Into<String>,
        hotel_id: impl Into<String>,
    ) -> Self {
        Self {
            booking_id,
            user_id: user_id.into(),
            flight_id: flight_id.into(),
            hotel_id: hotel_id.into(),
            confirmed_at: Utc::now(),
        }
    }
}

impl DomainEvent for BookingConfirmedEvent {
    fn event_type(&self) -> &'static str {
        "BookingConfirmed"
    }
}
