//! Gateway traits for the external services the saga coordinates, plus
//! in-memory simulated implementations for development and testing.

pub mod flight;
pub mod hotel;
pub mod payment;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use domain::ReservationResult;
use thiserror::Error;

pub use flight::InMemoryFlightGateway;
pub use hotel::InMemoryHotelGateway;
pub use payment::{InMemoryPaymentGateway, PaymentError};

/// Default prefix marking an identifier as a guaranteed rejection in the
/// simulated gateways (case-insensitive).
pub const DEFAULT_FAIL_PREFIX: &str = "FAIL";

/// Default charge ceiling above which the simulated payment gateway
/// declines with insufficient funds.
pub const DEFAULT_MAX_CHARGE: f64 = 10_000.0;

/// Transport-level failure from a gateway call.
#[derive(Debug, Clone, Error)]
#[error("gateway unavailable: {0}")]
pub struct GatewayError(pub String);

/// Reserves and cancels flights against an external system.
#[async_trait]
pub trait FlightGateway: Send + Sync {
    /// Requests a flight reservation. Rejection is returned as a value.
    async fn reserve(&self, flight_id: &str) -> ReservationResult;

    /// Cancels a previously made reservation. Cancelling an unknown
    /// booking id is a no-op, not an error.
    async fn cancel(&self, booking_id: &str) -> Result<(), GatewayError>;
}

/// Reserves and cancels hotels against an external system.
#[async_trait]
pub trait HotelGateway: Send + Sync {
    /// Requests a hotel reservation. Rejection is returned as a value.
    async fn reserve(&self, hotel_id: &str) -> ReservationResult;

    /// Cancels a previously made reservation. Cancelling an unknown
    /// booking id is a no-op, not an error.
    async fn cancel(&self, booking_id: &str) -> Result<(), GatewayError>;
}

/// Charges a user for a trip. There is no refund in this design: the
/// charge is the saga's last, irreversible step.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charges the user the given amount.
    async fn charge(&self, user_id: &str, amount: f64) -> Result<(), PaymentError>;
}

/// Business rules for the simulated reservation gateways.
#[derive(Debug, Clone)]
pub struct ReservationPolicy {
    /// Identifiers starting with this prefix (case-insensitive) are
    /// rejected.
    pub fail_prefix: String,
}

impl ReservationPolicy {
    /// Returns true if the given identifier must be rejected.
    pub fn rejects(&self, id: &str) -> bool {
        id.to_uppercase().starts_with(&self.fail_prefix.to_uppercase())
    }
}

impl Default for ReservationPolicy {
    fn default() -> Self {
        Self {
            fail_prefix: DEFAULT_FAIL_PREFIX.to_string(),
        }
    }
}

/// Business rules for the simulated payment gateway.
#[derive(Debug, Clone)]
pub struct PaymentPolicy {
    /// Charges above this amount are declined (insufficient funds).
    pub max_charge: f64,
    /// Users whose id starts with this prefix (case-insensitive) are
    /// blocked by the risk check.
    pub blocked_user_prefix: String,
}

impl PaymentPolicy {
    /// Returns true if the given user is blocked by the risk check.
    pub fn blocks_user(&self, user_id: &str) -> bool {
        user_id
            .to_uppercase()
            .starts_with(&self.blocked_user_prefix.to_uppercase())
    }
}

impl Default for PaymentPolicy {
    fn default() -> Self {
        Self {
            max_charge: DEFAULT_MAX_CHARGE,
            blocked_user_prefix: DEFAULT_FAIL_PREFIX.to_string(),
        }
    }
}

/// A single call observed by a simulated gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    FlightReserve { flight_id: String },
    FlightCancel { booking_id: String },
    HotelReserve { hotel_id: String },
    HotelCancel { booking_id: String },
    PaymentCharge { user_id: String },
}

/// Chronological record of gateway calls.
///
/// A journal can be shared across the simulated gateways so tests can
/// assert cross-service ordering, e.g. that the hotel is cancelled before
/// the flight during a payment rollback.
#[derive(Debug, Clone, Default)]
pub struct CallJournal {
    calls: Arc<Mutex<Vec<GatewayCall>>>,
}

impl CallJournal {
    /// Creates an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a call to the journal.
    pub fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }

    /// Returns all recorded calls in order.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }
}
