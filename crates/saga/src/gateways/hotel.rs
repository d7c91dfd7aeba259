//! Simulated hotel reservation gateway.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use domain::ReservationResult;
use uuid::Uuid;

use crate::gateways::{CallJournal, GatewayCall, GatewayError, HotelGateway, ReservationPolicy};

#[derive(Debug, Default)]
struct HotelState {
    /// Active bookings: booking id → hotel id.
    bookings: HashMap<String, String>,
    /// Booking ids passed to `cancel`, in call order.
    cancelled: Vec<String>,
    fail_on_cancel: bool,
}

/// In-memory hotel gateway simulating an external reservation system.
///
/// Mirrors the flight gateway: fail-prefixed hotel ids are rejected,
/// successful reservations get a fresh UUID booking reference.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHotelGateway {
    state: Arc<RwLock<HotelState>>,
    policy: ReservationPolicy,
    latency: Duration,
    journal: CallJournal,
}

impl InMemoryHotelGateway {
    /// Creates a gateway with the default policy and no simulated latency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the reservation policy.
    pub fn with_policy(mut self, policy: ReservationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Adds simulated network latency to each reserve call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Shares a call journal with other gateways.
    pub fn with_journal(mut self, journal: CallJournal) -> Self {
        self.journal = journal;
        self
    }

    /// Makes subsequent cancel calls fail.
    pub fn set_fail_on_cancel(&self, fail: bool) {
        self.state.write().unwrap().fail_on_cancel = fail;
    }

    /// Returns the number of active (not cancelled) bookings.
    pub fn reservation_count(&self) -> usize {
        self.state.read().unwrap().bookings.len()
    }

    /// Returns true if an active booking exists with the given id.
    pub fn has_booking(&self, booking_id: &str) -> bool {
        self.state.read().unwrap().bookings.contains_key(booking_id)
    }

    /// Returns the booking ids passed to `cancel`, in call order.
    pub fn cancelled(&self) -> Vec<String> {
        self.state.read().unwrap().cancelled.clone()
    }
}

#[async_trait]
impl HotelGateway for InMemoryHotelGateway {
    async fn reserve(&self, hotel_id: &str) -> ReservationResult {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.journal.record(GatewayCall::HotelReserve {
            hotel_id: hotel_id.to_string(),
        });

        if self.policy.rejects(hotel_id) {
            return ReservationResult::failed("simulated rejection");
        }

        let booking_id = Uuid::new_v4().to_string();
        self.state
            .write()
            .unwrap()
            .bookings
            .insert(booking_id.clone(), hotel_id.to_string());
        ReservationResult::success(booking_id)
    }

    async fn cancel(&self, booking_id: &str) -> Result<(), GatewayError> {
        self.journal.record(GatewayCall::HotelCancel {
            booking_id: booking_id.to_string(),
        });

        let mut state = self.state.write().unwrap();
        if state.fail_on_cancel {
            return Err(GatewayError("hotel system unreachable".to_string()));
        }

        state.bookings.remove(booking_id);
        state.cancelled.push(booking_id.to_string());
        Ok(())
    }
}
