//! Simulated flight reservation gateway.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use domain::ReservationResult;
use uuid::Uuid;

use crate::gateways::{
    CallJournal, FlightGateway, GatewayCall, GatewayError, ReservationPolicy,
};

#[derive(Debug, Default)]
struct FlightState {
    /// Active bookings: booking id → flight id.
    bookings: HashMap<String, String>,
    /// Booking ids passed to `cancel`, in call order.
    cancelled: Vec<String>,
    fail_on_cancel: bool,
}

/// In-memory flight gateway simulating an external reservation system.
///
/// Any flight id whose case-insensitive form starts with the policy's fail
/// prefix is rejected; everything else gets a fresh UUID booking reference.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFlightGateway {
    state: Arc<RwLock<FlightState>>,
    policy: ReservationPolicy,
    latency: Duration,
    journal: CallJournal,
}

impl InMemoryFlightGateway {
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

    /// Makes subsequent cancel calls fail, to exercise the orchestrator's
    /// best-effort compensation path.
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
impl FlightGateway for InMemoryFlightGateway {
    async fn reserve(&self, flight_id: &str) -> ReservationResult {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.journal.record(GatewayCall::FlightReserve {
            flight_id: flight_id.to_string(),
        });

        if self.policy.rejects(flight_id) {
            return ReservationResult::failed("simulated rejection");
        }

        let booking_id = Uuid::new_v4().to_string();
        self.state
            .write()
            .unwrap()
            .bookings
            .insert(booking_id.clone(), flight_id.to_string());
        ReservationResult::success(booking_id)
    }

    async fn cancel(&self, booking_id: &str) -> Result<(), GatewayError> {
        self.journal.record(GatewayCall::FlightCancel {
            booking_id: booking_id.to_string(),
        });

        let mut state = self.state.write().unwrap();
        if state.fail_on_cancel {
            return Err(GatewayError("flight system unreachable".to_string()));
        }

        // Unknown ids are tolerated: cancel is a no-op then.
        state.bookings.remove(booking_id);
        state.cancelled.push(booking_id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reserve_and_cancel() {
        let gateway = InMemoryFlightGateway::new();

        let result = gateway.reserve("F123").await;
        assert!(result.is_success());
        let booking_id = result.booking_id().unwrap().to_string();
        assert_eq!(gateway.reservation_count(), 1);
        assert!(gateway.has_booking(&booking_id));

        gateway.cancel(&booking_id).await.unwrap();
        assert_eq!(gateway.reservation_count(), 0);
        assert_eq!(gateway.cancelled(), vec![booking_id]);
    }

    #[tokio::test]
    async fn test_fail_prefix_rejects_reservation() {
        let gateway = InMemoryFlightGateway::new();

        let result = gateway.reserve("FAIL1").await;
        assert!(!result.is_success());
        assert_eq!(gateway.reservation_count(), 0);
    }

    #[tokio::test]
    async fn test_fail_prefix_is_case_insensitive() {
        let gateway = InMemoryFlightGateway::new();
        assert!(!gateway.reserve("failX").await.is_success());
        assert!(!gateway.reserve("FaIl-2").await.is_success());
    }

    #[tokio::test]
    async fn test_cancel_unknown_booking_is_no_op() {
        let gateway = InMemoryFlightGateway::new();
        gateway.cancel("no-such-booking").await.unwrap();
        assert_eq!(gateway.reservation_count(), 0);
    }

    #[tokio::test]
    async fn test_booking_ids_are_unique() {
        let gateway = InMemoryFlightGateway::new();
        let first = gateway.reserve("F1").await;
        let second = gateway.reserve("F1").await;
        assert_ne!(first.booking_id(), second.booking_id());
    }

    #[tokio::test]
    async fn test_fail_on_cancel() {
        let gateway = InMemoryFlightGateway::new();
        let result = gateway.reserve("F123").await;
        let booking_id = result.booking_id().unwrap().to_string();

        gateway.set_fail_on_cancel(true);
        assert!(gateway.cancel(&booking_id).await.is_err());
        // The booking survives the failed cancel.
        assert!(gateway.has_booking(&booking_id));
    }

    #[tokio::test]
    async fn test_custom_policy() {
        let gateway = InMemoryFlightGateway::new().with_policy(ReservationPolicy {
            fail_prefix: "SOLDOUT".to_string(),
        });
        assert!(!gateway.reserve("soldout-9").await.is_success());
        assert!(gateway.reserve("FAIL1").await.is_success());
    }
}
