//! Integration tests for the trip booking saga.

use domain::{DomainError, TripRequest};
use saga::{
    BookingError, CallJournal, ChannelEventPublisher, GatewayCall, InMemoryEventPublisher,
    InMemoryFlightGateway, InMemoryHotelGateway, InMemoryPaymentGateway, PaymentPolicy,
    ReservationPolicy, SagaCoordinator,
};

type TestCoordinator = SagaCoordinator<
    InMemoryFlightGateway,
    InMemoryHotelGateway,
    InMemoryPaymentGateway,
    InMemoryEventPublisher,
>;

struct TestHarness {
    coordinator: TestCoordinator,
    flight: InMemoryFlightGateway,
    hotel: InMemoryHotelGateway,
    payment: InMemoryPaymentGateway,
    publisher: InMemoryEventPublisher,
    journal: CallJournal,
}

impl TestHarness {
    fn new() -> Self {
        let journal = CallJournal::new();
        let flight = InMemoryFlightGateway::new().with_journal(journal.clone());
        let hotel = InMemoryHotelGateway::new().with_journal(journal.clone());
        let payment = InMemoryPaymentGateway::new().with_journal(journal.clone());
        let publisher = InMemoryEventPublisher::new();

        let coordinator = SagaCoordinator::new(
            flight.clone(),
            hotel.clone(),
            payment.clone(),
            publisher.clone(),
        );

        Self {
            coordinator,
            flight,
            hotel,
            payment,
            publisher,
            journal,
        }
    }
}

fn request(flight_id: &str, hotel_id: &str, user_id: &str, amount: f64) -> TripRequest {
    TripRequest::new(flight_id, hotel_id, user_id, amount).unwrap()
}

#[test]
fn test_validation_rejects_before_any_gateway_call() {
    // Construction fails; no coordinator or gateway is ever involved.
    assert!(matches!(
        TripRequest::new("", "H1", "alice", 100.0),
        Err(DomainError::BlankField { field: "flight_id" })
    ));
    assert!(matches!(
        TripRequest::new("F1", " ", "alice", 100.0),
        Err(DomainError::BlankField { field: "hotel_id" })
    ));
    assert!(matches!(
        TripRequest::new("F1", "H1", "", 100.0),
        Err(DomainError::BlankField { field: "user_id" })
    ));
    assert!(matches!(
        TripRequest::new("F1", "H1", "alice", 0.0),
        Err(DomainError::NonPositiveAmount { .. })
    ));
    assert!(matches!(
        TripRequest::new("F1", "H1", "alice", -10.0),
        Err(DomainError::NonPositiveAmount { .. })
    ));
}

#[tokio::test]
async fn test_happy_path_reserves_charges_and_publishes_once() {
    let h = TestHarness::new();

    let order_id = h
        .coordinator
        .book_trip(request("F123", "H456", "alice", 2500.0))
        .await
        .unwrap();

    assert_eq!(h.flight.reservation_count(), 1);
    assert_eq!(h.hotel.reservation_count(), 1);
    assert_eq!(h.payment.charge_count(), 1);
    assert_eq!(h.payment.charges(), vec![("alice".to_string(), 2500.0)]);

    let events = h.publisher.published();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].booking_id, order_id);
    assert_eq!(events[0].flight_id, "F123");
    assert_eq!(events[0].hotel_id, "H456");
    assert_eq!(events[0].user_id, "alice");

    // One reserve per leg, one charge, no cancels.
    assert_eq!(
        h.journal.calls(),
        vec![
            GatewayCall::FlightReserve {
                flight_id: "F123".to_string()
            },
            GatewayCall::HotelReserve {
                hotel_id: "H456".to_string()
            },
            GatewayCall::PaymentCharge {
                user_id: "alice".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn test_flight_failure_aborts_immediately() {
    let h = TestHarness::new();

    let result = h
        .coordinator
        .book_trip(request("FAIL1", "H456", "alice", 2500.0))
        .await;

    assert!(matches!(
        result,
        Err(BookingError::FlightUnavailable { .. })
    ));
    assert_eq!(
        h.journal.calls(),
        vec![GatewayCall::FlightReserve {
            flight_id: "FAIL1".to_string()
        }]
    );
    assert_eq!(h.publisher.published_count(), 0);
}

#[tokio::test]
async fn test_hotel_failure_compensates_flight_exactly_once() {
    let h = TestHarness::new();

    let result = h
        .coordinator
        .book_trip(request("F1", "FAIL2", "alice", 2500.0))
        .await;

    assert!(matches!(result, Err(BookingError::HotelUnavailable { .. })));

    let cancelled = h.flight.cancelled();
    assert_eq!(cancelled.len(), 1);
    assert!(!h.flight.has_booking(&cancelled[0]));
    assert_eq!(h.payment.charge_count(), 0);
    assert_eq!(h.publisher.published_count(), 0);

    // Flight reserve → hotel reserve → flight cancel; payment never called.
    let calls = h.journal.calls();
    assert_eq!(calls.len(), 3);
    assert!(matches!(calls[2], GatewayCall::FlightCancel { .. }));
}

#[tokio::test]
async fn test_payment_failure_rolls_back_hotel_then_flight() {
    let h = TestHarness::new();

    let result = h
        .coordinator
        .book_trip(request("F1", "H1", "alice", 15_000.0))
        .await;

    assert!(matches!(result, Err(BookingError::PaymentFailed { .. })));

    // Both reservations were made before rollback.
    let calls = h.journal.calls();
    assert!(matches!(calls[0], GatewayCall::FlightReserve { .. }));
    assert!(matches!(calls[1], GatewayCall::HotelReserve { .. }));
    assert!(matches!(calls[2], GatewayCall::PaymentCharge { .. }));
    // Compensation runs most-recent-first: hotel, then flight.
    assert!(matches!(calls[3], GatewayCall::HotelCancel { .. }));
    assert!(matches!(calls[4], GatewayCall::FlightCancel { .. }));
    assert_eq!(calls.len(), 5);

    assert_eq!(h.flight.reservation_count(), 0);
    assert_eq!(h.hotel.reservation_count(), 0);
    assert_eq!(h.payment.charge_count(), 0);
    assert_eq!(h.publisher.published_count(), 0);
}

#[tokio::test]
async fn test_no_event_leaks_on_any_failure_path() {
    let h = TestHarness::new();

    let _ = h
        .coordinator
        .book_trip(request("FAIL1", "H1", "alice", 100.0))
        .await;
    let _ = h
        .coordinator
        .book_trip(request("F1", "FAIL2", "alice", 100.0))
        .await;
    let _ = h
        .coordinator
        .book_trip(request("F1", "H1", "alice", 99_999.0))
        .await;
    let _ = h
        .coordinator
        .book_trip(request("F1", "H1", "FAILED_USER", 100.0))
        .await;

    assert_eq!(h.publisher.published_count(), 0);
}

#[tokio::test]
async fn test_booking_ids_unique_across_successful_runs() {
    let h = TestHarness::new();

    let first = h
        .coordinator
        .book_trip(request("F1", "H1", "alice", 100.0))
        .await
        .unwrap();
    let second = h
        .coordinator
        .book_trip(request("F9", "H9", "bob", 9_000.0))
        .await
        .unwrap();

    assert_ne!(first, second);

    // The gateway-issued booking references are unique too.
    let events = h.publisher.published();
    assert_eq!(events.len(), 2);
    assert_ne!(events[0].booking_id, events[1].booking_id);
}

#[tokio::test]
async fn test_custom_thresholds_are_honored() {
    // Rebuild the stack with non-default business rules to prove the
    // thresholds are configuration, not constants.
    let flight = InMemoryFlightGateway::new().with_policy(ReservationPolicy {
        fail_prefix: "NOPE".to_string(),
    });
    let hotel = InMemoryHotelGateway::new().with_policy(ReservationPolicy {
        fail_prefix: "NOPE".to_string(),
    });
    let payment = InMemoryPaymentGateway::new().with_policy(PaymentPolicy {
        max_charge: 500.0,
        blocked_user_prefix: "NOPE".to_string(),
    });
    let publisher = InMemoryEventPublisher::new();
    let coordinator =
        SagaCoordinator::new(flight, hotel, payment, publisher.clone());

    // "FAIL" ids sail through under the custom prefix.
    coordinator
        .book_trip(request("FAIL1", "FAIL2", "FAIL_bob", 400.0))
        .await
        .unwrap();

    // The lowered ceiling declines what the default would accept.
    let result = coordinator
        .book_trip(request("F1", "H1", "alice", 600.0))
        .await;
    assert!(matches!(result, Err(BookingError::PaymentFailed { .. })));
    assert_eq!(publisher.published_count(), 1);
}

#[tokio::test]
async fn test_channel_publisher_decouples_consumer() {
    let flight = InMemoryFlightGateway::new();
    let hotel = InMemoryHotelGateway::new();
    let payment = InMemoryPaymentGateway::new();
    let (publisher, mut rx) = ChannelEventPublisher::new();
    let coordinator = SagaCoordinator::new(flight, hotel, payment, publisher);

    // book_trip returns before anything has read from the channel.
    let order_id = coordinator
        .book_trip(request("F1", "H1", "alice", 100.0))
        .await
        .unwrap();

    let event = rx.recv().await.unwrap();
    assert_eq!(event.booking_id, order_id);
}

#[tokio::test]
async fn test_concurrent_bookings_are_independent() {
    let h = TestHarness::new();

    let ok = h
        .coordinator
        .book_trip(request("F1", "H1", "alice", 100.0));
    let rejected = h
        .coordinator
        .book_trip(request("F2", "FAIL9", "bob", 100.0));

    let (ok, rejected) = tokio::join!(ok, rejected);
    assert!(ok.is_ok());
    assert!(matches!(
        rejected,
        Err(BookingError::HotelUnavailable { .. })
    ));
    assert_eq!(h.publisher.published_count(), 1);
}
