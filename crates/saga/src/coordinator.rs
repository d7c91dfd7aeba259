//! Saga coordinator for atomic trip booking.

use common::OrderId;
use domain::{BookingConfirmedEvent, ReservationResult, TripRequest};

use crate::error::BookingError;
use crate::gateways::{FlightGateway, HotelGateway, PaymentError, PaymentGateway};
use crate::progress::{CompletedStep, SagaProgress};
use crate::publisher::EventPublisher;
use crate::trip_booking;

/// Orchestrates the trip booking saga.
///
/// Drives a 3-step saga (flight → hotel → payment) with compensating
/// cancellations on failure. The coordinator is stateless across calls:
/// each `book_trip` invocation tracks its own progress on the call stack,
/// so concurrent invocations need no locking.
pub struct SagaCoordinator<F, H, P, E>
where
    F: FlightGateway,
    H: HotelGateway,
    P: PaymentGateway,
    E: EventPublisher,
{
    flight: F,
    hotel: H,
    payment: P,
    publisher: E,
}

impl<F, H, P, E> SagaCoordinator<F, H, P, E>
where
    F: FlightGateway,
    H: HotelGateway,
    P: PaymentGateway,
    E: EventPublisher,
{
    /// Creates a new saga coordinator over the given collaborators.
    pub fn new(flight: F, hotel: H, payment: P, publisher: E) -> Self {
        Self {
            flight,
            hotel,
            payment,
            publisher,
        }
    }

    /// Books a trip: reserves the flight, reserves the hotel, charges the
    /// payment, and publishes a `BookingConfirmedEvent` on full success.
    ///
    /// Each step is attempted exactly once; there is no retry inside the
    /// saga. On partial failure, completed steps are cancelled in reverse
    /// order before the triggering failure is returned. The invocation has
    /// a single terminal outcome: a fresh order id, or one
    /// [`BookingError`] kind.
    #[tracing::instrument(
        skip(self, request),
        fields(saga_type = trip_booking::SAGA_TYPE, user_id = %request.user_id())
    )]
    pub async fn book_trip(&self, request: TripRequest) -> Result<OrderId, BookingError> {
        let mut progress = SagaProgress::new();
        tracing::info!(
            flight_id = request.flight_id(),
            hotel_id = request.hotel_id(),
            "saga started"
        );

        // Step 1: Reserve flight. Nothing committed yet, so a rejection
        // aborts without compensation.
        tracing::info!(step = trip_booking::STEP_RESERVE_FLIGHT, "saga step started");
        match self.flight.reserve(request.flight_id()).await {
            ReservationResult::Success { booking_id } => {
                tracing::info!(
                    step = trip_booking::STEP_RESERVE_FLIGHT,
                    %booking_id,
                    "saga step completed"
                );
                progress.record(CompletedStep::FlightReserved { booking_id });
            }
            ReservationResult::Failed { reason } => {
                tracing::warn!(
                    step = trip_booking::STEP_RESERVE_FLIGHT,
                    %reason,
                    "saga aborted"
                );
                return Err(BookingError::FlightUnavailable { reason });
            }
        }

        // Step 2: Reserve hotel. A rejection here must undo the flight.
        tracing::info!(step = trip_booking::STEP_RESERVE_HOTEL, "saga step started");
        match self.hotel.reserve(request.hotel_id()).await {
            ReservationResult::Success { booking_id } => {
                tracing::info!(
                    step = trip_booking::STEP_RESERVE_HOTEL,
                    %booking_id,
                    "saga step completed"
                );
                progress.record(CompletedStep::HotelReserved { booking_id });
            }
            ReservationResult::Failed { reason } => {
                tracing::warn!(
                    step = trip_booking::STEP_RESERVE_HOTEL,
                    %reason,
                    "saga compensating"
                );
                self.compensate(&progress).await;
                return Err(BookingError::HotelUnavailable { reason });
            }
        }

        // Step 3: Charge payment. The last fallible step; a failure here
        // unwinds both reservations, most recent first.
        tracing::info!(step = trip_booking::STEP_CHARGE_PAYMENT, "saga step started");
        if let Err(err) = self
            .payment
            .charge(request.user_id(), request.amount())
            .await
        {
            tracing::warn!(
                step = trip_booking::STEP_CHARGE_PAYMENT,
                error = %err,
                "saga compensating"
            );
            self.compensate(&progress).await;
            return Err(match err {
                PaymentError::Declined { reason } => BookingError::PaymentFailed { reason },
                PaymentError::InvalidAmount { amount } => {
                    BookingError::InvalidRequest(domain::DomainError::NonPositiveAmount { amount })
                }
            });
        }
        tracing::info!(step = trip_booking::STEP_CHARGE_PAYMENT, "saga step completed");

        // Point of no return: the charge is captured, nothing can fail the
        // booking anymore. Publish the confirmation and commit.
        let order_id = OrderId::new();
        self.publisher.publish(BookingConfirmedEvent::new(
            order_id,
            request.user_id(),
            request.flight_id(),
            request.hotel_id(),
        ));

        tracing::info!(%order_id, "saga completed");
        Ok(order_id)
    }

    /// Cancels completed steps in reverse chronological order.
    ///
    /// Compensation is best-effort: a cancel failure is logged and the
    /// chain continues, so the caller always sees the triggering failure,
    /// never a compensation failure.
    async fn compensate(&self, progress: &SagaProgress) {
        for step in progress.undo_order() {
            match step {
                CompletedStep::HotelReserved { booking_id } => {
                    match self.hotel.cancel(booking_id).await {
                        Ok(()) => {
                            tracing::info!(%booking_id, "hotel reservation cancelled");
                        }
                        Err(err) => {
                            tracing::warn!(
                                %booking_id,
                                error = %err,
                                "hotel compensation failed"
                            );
                        }
                    }
                }
                CompletedStep::FlightReserved { booking_id } => {
                    match self.flight.cancel(booking_id).await {
                        Ok(()) => {
                            tracing::info!(%booking_id, "flight reservation cancelled");
                        }
                        Err(err) => {
                            tracing::warn!(
                                %booking_id,
                                error = %err,
                                "flight compensation failed"
                            );
                        }
                    }
                }
            }
        }
    }
}
