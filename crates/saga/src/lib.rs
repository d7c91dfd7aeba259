//! Saga pattern implementation for trip booking.
//!
//! This crate orchestrates a multi-step distributed transaction with
//! compensating actions on failure.
//!
//! The trip booking saga follows these steps:
//! 1. Reserve flight
//! 2. Reserve hotel
//! 3. Charge payment
//!
//! If a step fails, previously completed steps are compensated in reverse
//! order. Once the payment charge succeeds no further step can fail, and a
//! `BookingConfirmedEvent` is published exactly once.

pub mod coordinator;
pub mod error;
pub mod gateways;
pub mod progress;
pub mod publisher;
pub mod trip_booking;

pub use coordinator::SagaCoordinator;
pub use error::BookingError;
pub use gateways::{
    CallJournal, FlightGateway, GatewayCall, GatewayError, HotelGateway, InMemoryFlightGateway,
    InMemoryHotelGateway, InMemoryPaymentGateway, PaymentError, PaymentGateway, PaymentPolicy,
    ReservationPolicy,
};
pub use progress::{CompletedStep, SagaProgress};
pub use publisher::{ChannelEventPublisher, EventPublisher, InMemoryEventPublisher};
