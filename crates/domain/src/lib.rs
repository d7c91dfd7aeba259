//! Domain layer for the trip booking system.
//!
//! This crate provides the validated value objects and domain events that
//! flow between the saga orchestrator and its collaborators:
//! - `TripRequest` — validated booking input
//! - `ReservationResult` — outcome of an external reservation call
//! - `BookingConfirmedEvent` — published once a booking fully commits

pub mod error;
pub mod events;
pub mod reservation;
pub mod trip;

pub use error::DomainError;
pub use events::{BookingConfirmedEvent, DomainEvent};
pub use reservation::ReservationResult;
pub use trip::TripRequest;
