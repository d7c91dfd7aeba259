//! Trip booking saga constants.

/// The saga type identifier for trip booking.
pub const SAGA_TYPE: &str = "TripBooking";

/// Step name: Reserve the flight.
pub const STEP_RESERVE_FLIGHT: &str = "reserve_flight";

/// Step name: Reserve the hotel.
pub const STEP_RESERVE_HOTEL: &str = "reserve_hotel";

/// Step name: Charge the payment.
pub const STEP_CHARGE_PAYMENT: &str = "charge_payment";
