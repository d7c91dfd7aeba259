//! Booking confirmation consumer.
//!
//! Drains the saga's event channel on a dedicated task: sends the
//! (simulated) confirmation email and feeds the itinerary read model.
//! Runs fully decoupled from `book_trip` — the saga's caller never waits
//! on this task.

use std::sync::Arc;

use domain::BookingConfirmedEvent;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

use crate::views::ItineraryView;

/// Spawns the confirmation consumer task.
///
/// The task ends when the publisher side of the channel is dropped.
pub fn spawn_confirmation_consumer(
    mut rx: UnboundedReceiver<BookingConfirmedEvent>,
    itineraries: Arc<ItineraryView>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            tracing::info!(
                booking_id = %event.booking_id,
                user_id = %event.user_id,
                flight_id = %event.flight_id,
                hotel_id = %event.hotel_id,
                "sending confirmation email"
            );
            itineraries.record(&event).await;
        }
        tracing::debug!("confirmation consumer stopped");
    })
}
