//! Itinerary read model — confirmed bookings, keyed by order id.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::OrderId;
use domain::BookingConfirmedEvent;
use tokio::sync::RwLock;

/// A confirmed trip itinerary, as served by the query side.
#[derive(Debug, Clone)]
pub struct Itinerary {
    pub booking_id: OrderId,
    pub user_id: String,
    pub flight_id: String,
    pub hotel_id: String,
    pub confirmed_at: DateTime<Utc>,
}

/// In-memory read model populated from `BookingConfirmedEvent`s.
///
/// The write side (the saga) never touches this view directly; it is fed
/// by the event consumer, keeping the query path decoupled from the
/// booking transaction.
#[derive(Debug, Clone, Default)]
pub struct ItineraryView {
    itineraries: Arc<RwLock<HashMap<OrderId, Itinerary>>>,
}

impl ItineraryView {
    /// Creates an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a confirmed booking.
    pub async fn record(&self, event: &BookingConfirmedEvent) {
        let itinerary = Itinerary {
            booking_id: event.booking_id,
            user_id: event.user_id.clone(),
            flight_id: event.flight_id.clone(),
            hotel_id: event.hotel_id.clone(),
            confirmed_at: event.confirmed_at,
        };
        self.itineraries
            .write()
            .await
            .insert(event.booking_id, itinerary);
    }

    /// Looks up an itinerary by order id.
    pub async fn get(&self, booking_id: OrderId) -> Option<Itinerary> {
        self.itineraries.read().await.get(&booking_id).cloned()
    }

    /// Returns the number of confirmed itineraries.
    pub async fn len(&self) -> usize {
        self.itineraries.read().await.len()
    }

    /// Returns true if no itinerary has been recorded.
    pub async fn is_empty(&self) -> bool {
        self.itineraries.read().await.is_empty()
    }
}
