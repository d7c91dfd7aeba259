//! Trip booking endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use domain::TripRequest;
use saga::{
    BookingError, ChannelEventPublisher, InMemoryFlightGateway, InMemoryHotelGateway,
    InMemoryPaymentGateway, SagaCoordinator,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::views::ItineraryView;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub coordinator: SagaCoordinator<
        InMemoryFlightGateway,
        InMemoryHotelGateway,
        InMemoryPaymentGateway,
        ChannelEventPublisher,
    >,
    pub itineraries: Arc<ItineraryView>,
}

#[derive(Deserialize)]
pub struct BookTripRequest {
    pub flight_id: String,
    pub hotel_id: String,
    pub user_id: String,
    pub amount: f64,
}

#[derive(Serialize)]
pub struct BookingConfirmedResponse {
    pub booking_id: String,
    pub status: &'static str,
}

/// POST /api/bookings — runs the trip booking saga.
#[tracing::instrument(skip(state, req), fields(user_id = %req.user_id))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookTripRequest>,
) -> Result<(StatusCode, Json<BookingConfirmedResponse>), ApiError> {
    let request = TripRequest::new(req.flight_id, req.hotel_id, req.user_id, req.amount)
        .map_err(BookingError::from)?;

    let order_id = state.coordinator.book_trip(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingConfirmedResponse {
            booking_id: order_id.to_string(),
            status: "CONFIRMED",
        }),
    ))
}
