//! Itinerary query endpoint (the read side).

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use common::OrderId;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::routes::bookings::AppState;

#[derive(Serialize)]
pub struct ItineraryResponse {
    pub booking_id: String,
    pub status: &'static str,
    pub user_id: String,
    pub flight_id: String,
    pub hotel_id: String,
    pub confirmed_at: DateTime<Utc>,
    pub details: String,
}

/// GET /api/itinerary/{booking_id} — serves a confirmed itinerary.
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<Json<ItineraryResponse>, ApiError> {
    let uuid = Uuid::parse_str(&booking_id)
        .map_err(|e| ApiError::BadRequest(format!("invalid booking id: {e}")))?;

    let itinerary = state
        .itineraries
        .get(OrderId::from_uuid(uuid))
        .await
        .ok_or_else(|| ApiError::NotFound(format!("no itinerary for booking {booking_id}")))?;

    let details = format!(
        "Your trip includes flight {} and hotel {}.",
        itinerary.flight_id, itinerary.hotel_id
    );
    Ok(Json(ItineraryResponse {
        booking_id: itinerary.booking_id.to_string(),
        status: "CONFIRMED",
        user_id: itinerary.user_id,
        flight_id: itinerary.flight_id,
        hotel_id: itinerary.hotel_id,
        confirmed_at: itinerary.confirmed_at,
        details,
    }))
}
