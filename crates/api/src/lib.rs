//! HTTP API server for the trip booking system.
//!
//! Exposes the booking saga behind a thin REST layer, with structured
//! logging (tracing) and an asynchronous confirmation consumer feeding
//! the itinerary read model.

pub mod config;
pub mod error;
pub mod notification;
pub mod routes;
pub mod views;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use saga::{
    ChannelEventPublisher, InMemoryFlightGateway, InMemoryHotelGateway, InMemoryPaymentGateway,
    PaymentPolicy, SagaCoordinator,
};
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::bookings::AppState;
use views::ItineraryView;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health::check))
        .route("/api/bookings", post(routes::bookings::create))
        .route("/api/itinerary/{booking_id}", get(routes::itinerary::get))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state: simulated gateways wired to the
/// saga coordinator, plus the confirmation consumer task.
pub fn create_default_state(config: &Config) -> (Arc<AppState>, JoinHandle<()>) {
    let latency = Duration::from_millis(config.gateway_latency_ms);

    let flight = InMemoryFlightGateway::new().with_latency(latency);
    let hotel = InMemoryHotelGateway::new().with_latency(latency);
    let payment = InMemoryPaymentGateway::new()
        .with_policy(PaymentPolicy {
            max_charge: config.payment_max_charge,
            ..PaymentPolicy::default()
        })
        .with_latency(latency);

    let (publisher, rx) = ChannelEventPublisher::new();
    let itineraries = Arc::new(ItineraryView::new());
    let consumer = notification::spawn_confirmation_consumer(rx, itineraries.clone());

    let coordinator = SagaCoordinator::new(flight, hotel, payment, publisher);

    let state = Arc::new(AppState {
        coordinator,
        itineraries,
    });

    (state, consumer)
}
