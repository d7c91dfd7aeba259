//! Event publication boundary.

use std::sync::{Arc, Mutex};

use domain::BookingConfirmedEvent;
use tokio::sync::mpsc;

/// Hands a confirmation event off for asynchronous delivery.
///
/// `publish` is a synchronous hand-off and must never block the caller on
/// downstream delivery: the saga's success result does not depend on any
/// consumer having processed the event. Ordering, retry, and delivery
/// semantics are the publisher's concern, not the saga's.
pub trait EventPublisher: Send + Sync {
    /// Publishes a booking confirmation, fire-and-forget.
    fn publish(&self, event: BookingConfirmedEvent);
}

/// Publisher backed by an unbounded tokio channel.
///
/// The receiver side is handed to a consumer task (e.g. notification
/// dispatch); sending never blocks or fails back to the saga.
#[derive(Debug, Clone)]
pub struct ChannelEventPublisher {
    tx: mpsc::UnboundedSender<BookingConfirmedEvent>,
}

impl ChannelEventPublisher {
    /// Creates a publisher and the receiver its events are delivered to.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<BookingConfirmedEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EventPublisher for ChannelEventPublisher {
    fn publish(&self, event: BookingConfirmedEvent) {
        if let Err(err) = self.tx.send(event) {
            // The payment was already captured; with no consumer attached
            // the confirmation is lost. Accepted inconsistency window —
            // surfaced loudly, not propagated.
            let event = err.0;
            tracing::error!(
                booking_id = %event.booking_id,
                user_id = %event.user_id,
                "confirmation event dropped: consumer detached after payment capture"
            );
        }
    }
}

/// Publisher that records events in memory, for tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventPublisher {
    events: Arc<Mutex<Vec<BookingConfirmedEvent>>>,
}

impl InMemoryEventPublisher {
    /// Creates an empty recording publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all events published so far.
    pub fn published(&self) -> Vec<BookingConfirmedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Returns the number of events published so far.
    pub fn published_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl EventPublisher for InMemoryEventPublisher {
    fn publish(&self, event: BookingConfirmedEvent) {
        self.events.lock().unwrap().push(event);
    }
}
