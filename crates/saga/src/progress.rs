//! Call-stack tracking of completed saga steps.

/// A saga step that completed, with the reference needed to undo it.
///
/// Payment has no entry: the charge is the last step and is irreversible
/// once it succeeds, so there is nothing to record past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletedStep {
    /// Flight reserved; undone by cancelling the booking.
    FlightReserved { booking_id: String },
    /// Hotel reserved; undone by cancelling the booking.
    HotelReserved { booking_id: String },
}

/// Ordered record of what one `book_trip` invocation has committed so far.
///
/// Lives only on the call stack for the duration of the invocation and is
/// discarded when it returns — there is no cross-call durability. Its sole
/// purpose is to make compensation exhaustive: rollback walks the recorded
/// steps most-recent-first.
#[derive(Debug, Default)]
pub struct SagaProgress {
    completed: Vec<CompletedStep>,
}

impl SagaProgress {
    /// Creates an empty progress record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed step.
    pub fn record(&mut self, step: CompletedStep) {
        self.completed.push(step);
    }

    /// Completed steps in chronological order.
    pub fn completed(&self) -> &[CompletedStep] {
        &self.completed
    }

    /// Completed steps in reverse chronological order — the order in which
    /// they must be compensated.
    pub fn undo_order(&self) -> impl Iterator<Item = &CompletedStep> {
        self.completed.iter().rev()
    }
}
