//! Simulated payment gateway.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::gateways::{CallJournal, GatewayCall, PaymentGateway, PaymentPolicy};

/// Failures raised by the payment gateway.
#[derive(Debug, Clone, Error)]
pub enum PaymentError {
    /// The charge was rejected (insufficient funds, risk block).
    #[error("payment declined: {reason}")]
    Declined { reason: String },

    /// Caller error: the amount was not strictly positive. Raised
    /// independently of the saga, which never passes such an amount
    /// through a validated request.
    #[error("cannot charge non-positive amount {amount}")]
    InvalidAmount { amount: f64 },
}

#[derive(Debug, Default)]
struct PaymentState {
    /// Captured charges: (user id, amount), in call order.
    charges: Vec<(String, f64)>,
}

/// In-memory payment gateway simulating an external payment processor.
///
/// Declines charges above the policy ceiling (simulated insufficient
/// funds) and charges from fail-prefixed users (risk block). There is no
/// refund: a captured charge is final.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentGateway {
    state: Arc<RwLock<PaymentState>>,
    policy: PaymentPolicy,
    latency: Duration,
    journal: CallJournal,
}

impl InMemoryPaymentGateway {
    /// Creates a gateway with the default policy and no simulated latency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the payment policy.
    pub fn with_policy(mut self, policy: PaymentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Adds simulated network latency to each charge call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Shares a call journal with other gateways.
    pub fn with_journal(mut self, journal: CallJournal) -> Self {
        self.journal = journal;
        self
    }

    /// Returns the number of captured charges.
    pub fn charge_count(&self) -> usize {
        self.state.read().unwrap().charges.len()
    }

    /// Returns the captured charges, in call order.
    pub fn charges(&self) -> Vec<(String, f64)> {
        self.state.read().unwrap().charges.clone()
    }
}

#[async_trait]
impl PaymentGateway for InMemoryPaymentGateway {
    async fn charge(&self, user_id: &str, amount: f64) -> Result<(), PaymentError> {
        // Caller error, checked before any simulated network round-trip.
        if !(amount.is_finite() && amount > 0.0) {
            return Err(PaymentError::InvalidAmount { amount });
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.journal.record(GatewayCall::PaymentCharge {
            user_id: user_id.to_string(),
        });

        if amount > self.policy.max_charge {
            return Err(PaymentError::Declined {
                reason: format!("insufficient funds for amount {amount}"),
            });
        }

        if self.policy.blocks_user(user_id) {
            return Err(PaymentError::Declined {
                reason: "risk check failed".to_string(),
            });
        }

        self.state
            .write()
            .unwrap()
            .charges
            .push((user_id.to_string(), amount));
        Ok(())
    }
}
