//! Simulated order placement.
//!
//! The processor stands in for a real payment integration. A production
//! build would call an external payment API here with manual capture
//! (authorize at checkout, capture on fulfilment); for now the only
//! observable behaviour is a fixed processing delay followed by a
//! confirmation. The wait is a plain timed sleep with no cancellation
//! point - once an order is submitted it runs to completion.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

use flexbra_core::{Cart, OrderId, Price};

/// Errors the order processor can return.
///
/// A declined payment is the failure path the checkout flow handles: the
/// form returns to an editable state and the cart is left untouched.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("cannot place an order for an empty cart")]
    EmptyCart,
    #[error("payment was declined: {0}")]
    Declined(String),
}

/// Delivery details captured by the checkout form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl OrderDetails {
    /// Names of fields that are empty after trimming.
    ///
    /// Submission requires every field to be a non-empty string; nothing
    /// beyond emptiness is validated (no email-format checks).
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("postal_code", &self.postal_code),
            ("country", &self.country),
        ];

        fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

/// A successfully placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Human-readable order reference shown on the confirmation page.
    pub reference: OrderId,
    /// Units in the order at the time it was placed.
    pub item_count: u32,
    /// Captured total.
    pub total: Price,
}

/// Simulated payment/order-processing step.
#[derive(Debug, Clone)]
pub struct OrderProcessor {
    processing_delay: Duration,
}

impl OrderProcessor {
    /// Create a processor with the given simulated processing delay.
    #[must_use]
    pub const fn new(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }

    /// Place an order for the given cart.
    ///
    /// Sleeps for the configured delay, then confirms. The interface stays
    /// responsive during the wait; callers disable their submit control to
    /// prevent duplicate submission.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] for an empty cart. A declined
    /// payment surfaces as [`OrderError::Declined`].
    #[instrument(skip(self, cart, details), fields(item_count = cart.item_count()))]
    pub async fn place_order(
        &self,
        cart: &Cart,
        details: &OrderDetails,
    ) -> Result<OrderConfirmation, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        tokio::time::sleep(self.processing_delay).await;

        let confirmation = OrderConfirmation {
            reference: generate_reference(),
            item_count: cart.item_count(),
            total: cart.total(),
        };

        tracing::info!(
            reference = %confirmation.reference,
            total = %confirmation.total,
            email = %details.email,
            "Order placed"
        );

        Ok(confirmation)
    }
}

/// Generate a short, human-readable order reference (e.g. `FB-9F2C41A7`).
fn generate_reference() -> OrderId {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    OrderId::new(format!("FB-{}", id.to_uppercase()))
}
