//! # Order
//!
//! The orchestration core. An order owns its items, one pricing strategy,
//! one shipping calculator and its observers, and sequences a checkout.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Order::new(pricing, shipping)                                         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   BUILDING ◄── add_observer(..)                                         │
//! │        │   ◄── add_item(..)          → "Item adicionado: X (xN)."       │
//! │        │   ──► total_products() / shipping_cost() / final_total()       │
//! │        │       (recomputed on every call)                               │
//! │        ▼                                                                │
//! │   process_order(&creator)                                               │
//! │        ├── notify "Processando pedido..."                               │
//! │        ├── total = final_total()                                        │
//! │        ├── creator.process_payment(total)   ── Err? stays BUILDING      │
//! │        └── notify "Pedido pago com sucesso. Valor final: R$ X."         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   PAID                                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here retries or compensates. If payment fails after the
//! "processing" notification went out, that notification stands and no
//! success message follows.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::observer::OrderObserver;
use crate::payment::PaymentProcessorCreator;
use crate::pricing::PricingStrategy;
use crate::shipping::ShippingCalculator;
use crate::types::{LineItem, OrderStatus};
use crate::validation::validate_order_size;

// =============================================================================
// Order Summary
// =============================================================================

/// Snapshot of an order's totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub order_id: String,
    pub status: OrderStatus,
    pub item_count: usize,
    pub total_quantity: u64,
    pub products_total: Money,
    pub shipping_cost: Money,
    pub final_total: Money,
    pub created_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Order
// =============================================================================

/// A single order going through one checkout.
pub struct Order {
    id: String,
    items: Vec<LineItem>,
    pricing_strategy: Box<dyn PricingStrategy>,
    shipping_calculator: Box<dyn ShippingCalculator>,
    observers: Vec<Arc<dyn OrderObserver>>,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    paid_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Creates an empty order. Strategy and calculator are fixed for the
    /// order's whole life.
    pub fn new(
        pricing_strategy: Box<dyn PricingStrategy>,
        shipping_calculator: Box<dyn ShippingCalculator>,
    ) -> Self {
        let order = Order {
            id: Uuid::new_v4().to_string(),
            items: Vec::new(),
            pricing_strategy,
            shipping_calculator,
            observers: Vec::new(),
            status: OrderStatus::Building,
            created_at: Utc::now(),
            paid_at: None,
        };
        debug!(order_id = %order.id, "Order created");
        order
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Registers an observer. The same observer may be registered more than
    /// once and then hears every event once per registration.
    pub fn add_observer(&mut self, observer: Arc<dyn OrderObserver>) {
        self.observers.push(observer);
    }

    /// Sends `message` to every observer in registration order. Stops at the
    /// first failure.
    pub fn notify_observers(&self, message: &str) -> CoreResult<()> {
        for observer in &self.observers {
            observer.update(message)?;
        }
        Ok(())
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Appends an item and announces it.
    ///
    /// The item stays on the order even if an observer fails while being
    /// told about it. Fails without appending once the order already holds
    /// `MAX_ORDER_ITEMS` lines.
    pub fn add_item(&mut self, item: LineItem) -> CoreResult<()> {
        validate_order_size(self.items.len())?;

        let message = format!(
            "Item adicionado: {} (x{}).",
            item.product().name(),
            item.quantity()
        );
        debug!(
            order_id = %self.id,
            product = item.product().name(),
            quantity = item.quantity(),
            "Item added"
        );
        self.items.push(item);
        self.notify_observers(&message)
    }

    // =========================================================================
    // Totals
    // =========================================================================

    /// Products total according to the pricing strategy.
    pub fn total_products(&self) -> Money {
        self.pricing_strategy.calculate_total(&self.items)
    }

    /// Shipping fee according to the shipping calculator.
    pub fn shipping_cost(&self) -> Money {
        self.shipping_calculator.calculate_shipping(&self.items)
    }

    /// `total_products() + shipping_cost()`.
    pub fn final_total(&self) -> Money {
        self.total_products() + self.shipping_cost()
    }

    /// Current totals and status.
    pub fn summary(&self) -> OrderSummary {
        let products_total = self.total_products();
        let shipping_cost = self.shipping_cost();

        OrderSummary {
            order_id: self.id.clone(),
            status: self.status,
            item_count: self.items.len(),
            total_quantity: self.items.iter().map(|i| u64::from(i.quantity())).sum(),
            products_total,
            shipping_cost,
            final_total: products_total + shipping_cost,
            created_at: self.created_at,
            paid_at: self.paid_at,
        }
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Charges the final total through `payment_creator` and marks the order
    /// paid.
    ///
    /// ## Errors
    /// - `InvalidOrderStatus` if the order was already paid (nothing is
    ///   emitted)
    /// - whatever an observer or the payment processor returns, unchanged
    pub fn process_order(
        &mut self,
        payment_creator: &dyn PaymentProcessorCreator,
    ) -> CoreResult<OrderSummary> {
        if self.status == OrderStatus::Paid {
            return Err(CoreError::InvalidOrderStatus {
                order_id: self.id.clone(),
                current_status: self.status.to_string(),
            });
        }

        self.notify_observers("Processando pedido...")?;

        let total = self.final_total();
        info!(order_id = %self.id, %total, "Processing payment");

        if let Err(e) = payment_creator.process_payment(total) {
            warn!(order_id = %self.id, error = %e, "Payment failed");
            return Err(e);
        }

        self.status = OrderStatus::Paid;
        self.paid_at = Some(Utc::now());

        self.notify_observers(&format!(
            "Pedido pago com sucesso. Valor final: {}.",
            total.format_currency()
        ))?;

        info!(order_id = %self.id, %total, "Order paid");
        Ok(self.summary())
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
