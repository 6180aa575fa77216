//! # Shipping
//!
//! The order asks a `ShippingCalculator` for a fee based on its line items.
//! The only fee rule available lives in `LegacyShippingService`, which
//! predates line items and only understands a raw amount.
//! `LegacyShippingAdapter` bridges the two without touching the service.
//!
//! ```text
//! Order ──items──► LegacyShippingAdapter ──sum(subtotals)──► LegacyShippingService
//!                                                                   │
//!                            fee ◄──────────────────────────────────┘
//! ```
//!
//! The adapter sums raw subtotals. Pricing-strategy discounts do not move
//! the order across the free-shipping threshold.

use std::sync::Arc;

use tracing::trace;

use crate::money::Money;
use crate::types::{raw_subtotal, LineItem};

/// Orders at or above this amount ship for free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_cents(20_000);

/// Fee charged below the threshold.
pub const FLAT_SHIPPING_FEE: Money = Money::from_cents(2_000);

/// Computes the shipping fee for a set of line items.
pub trait ShippingCalculator {
    fn calculate_shipping(&self, items: &[LineItem]) -> Money;
}

/// Pre-existing, amount-based shipping rule. Not to be modified.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyShippingService;

impl LegacyShippingService {
    pub fn new() -> Self {
        LegacyShippingService
    }

    /// Free at or above 200.00, flat 20.00 below.
    pub fn calculate(&self, amount: Money) -> Money {
        if amount >= FREE_SHIPPING_THRESHOLD {
            Money::zero()
        } else {
            FLAT_SHIPPING_FEE
        }
    }
}

/// Presents `LegacyShippingService` as a `ShippingCalculator`.
#[derive(Debug, Clone)]
pub struct LegacyShippingAdapter {
    legacy_service: Arc<LegacyShippingService>,
}

impl LegacyShippingAdapter {
    pub fn new(legacy_service: Arc<LegacyShippingService>) -> Self {
        LegacyShippingAdapter { legacy_service }
    }
}

impl ShippingCalculator for LegacyShippingAdapter {
    fn calculate_shipping(&self, items: &[LineItem]) -> Money {
        let amount = raw_subtotal(items);
        let fee = self.legacy_service.calculate(amount);
        trace!(%amount, %fee, "Legacy shipping fee computed");
        fee
    }
}
