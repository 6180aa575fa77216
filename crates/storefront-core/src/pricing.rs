//! # Pricing Strategies
//!
//! Turns the order's line items into the products total.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order::total_products()                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Box<dyn PricingStrategy>                                               │
//! │       ├── RegularPricingStrategy       sum(subtotals)                   │
//! │       └── PercentageDiscountStrategy   sum(subtotals) - p% of it        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Strategies are pure: same items in, same total out.

use crate::money::Money;
use crate::types::{raw_subtotal, DiscountRate, LineItem};
use crate::validation::ValidationResult;

/// Computes the products total for a set of line items.
pub trait PricingStrategy {
    fn calculate_total(&self, items: &[LineItem]) -> Money;
}

/// No discount: the sum of all subtotals.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularPricingStrategy;

impl PricingStrategy for RegularPricingStrategy {
    fn calculate_total(&self, items: &[LineItem]) -> Money {
        raw_subtotal(items)
    }
}

/// Takes a fixed percentage off the sum of all subtotals.
#[derive(Debug, Clone, Copy)]
pub struct PercentageDiscountStrategy {
    discount: DiscountRate,
}

impl PercentageDiscountStrategy {
    /// Creates the strategy. `discount_percent` must be within 0..=100.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::pricing::PercentageDiscountStrategy;
    ///
    /// assert!(PercentageDiscountStrategy::new(10.0).is_ok());
    /// assert!(PercentageDiscountStrategy::new(120.0).is_err());
    /// ```
    pub fn new(discount_percent: f64) -> ValidationResult<Self> {
        Ok(PercentageDiscountStrategy {
            discount: DiscountRate::from_percentage(discount_percent)?,
        })
    }
}

impl PricingStrategy for PercentageDiscountStrategy {
    fn calculate_total(&self, items: &[LineItem]) -> Money {
        raw_subtotal(items).apply_percentage_discount(self.discount.bps())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::types::Product;

    fn items() -> Vec<LineItem> {
        let coffee = Arc::new(Product::new("Café Especial", Money::from_cents(3500)).unwrap());
        let mug = Arc::new(Product::new("Caneca", Money::from_cents(2500)).unwrap());
        vec![
            LineItem::new(coffee, 3).unwrap(),
            LineItem::new(mug, 2).unwrap(),
        ]
    }

    #[test]
    fn test_regular_sums_subtotals() {
        assert_eq!(
            RegularPricingStrategy.calculate_total(&items()),
            Money::from_cents(15500)
        );
    }

    #[test]
    fn test_regular_empty_is_zero() {
        assert_eq!(RegularPricingStrategy.calculate_total(&[]), Money::zero());
    }

    #[test]
    fn test_ten_percent_discount() {
        let strategy = PercentageDiscountStrategy::new(10.0).unwrap();
        assert_eq!(strategy.calculate_total(&items()), Money::from_cents(13950));
    }

    #[test]
    fn test_zero_and_full_discount() {
        let none = PercentageDiscountStrategy::new(0.0).unwrap();
        let full = PercentageDiscountStrategy::new(100.0).unwrap();

        assert_eq!(none.calculate_total(&items()), Money::from_cents(15500));
        assert_eq!(full.calculate_total(&items()), Money::zero());
    }

    #[test]
    fn test_out_of_range_discount_rejected() {
        assert!(PercentageDiscountStrategy::new(-5.0).is_err());
        assert!(PercentageDiscountStrategy::new(100.5).is_err());
    }
}
