//! Property tests for the pricing and shipping arithmetic.

use std::sync::Arc;

use proptest::prelude::*;
use storefront_core::pricing::{PercentageDiscountStrategy, PricingStrategy, RegularPricingStrategy};
use storefront_core::shipping::{
    LegacyShippingAdapter, LegacyShippingService, ShippingCalculator, FLAT_SHIPPING_FEE,
    FREE_SHIPPING_THRESHOLD,
};
use storefront_core::{LineItem, Money, Order, Product, MAX_ITEM_QUANTITY};

fn line_items() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec((0i64..100_000, 1u32..50), 0..8).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (cents, qty))| {
                let product =
                    Arc::new(Product::new(format!("P{}", i), Money::from_cents(cents)).unwrap());
                LineItem::new(product, qty).unwrap()
            })
            .collect()
    })
}

fn adapter() -> LegacyShippingAdapter {
    LegacyShippingAdapter::new(Arc::new(LegacyShippingService::new()))
}

proptest! {
    #[test]
    fn subtotal_is_price_times_quantity(cents in 0i64..1_000_000, qty in 1u32..=MAX_ITEM_QUANTITY) {
        let product = Arc::new(Product::new("P", Money::from_cents(cents)).unwrap());
        let item = LineItem::new(product, qty).unwrap();
        prop_assert_eq!(item.subtotal().cents(), cents * i64::from(qty));
    }

    #[test]
    fn regular_total_is_sum_of_subtotals(items in line_items()) {
        let expected: i64 = items.iter().map(|i| i.subtotal().cents()).sum();
        prop_assert_eq!(RegularPricingStrategy.calculate_total(&items).cents(), expected);
    }

    #[test]
    fn discount_removes_percent_of_regular_total(items in line_items(), bps in 0u32..=10_000) {
        let percent = f64::from(bps) / 100.0;
        let regular = RegularPricingStrategy.calculate_total(&items).cents();
        let discounted = PercentageDiscountStrategy::new(percent)
            .unwrap()
            .calculate_total(&items)
            .cents();

        // regular * (1 - p/100), within half a cent of rounding
        let exact = regular as f64 * (1.0 - percent / 100.0);
        prop_assert!((discounted as f64 - exact).abs() <= 0.5 + 1e-6);
        prop_assert!(discounted <= regular);
        prop_assert!(discounted >= 0);
    }

    #[test]
    fn adapter_fee_is_free_or_flat(items in line_items()) {
        let raw: Money = items.iter().map(LineItem::subtotal).sum();
        let fee = adapter().calculate_shipping(&items);
        if raw >= FREE_SHIPPING_THRESHOLD {
            prop_assert_eq!(fee, Money::zero());
        } else {
            prop_assert_eq!(fee, FLAT_SHIPPING_FEE);
        }
    }

    #[test]
    fn final_total_is_products_plus_shipping(items in line_items(), bps in 0u32..=10_000) {
        let mut order = Order::new(
            Box::new(PercentageDiscountStrategy::new(f64::from(bps) / 100.0).unwrap()),
            Box::new(adapter()),
        );
        for item in items {
            order.add_item(item).unwrap();
        }
        prop_assert_eq!(order.final_total(), order.total_products() + order.shipping_cost());
    }
}
