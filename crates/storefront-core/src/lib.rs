//! # storefront-core: Checkout Orchestration
//!
//! One order, one synchronous checkout. The order is assembled from
//! pluggable pieces and sequences them:
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Checkout                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 checkout-cli (apps/checkout-cli)                │   │
//! │  │    config ──► wiring ──► summary lines ──► process_order        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │ shipping  │  │ observer  │  │  payment  │  │   │
//! │  │   │ Strategy  │  │ Adapter   │  │ Observer  │  │ Factory   │  │   │
//! │  │   └─────┬─────┘  └─────┬─────┘  └─────┬─────┘  └─────┬─────┘  │   │
//! │  │         └──────────────┴──────┬───────┴──────────────┘        │   │
//! │  │                          ┌────▼────┐                          │   │
//! │  │                          │  order  │                          │   │
//! │  │                          └─────────┘                          │   │
//! │  │   NO I/O • output only through an injected MessageSink       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Integer-cents `Money`
//! - [`types`] - `Product`, `LineItem`, `OrderStatus`, `PaymentMethod`
//! - [`pricing`] - Pricing strategies
//! - [`shipping`] - Legacy shipping service and its adapter
//! - [`observer`] - Order observers
//! - [`payment`] - Payment processors and their creators
//! - [`order`] - The `Order` itself
//! - [`sink`] - Output channels
//! - [`error`] / [`validation`] - Errors and constructor checks
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use storefront_core::observer::LogObserver;
//! use storefront_core::payment::PixPaymentCreator;
//! use storefront_core::pricing::PercentageDiscountStrategy;
//! use storefront_core::shipping::{LegacyShippingAdapter, LegacyShippingService};
//! use storefront_core::sink::MemorySink;
//! use storefront_core::{LineItem, Money, Order, Product};
//!
//! let sink = MemorySink::new();
//! let mut order = Order::new(
//!     Box::new(PercentageDiscountStrategy::new(10.0).unwrap()),
//!     Box::new(LegacyShippingAdapter::new(Arc::new(LegacyShippingService::new()))),
//! );
//! order.add_observer(Arc::new(LogObserver::new(sink.shared())));
//!
//! let coffee = Arc::new(Product::new("Café Especial", Money::from_cents(3500)).unwrap());
//! order.add_item(LineItem::new(coffee, 3).unwrap()).unwrap();
//!
//! assert_eq!(order.final_total(), Money::from_cents(11450)); // 94.50 + 20.00
//! order.process_order(&PixPaymentCreator::new(sink.shared())).unwrap();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod observer;
pub mod order;
pub mod payment;
pub mod pricing;
pub mod shipping;
pub mod sink;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderSummary};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency prefix for every amount shown to a customer.
///
/// The store trades in a single currency.
pub const CURRENCY_SYMBOL: &str = "R$";

/// Longest product name accepted by `Product::new`.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Highest unit price accepted by `Product::new`: R$ 1,000,000.00.
///
/// Together with [`MAX_ITEM_QUANTITY`] and [`MAX_ORDER_ITEMS`] this keeps
/// every total far inside `i64` cents.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// Highest quantity on a single line item.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Most line items a single order can hold.
pub const MAX_ORDER_ITEMS: usize = 100;
