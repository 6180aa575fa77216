//! # Checkout Wiring
//!
//! Turns a [`CheckoutConfig`] into a live `Order` and drives it through the
//! same sequence a cashier would:
//!
//! ```text
//! construct order ──► register observers ──► add items ──► print summary
//!        ──► choose payment method ──► process_order
//! ```

use std::sync::Arc;

use anyhow::Context;
use storefront_core::observer::{EmailObserver, LogObserver};
use storefront_core::payment::creator_for;
use storefront_core::pricing::{PercentageDiscountStrategy, PricingStrategy, RegularPricingStrategy};
use storefront_core::shipping::{LegacyShippingAdapter, LegacyShippingService};
use storefront_core::sink::MessageSink;
use storefront_core::{LineItem, Money, Order, OrderSummary, PaymentMethod, Product};
use tracing::info;

use crate::config::{CheckoutConfig, PricingMode};

/// Builds the order described by `config`, with observers registered and
/// every item added (and announced).
pub fn build_order(config: &CheckoutConfig, sink: &Arc<dyn MessageSink>) -> anyhow::Result<Order> {
    let pricing: Box<dyn PricingStrategy> = match config.pricing.mode {
        PricingMode::Regular => Box::new(RegularPricingStrategy),
        PricingMode::PercentageDiscount => Box::new(
            PercentageDiscountStrategy::new(config.pricing.discount_percent)
                .context("invalid discount percent")?,
        ),
    };
    let shipping = LegacyShippingAdapter::new(Arc::new(LegacyShippingService::new()));

    let mut order = Order::new(pricing, Box::new(shipping));

    if config.notifications.email {
        order.add_observer(Arc::new(EmailObserver::new(Arc::clone(sink))));
    }
    if config.notifications.log {
        order.add_observer(Arc::new(LogObserver::new(Arc::clone(sink))));
    }

    for item in &config.items {
        let price: Money = item
            .price
            .parse()
            .with_context(|| format!("price of '{}'", item.name))?;
        let product = Product::new(item.name.as_str(), price)
            .with_context(|| format!("product '{}'", item.name))?;
        let line = LineItem::new(Arc::new(product), item.quantity)
            .with_context(|| format!("quantity of '{}'", item.name))?;
        order.add_item(line)?;
    }

    Ok(order)
}

/// The three totals block shown before payment.
pub fn summary_lines(order: &Order) -> Vec<String> {
    vec![
        String::new(),
        "--- Resumo do pedido ---".to_string(),
        format!(
            "Total produtos (com estratégia): {}",
            order.total_products().format_currency()
        ),
        format!(
            "Frete (via serviço legado adaptado): {}",
            order.shipping_cost().format_currency()
        ),
        format!("Total final: {}", order.final_total().format_currency()),
        String::new(),
    ]
}

/// Runs a whole checkout and returns the paid order's summary.
pub fn run(config: &CheckoutConfig, sink: Arc<dyn MessageSink>) -> anyhow::Result<OrderSummary> {
    let mut order = build_order(config, &sink)?;
    info!(order_id = order.id(), items = order.items().len(), "Order assembled");

    for line in summary_lines(&order) {
        sink.emit(&line)?;
    }

    let method: PaymentMethod = config.payment.method.parse()?;
    sink.emit(&format!(
        "Escolhendo meio de pagamento ({})...",
        method.label()
    ))?;
    sink.emit("")?;

    let creator = creator_for(method, Arc::clone(&sink));
    Ok(order.process_order(creator.as_ref())?)
}
