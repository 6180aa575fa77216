//! End-to-end checkout tests: wiring, notification order, failure paths.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rstest::rstest;
use storefront_core::observer::{EmailObserver, LogObserver, OrderObserver};
use storefront_core::payment::{
    resolve_creator, CreditCardPaymentCreator, PaymentProcessor, PaymentProcessorCreator,
    PixPaymentCreator,
};
use storefront_core::pricing::{PercentageDiscountStrategy, PricingStrategy, RegularPricingStrategy};
use storefront_core::shipping::{LegacyShippingAdapter, LegacyShippingService};
use storefront_core::sink::MemorySink;
use storefront_core::{
    CoreError, CoreResult, LineItem, Money, Order, OrderStatus, Product,
};

// =============================================================================
// Test helpers
// =============================================================================

fn product(name: &str, price: &str) -> Arc<Product> {
    Arc::new(Product::new(name, price.parse().unwrap()).unwrap())
}

fn legacy_shipping() -> Box<LegacyShippingAdapter> {
    Box::new(LegacyShippingAdapter::new(Arc::new(LegacyShippingService::new())))
}

/// The demo order: Café Especial 35.00 x3 + Caneca 25.00 x2, 10% off.
fn demo_order(sink: &MemorySink) -> Order {
    let mut order = Order::new(
        Box::new(PercentageDiscountStrategy::new(10.0).unwrap()),
        legacy_shipping(),
    );
    order.add_observer(Arc::new(EmailObserver::new(sink.shared())));
    order.add_observer(Arc::new(LogObserver::new(sink.shared())));
    order
        .add_item(LineItem::new(product("Café Especial", "35.00"), 3).unwrap())
        .unwrap();
    order
        .add_item(LineItem::new(product("Caneca", "25.00"), 2).unwrap())
        .unwrap();
    order
}

/// Observer that always fails.
struct BrokenObserver;

impl OrderObserver for BrokenObserver {
    fn update(&self, _message: &str) -> CoreResult<()> {
        Err(CoreError::Sink("mail server unreachable".to_string()))
    }
}

/// Observer that only counts calls.
#[derive(Default)]
struct CountingObserver {
    calls: AtomicUsize,
}

impl OrderObserver for CountingObserver {
    fn update(&self, _message: &str) -> CoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Creator whose processor always declines.
struct DecliningCreator;

struct DecliningProcessor;

impl PaymentProcessor for DecliningProcessor {
    fn pay(&self, _amount: Money) -> CoreResult<()> {
        Err(CoreError::PaymentFailed {
            method: "test".to_string(),
            reason: "declined".to_string(),
        })
    }
}

impl PaymentProcessorCreator for DecliningCreator {
    fn create_processor(&self) -> Box<dyn PaymentProcessor> {
        Box::new(DecliningProcessor)
    }
}

// =============================================================================
// Scenario
// =============================================================================

#[test]
fn demo_scenario_totals() {
    let sink = MemorySink::new();
    let order = demo_order(&sink);

    assert_eq!(RegularPricingStrategy.calculate_total(order.items()), Money::from_cents(15500));
    assert_eq!(order.total_products(), Money::from_cents(13950));
    assert_eq!(order.shipping_cost(), Money::from_cents(2000));
    assert_eq!(order.final_total(), Money::from_cents(15950));
}

#[test]
fn demo_scenario_full_transcript() {
    let sink = MemorySink::new();
    let mut order = demo_order(&sink);

    let summary = order
        .process_order(&PixPaymentCreator::new(sink.shared()))
        .unwrap();

    assert_eq!(summary.status, OrderStatus::Paid);
    assert_eq!(summary.final_total, Money::from_cents(15950));
    assert_eq!(
        sink.lines(),
        vec![
            "[Email] Item adicionado: Café Especial (x3).",
            "[Log] Item adicionado: Café Especial (x3).",
            "[Email] Item adicionado: Caneca (x2).",
            "[Log] Item adicionado: Caneca (x2).",
            "[Email] Processando pedido...",
            "[Log] Processando pedido...",
            "Processando pagamento via PIX no valor de R$ 159.50...",
            "[Email] Pedido pago com sucesso. Valor final: R$ 159.50.",
            "[Log] Pedido pago com sucesso. Valor final: R$ 159.50.",
        ]
    );
}

#[rstest]
#[case::pix("pix", "PIX")]
#[case::credit_card("credit_card", "Cartão de Crédito")]
fn payment_method_by_name(#[case] name: &str, #[case] label: &str) {
    let sink = MemorySink::new();
    let mut order = demo_order(&sink);
    let creator = resolve_creator(name, sink.shared()).unwrap();

    order.process_order(creator.as_ref()).unwrap();

    let expected = format!("Processando pagamento via {} no valor de R$ 159.50...", label);
    assert!(sink.lines().contains(&expected));
}

// =============================================================================
// Observers
// =============================================================================

#[test]
fn each_add_item_reaches_every_observer_once() {
    let counter = Arc::new(CountingObserver::default());
    let mut order = Order::new(Box::new(RegularPricingStrategy), legacy_shipping());
    order.add_observer(counter.clone());

    for qty in 1..=4 {
        order
            .add_item(LineItem::new(product("Caneca", "25.00"), qty).unwrap())
            .unwrap();
    }

    assert_eq!(counter.calls.load(Ordering::SeqCst), 4);
}

#[test]
fn failing_observer_stops_later_observers() {
    let sink = MemorySink::new();
    let mut order = Order::new(Box::new(RegularPricingStrategy), legacy_shipping());
    order.add_observer(Arc::new(EmailObserver::new(sink.shared())));
    order.add_observer(Arc::new(BrokenObserver));
    order.add_observer(Arc::new(LogObserver::new(sink.shared())));

    let result = order.add_item(LineItem::new(product("Caneca", "25.00"), 1).unwrap());

    assert!(matches!(result, Err(CoreError::Sink(_))));
    assert_eq!(sink.lines(), vec!["[Email] Item adicionado: Caneca (x1)."]);
    // The item itself was still appended.
    assert_eq!(order.items().len(), 1);
}

#[test]
fn failing_observer_aborts_checkout_before_payment() {
    let sink = MemorySink::new();
    let mut order = Order::new(Box::new(RegularPricingStrategy), legacy_shipping());
    order
        .add_item(LineItem::new(product("Caneca", "25.00"), 1).unwrap())
        .unwrap();
    order.add_observer(Arc::new(BrokenObserver));

    let result = order.process_order(&PixPaymentCreator::new(sink.shared()));

    assert!(result.is_err());
    assert!(sink.lines().is_empty());
    assert_eq!(order.status(), OrderStatus::Building);
}

// =============================================================================
// Payment failures
// =============================================================================

#[test]
fn declined_payment_emits_no_success_and_stays_building() {
    let sink = MemorySink::new();
    let mut order = demo_order(&sink);

    let err = order.process_order(&DecliningCreator).unwrap_err();

    assert!(matches!(err, CoreError::PaymentFailed { .. }));
    assert_eq!(order.status(), OrderStatus::Building);
    let lines = sink.lines();
    assert_eq!(lines.last().map(String::as_str), Some("[Log] Processando pedido..."));
    assert!(!lines.iter().any(|l| l.contains("Pedido pago")));
}

#[test]
fn unknown_payment_method_is_type_mismatch_and_order_untouched() {
    let sink = MemorySink::new();
    let order = demo_order(&sink);
    let before = sink.lines();

    let err = resolve_creator("boleto", sink.shared()).err().unwrap();

    assert!(matches!(err, CoreError::TypeMismatch { .. }));
    assert_eq!(sink.lines(), before);
    assert!(!sink.lines().iter().any(|l| l.contains("Pedido pago")));
    assert_eq!(order.status(), OrderStatus::Building);
}

#[test]
fn credit_card_creator_builds_card_processor() {
    let sink = MemorySink::new();
    let creator = CreditCardPaymentCreator::new(sink.shared());
    creator.create_processor().pay(Money::from_cents(999)).unwrap();

    assert_eq!(
        sink.lines(),
        vec!["Processando pagamento via Cartão de Crédito no valor de R$ 9.99..."]
    );
}

// =============================================================================
// Shipping threshold through the order
// =============================================================================

#[rstest]
#[case::below("199.99", "20.00")]
#[case::exactly_at("200.00", "0.00")]
#[case::above("250.00", "0.00")]
fn order_shipping_threshold(#[case] price: &str, #[case] fee: &str) {
    let mut order = Order::new(Box::new(RegularPricingStrategy), legacy_shipping());
    order
        .add_item(LineItem::new(product("Item", price), 1).unwrap())
        .unwrap();

    assert_eq!(order.shipping_cost(), fee.parse::<Money>().unwrap());
}

#[test]
fn discount_does_not_affect_free_shipping_threshold() {
    // Raw 200.00 ships free even though the discounted total is 180.00.
    let mut order = Order::new(
        Box::new(PercentageDiscountStrategy::new(10.0).unwrap()),
        legacy_shipping(),
    );
    order
        .add_item(LineItem::new(product("Item", "100.00"), 2).unwrap())
        .unwrap();

    assert_eq!(order.total_products(), Money::from_cents(18000));
    assert_eq!(order.shipping_cost(), Money::zero());
}

#[test]
fn totals_follow_items_added_later() {
    let sink = MemorySink::new();
    let mut order = demo_order(&sink);
    let before = order.total_products();

    order
        .add_item(LineItem::new(product("Filtro", "10.00"), 1).unwrap())
        .unwrap();

    assert_ne!(order.total_products(), before);
    assert_eq!(order.total_products(), Money::from_cents(13950 + 900));
}
