//! # Payment Processing
//!
//! Factory Method over payment processors.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order::process_order(&creator)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  creator.process_payment(amount)        (provided trait method)         │
//! │       │                                                                 │
//! │       ├── create_processor()            (each creator picks one)        │
//! │       │     PixPaymentCreator        ──► PixPaymentProcessor            │
//! │       │     CreditCardPaymentCreator ──► CreditCardPaymentProcessor     │
//! │       │                                                                 │
//! │       └── processor.pay(amount)                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order only ever sees `dyn PaymentProcessorCreator`. Choosing a
//! creator by name (config file, CLI flag) goes through [`resolve_creator`],
//! which is where an unknown name turns into `CoreError::TypeMismatch`.

use std::sync::Arc;

use tracing::debug;

use crate::error::CoreResult;
use crate::money::Money;
use crate::sink::MessageSink;
use crate::types::PaymentMethod;

// =============================================================================
// Processors
// =============================================================================

/// Executes a payment for a final amount.
pub trait PaymentProcessor {
    fn pay(&self, amount: Money) -> CoreResult<()>;
}

fn payment_line(method: PaymentMethod, amount: Money) -> String {
    format!(
        "Processando pagamento via {} no valor de {}...",
        method.label(),
        amount.format_currency()
    )
}

/// Charges through PIX.
pub struct PixPaymentProcessor {
    sink: Arc<dyn MessageSink>,
}

impl PixPaymentProcessor {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        PixPaymentProcessor { sink }
    }
}

impl PaymentProcessor for PixPaymentProcessor {
    fn pay(&self, amount: Money) -> CoreResult<()> {
        debug!(%amount, method = %PaymentMethod::Pix, "Charging");
        self.sink.emit(&payment_line(PaymentMethod::Pix, amount))
    }
}

/// Charges a credit card.
pub struct CreditCardPaymentProcessor {
    sink: Arc<dyn MessageSink>,
}

impl CreditCardPaymentProcessor {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        CreditCardPaymentProcessor { sink }
    }
}

impl PaymentProcessor for CreditCardPaymentProcessor {
    fn pay(&self, amount: Money) -> CoreResult<()> {
        debug!(%amount, method = %PaymentMethod::CreditCard, "Charging");
        self.sink.emit(&payment_line(PaymentMethod::CreditCard, amount))
    }
}

// =============================================================================
// Creators
// =============================================================================

/// Decides which `PaymentProcessor` to build and drives the payment.
pub trait PaymentProcessorCreator {
    /// The factory method.
    fn create_processor(&self) -> Box<dyn PaymentProcessor>;

    /// Builds a processor and pays with it.
    fn process_payment(&self, amount: Money) -> CoreResult<()> {
        let processor = self.create_processor();
        processor.pay(amount)
    }
}

pub struct PixPaymentCreator {
    sink: Arc<dyn MessageSink>,
}

impl PixPaymentCreator {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        PixPaymentCreator { sink }
    }
}

impl PaymentProcessorCreator for PixPaymentCreator {
    fn create_processor(&self) -> Box<dyn PaymentProcessor> {
        Box::new(PixPaymentProcessor::new(Arc::clone(&self.sink)))
    }
}

pub struct CreditCardPaymentCreator {
    sink: Arc<dyn MessageSink>,
}

impl CreditCardPaymentCreator {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        CreditCardPaymentCreator { sink }
    }
}

impl PaymentProcessorCreator for CreditCardPaymentCreator {
    fn create_processor(&self) -> Box<dyn PaymentProcessor> {
        Box::new(CreditCardPaymentProcessor::new(Arc::clone(&self.sink)))
    }
}

// =============================================================================
// Dynamic Boundary
// =============================================================================

/// Returns the creator for a known payment method.
pub fn creator_for(
    method: PaymentMethod,
    sink: Arc<dyn MessageSink>,
) -> Box<dyn PaymentProcessorCreator> {
    match method {
        PaymentMethod::Pix => Box::new(PixPaymentCreator::new(sink)),
        PaymentMethod::CreditCard => Box::new(CreditCardPaymentCreator::new(sink)),
    }
}

/// Resolves a creator from a method name such as `"pix"` or `"credit_card"`.
///
/// ## Example
/// ```rust
/// use storefront_core::payment::resolve_creator;
/// use storefront_core::sink::MemorySink;
/// use storefront_core::CoreError;
///
/// let sink = MemorySink::new();
/// assert!(resolve_creator("pix", sink.shared()).is_ok());
/// assert!(matches!(
///     resolve_creator("boleto", sink.shared()),
///     Err(CoreError::TypeMismatch { .. })
/// ));
/// ```
pub fn resolve_creator(
    name: &str,
    sink: Arc<dyn MessageSink>,
) -> CoreResult<Box<dyn PaymentProcessorCreator>> {
    let method: PaymentMethod = name.parse()?;
    Ok(creator_for(method, sink))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::sink::MemorySink;

    #[test]
    fn test_pix_creator_pays_via_pix() {
        let sink = MemorySink::new();
        PixPaymentCreator::new(sink.shared())
            .process_payment(Money::from_cents(15950))
            .unwrap();

        assert_eq!(
            sink.lines(),
            vec!["Processando pagamento via PIX no valor de R$ 159.50..."]
        );
    }

    #[test]
    fn test_credit_card_creator_pays_via_card() {
        let sink = MemorySink::new();
        CreditCardPaymentCreator::new(sink.shared())
            .process_payment(Money::from_cents(2000))
            .unwrap();

        assert_eq!(
            sink.lines(),
            vec!["Processando pagamento via Cartão de Crédito no valor de R$ 20.00..."]
        );
    }

    #[test]
    fn test_resolve_creator_by_name() {
        let sink = MemorySink::new();
        resolve_creator("credit_card", sink.shared())
            .unwrap()
            .process_payment(Money::from_cents(100))
            .unwrap();

        assert!(sink.lines()[0].contains("Cartão de Crédito"));
    }

    #[test]
    fn test_resolve_unknown_creator_is_type_mismatch() {
        let sink = MemorySink::new();
        let err = resolve_creator("cheque", sink.shared()).err().unwrap();

        assert!(matches!(err, CoreError::TypeMismatch { .. }));
        assert!(sink.lines().is_empty());
    }
}
