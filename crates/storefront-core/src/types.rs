//! # Domain Types
//!
//! Value types shared by the pricing, shipping, payment and order modules.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │◄──│    LineItem     │   │  DiscountRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  product (Arc)  │   │  bps (u32)      │       │
//! │  │  name           │   │  quantity       │   │  1000 = 10%     │       │
//! │  │  price          │   │  subtotal()     │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │   OrderStatus   │   │ PaymentMethod   │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  Building       │   │  Pix            │                              │
//! │  │  Paid           │   │  CreditCard     │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::money::Money;
use crate::validation::{
    validate_discount_percent, validate_price, validate_product_name, validate_quantity,
    ValidationResult,
};

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10%. Always within 0..=10000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from a percentage such as `10.0` or `12.5`.
    pub fn from_percentage(pct: f64) -> ValidationResult<Self> {
        validate_discount_percent(pct)?;
        Ok(DiscountRate((pct * 100.0).round() as u32))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product that can be put on an order.
///
/// Immutable once created. Line items share it through an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: String,
    name: String,
    price: Money,
}

impl Product {
    /// Creates a product with a fresh UUID.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, Product};
    ///
    /// let coffee = Product::new("Café Especial", Money::from_cents(3500)).unwrap();
    /// assert_eq!(coffee.name(), "Café Especial");
    /// assert!(Product::new("", Money::zero()).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: Money) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;

        Ok(Product {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            price,
        })
    }

    /// Unique identifier (UUID v4).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name used in notifications.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A product plus a purchased quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    product: Arc<Product>,
    quantity: u32,
}

impl LineItem {
    /// Creates a line item. Quantity must be within 1..=999.
    pub fn new(product: Arc<Product>, quantity: u32) -> ValidationResult<Self> {
        validate_quantity(quantity)?;
        Ok(LineItem { product, quantity })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `product.price * quantity`, exact.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

/// Sum of raw subtotals, before any pricing strategy.
pub fn raw_subtotal(items: &[LineItem]) -> Money {
    items.iter().map(LineItem::subtotal).sum()
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle of an order.
///
/// The "priced" stage is implicit: totals can be read at any time while
/// building, and are always recomputed from the current items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Items and observers can still be added.
    #[default]
    Building,
    /// A payment went through.
    Paid,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Building => write!(f, "building"),
            OrderStatus::Paid => write!(f, "paid"),
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// Payment methods a creator can be resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Brazilian instant payment.
    Pix,
    /// Credit card charge.
    CreditCard,
}

impl PaymentMethod {
    /// Human label used in payment messages.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "PIX",
            PaymentMethod::CreditCard => "Cartão de Crédito",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Pix => write!(f, "pix"),
            PaymentMethod::CreditCard => write!(f, "credit_card"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pix" => Ok(PaymentMethod::Pix),
            "credit_card" | "credit-card" | "credit" | "card" => Ok(PaymentMethod::CreditCard),
            other => Err(CoreError::TypeMismatch {
                expected: "PaymentProcessorCreator".to_string(),
                found: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
