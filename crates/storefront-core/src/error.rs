//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Checkout flow failures                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  checkout-cli errors (app)                                             │
//! │  └── ConfigError      - Config file / environment problems             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (CLI exit code)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in the checkout flow catches these. A failing observer, sink or
//! payment processor aborts the rest of the call it happened in.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Checkout flow errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A value handed across a dynamic boundary is not the capability the
    /// caller asked for.
    ///
    /// ## When This Occurs
    /// - A payment method chosen by name (config file, CLI flag) does not
    ///   resolve to any `PaymentProcessorCreator`
    #[error("Type mismatch: expected {expected}, got '{found}'")]
    TypeMismatch { expected: String, found: String },

    /// An output sink refused a line.
    #[error("Notification sink failed: {0}")]
    Sink(String),

    /// A payment processor could not complete the charge.
    #[error("Payment via {method} failed: {reason}")]
    PaymentFailed { method: String, reason: String },

    /// Order is not in a state that allows the requested operation.
    ///
    /// ## When This Occurs
    /// - Calling `process_order` on an order that was already paid
    #[error("Order {order_id} is {current_status}, cannot perform operation")]
    InvalidOrderStatus {
        order_id: String,
        current_status: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised by constructors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a price that is not a decimal number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
