//! # Checkout Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, applied by main)             │
//! │     --payment credit_card --discount 15                                │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     STOREFRONT_PAYMENT_METHOD=pix                                      │
//! │     STOREFRONT_DISCOUNT_PERCENT=10                                     │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, or ~/.config/checkout/checkout.toml (Linux)         │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     The demo order: Café Especial x3, Caneca x2, 10% off, PIX          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [pricing]
//! mode = "percentage_discount"  # regular | percentage_discount
//! discount_percent = 10.0
//!
//! [payment]
//! method = "pix"                # pix | credit_card
//!
//! [notifications]
//! email = true
//! log = true
//!
//! [[items]]
//! name = "Café Especial"
//! price = "35.00"
//! quantity = 3
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use storefront_core::validation::{
    validate_discount_percent, validate_order_size, validate_price, validate_quantity,
};
use storefront_core::Money;
use tracing::{debug, info, warn};

// =============================================================================
// Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Pricing Settings
// =============================================================================

/// Which pricing strategy the order uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    Regular,
    #[default]
    PercentageDiscount,
}

impl FromStr for PricingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(PricingMode::Regular),
            "percentage_discount" | "discount" => Ok(PricingMode::PercentageDiscount),
            other => Err(ConfigError::InvalidValue {
                field: "pricing.mode".to_string(),
                reason: format!(
                    "unknown mode '{}'. Valid options: regular, percentage_discount",
                    other
                ),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingSettings {
    #[serde(default)]
    pub mode: PricingMode,

    /// Only used in `percentage_discount` mode.
    #[serde(default = "default_discount_percent")]
    pub discount_percent: f64,
}

fn default_discount_percent() -> f64 {
    10.0
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            mode: PricingMode::default(),
            discount_percent: default_discount_percent(),
        }
    }
}

// =============================================================================
// Payment & Notification Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSettings {
    /// Payment method name. Resolved only at checkout time, so an unknown
    /// name surfaces as the core's type-mismatch error.
    #[serde(default = "default_payment_method")]
    pub method: String,
}

fn default_payment_method() -> String {
    "pix".to_string()
}

impl Default for PaymentSettings {
    fn default() -> Self {
        PaymentSettings {
            method: default_payment_method(),
        }
    }
}

/// Which observers get registered on the order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default = "default_true")]
    pub email: bool,

    #[serde(default = "default_true")]
    pub log: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings {
            email: true,
            log: true,
        }
    }
}

// =============================================================================
// Items
// =============================================================================

/// One line of the order as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub name: String,
    /// Decimal text, e.g. "35.00".
    pub price: String,
    pub quantity: u32,
}

impl ItemConfig {
    fn new(name: &str, price: &str, quantity: u32) -> Self {
        ItemConfig {
            name: name.to_string(),
            price: price.to_string(),
            quantity,
        }
    }
}

fn default_items() -> Vec<ItemConfig> {
    vec![
        ItemConfig::new("Café Especial", "35.00", 3),
        ItemConfig::new("Caneca", "25.00", 2),
    ]
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete checkout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default)]
    pub pricing: PricingSettings,

    #[serde(default)]
    pub payment: PaymentSettings,

    #[serde(default)]
    pub notifications: NotificationSettings,

    #[serde(default = "default_items")]
    pub items: Vec<ItemConfig>,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        CheckoutConfig {
            pricing: PricingSettings::default(),
            payment: PaymentSettings::default(),
            notifications: NotificationSettings::default(),
            items: default_items(),
        }
    }
}

impl CheckoutConfig {
    /// Loads configuration from file and environment on top of defaults.
    ///
    /// An explicit `config_path` must exist. The default location is
    /// optional.
    pub fn load(config_path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading checkout config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a TOML document. Missing sections fall back to defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `STOREFRONT_*` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup("STOREFRONT_PRICING_MODE") {
            match mode.parse() {
                Ok(parsed) => self.pricing.mode = parsed,
                Err(e) => warn!(mode = %mode, error = %e, "Ignoring pricing mode from environment"),
            }
        }

        if let Some(pct) = lookup("STOREFRONT_DISCOUNT_PERCENT") {
            match pct.parse::<f64>() {
                Ok(p) => {
                    debug!(discount_percent = p, "Overriding discount from environment");
                    self.pricing.discount_percent = p;
                }
                Err(_) => warn!(value = %pct, "Ignoring non-numeric STOREFRONT_DISCOUNT_PERCENT"),
            }
        }

        if let Some(method) = lookup("STOREFRONT_PAYMENT_METHOD") {
            debug!(method = %method, "Overriding payment method from environment");
            self.payment.method = method;
        }

        if let Some(flag) = lookup("STOREFRONT_NOTIFY_EMAIL") {
            if let Ok(b) = flag.parse() {
                self.notifications.email = b;
            }
        }

        if let Some(flag) = lookup("STOREFRONT_NOTIFY_LOG") {
            if let Ok(b) = flag.parse() {
                self.notifications.log = b;
            }
        }
    }

    /// Checks everything that can be checked before an order exists.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.pricing.mode == PricingMode::PercentageDiscount {
            validate_discount_percent(self.pricing.discount_percent).map_err(|e| {
                ConfigError::InvalidValue {
                    field: "pricing.discount_percent".to_string(),
                    reason: e.to_string(),
                }
            })?;
        }

        for (i, item) in self.items.iter().enumerate() {
            validate_order_size(i).map_err(|e| ConfigError::InvalidValue {
                field: "items".to_string(),
                reason: e.to_string(),
            })?;

            item.price
                .parse::<Money>()
                .and_then(validate_price)
                .map_err(|e| ConfigError::InvalidValue {
                    field: format!("items[{}].price", i),
                    reason: e.to_string(),
                })?;

            validate_quantity(item.quantity).map_err(|e| ConfigError::InvalidValue {
                field: format!("items[{}].quantity", i),
                reason: e.to_string(),
            })?;
        }

        Ok(())
    }

    /// `checkout.toml` in the platform config directory.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "checkout")
            .map(|dirs| dirs.config_dir().join("checkout.toml"))
    }
}
