//! # checkout
//!
//! Runs one order through a complete checkout and prints what happens.
//!
//! ## Usage
//! ```bash
//! # The demo order (10% off, PIX)
//! cargo run -p checkout-cli
//!
//! # Pay by card, no discount
//! cargo run -p checkout-cli -- --payment credit_card --regular
//!
//! # Custom order, JSON summary on stdout (notifications go to stderr)
//! cargo run -p checkout-cli -- --config ./checkout.toml --json
//! ```
//!
//! ## Log Levels
//! - Default: warnings only, on stderr
//! - `--verbose`: order lifecycle at info/debug
//! - `RUST_LOG=...`: overrides both

mod checkout;
mod config;
mod console;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{CheckoutConfig, PricingMode};
use crate::console::{ConsoleSink, Stream};

#[derive(Parser)]
#[command(name = "checkout")]
#[command(about = "Run an order through pricing, shipping and payment")]
struct Cli {
    /// Path to a checkout.toml file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Payment method (pix, credit_card)
    #[arg(long)]
    payment: Option<String>,

    /// Discount percentage, switches to percentage-discount pricing
    #[arg(long, conflicts_with = "regular")]
    discount: Option<f64>,

    /// Use regular pricing (no discount)
    #[arg(long)]
    regular: bool,

    /// Print the final order summary as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Log order lifecycle to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = CheckoutConfig::load(cli.config.as_deref())?;
    apply_cli_overrides(&mut config, &cli);
    config.validate()?;

    // With --json, stdout carries only the summary document.
    let stream = if cli.json { Stream::Stderr } else { Stream::Stdout };
    let sink = Arc::new(ConsoleSink::new(stream));

    let summary = checkout::run(&config, sink)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

fn apply_cli_overrides(config: &mut CheckoutConfig, cli: &Cli) {
    if let Some(ref method) = cli.payment {
        config.payment.method = method.clone();
    }
    if let Some(pct) = cli.discount {
        config.pricing.mode = PricingMode::PercentageDiscount;
        config.pricing.discount_percent = pct;
    }
    if cli.regular {
        config.pricing.mode = PricingMode::Regular;
    }
}

/// Filter used when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "info,storefront_core=debug,checkout_cli=debug"
    } else {
        "warn"
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
