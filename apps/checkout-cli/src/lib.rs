//! # checkout-cli
//!
//! Command-line front end for checkout-core.
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse arguments (clap)                                              │
//! │  2. Load CliConfig from CHECKOUT_* environment variables                │
//! │  3. Initialize tracing (RUST_LOG wins, else CHECKOUT_LOG)               │
//! │  4. Build the seeded catalog                                            │
//! │  5. run(): resolve names ──► price ──► write receipt to stdout          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `main.rs` only wires real stdout and the real environment into [`run`];
//! everything else lives here so tests can drive it in-process.

pub mod cli;
pub mod config;

use std::io::Write;

use anyhow::Context;
use checkout_core::{price_breakdown, Catalog, Product, Receipt, Role};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub use cli::{Cli, OutputFormat};
pub use config::{CliConfig, ConfigError};

/// Cart priced when no items are given on the command line.
pub const DEMO_CART: [&str; 4] = ["Apple", "Apple", "Apple", "Laptop"];

/// Role the demo cart is priced for when `--role` is absent.
pub const DEMO_ROLE: Role = Role::Veteran;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (one line per resolved item)
/// - `CHECKOUT_LOG=...` - Used when `RUST_LOG` is unset
/// - Default: `warn,checkout=info,checkout_cli=info`
///
/// Logs go to stderr so stdout carries only the receipt.
pub fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// JSON output shape.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    role: Role,
    items: &'a [&'a str],
    receipt: Receipt,
}

/// Executes one invocation: list the catalog, or price a cart and print it.
pub fn run<W: Write>(
    cli: &Cli,
    config: &CliConfig,
    catalog: &Catalog,
    out: &mut W,
) -> anyhow::Result<()> {
    if cli.list {
        return write_catalog(catalog, out);
    }

    let format = cli.format.unwrap_or(config.output);

    let (names, role): (Vec<&str>, Role) = if cli.items.is_empty() {
        info!("No items given, pricing the demo cart");
        (DEMO_CART.to_vec(), cli.role.unwrap_or(DEMO_ROLE))
    } else {
        (
            cli.items.iter().map(String::as_str).collect(),
            cli.role.unwrap_or(config.default_role),
        )
    };

    let cart = catalog
        .resolve_cart(names.iter().copied())
        .context("Could not build cart")?;

    for product in &cart {
        debug!(
            id = product.id(),
            name = product.name(),
            category = %product.category(),
            price = %product.base_price(),
            "Resolved item"
        );
    }

    let breakdown = price_breakdown(&cart, role);
    info!(
        %role,
        items = breakdown.item_count,
        subtotal = %breakdown.subtotal,
        tax = %breakdown.tax,
        volume_rate = %breakdown.volume_rate,
        volume_discount = %breakdown.volume_discount,
        role_rate = %breakdown.role_rate,
        role_discount = %breakdown.role_discount,
        discount = %breakdown.discount,
        stacking = ?breakdown.stacking,
        "Cart priced"
    );

    let receipt = breakdown.receipt();
    match format {
        OutputFormat::Text => {
            writeln!(out, "Processing cart for {}", role)?;
            writeln!(out, "Items: {}", summarize_items(&names))?;
            writeln!(out, "{}", receipt)?;
        }
        OutputFormat::Json => {
            let report = JsonReport {
                role,
                items: &names,
                receipt,
            };
            serde_json::to_writer_pretty(&mut *out, &report)
                .context("Could not serialize receipt")?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Writes one line per catalog product: name, category, price.
fn write_catalog<W: Write>(catalog: &Catalog, out: &mut W) -> anyhow::Result<()> {
    let width = catalog
        .products()
        .map(|p| p.name().chars().count())
        .max()
        .unwrap_or(0);

    for product in catalog.products() {
        writeln!(out, "{}", catalog_line(product, width))?;
    }
    Ok(())
}

fn catalog_line(product: &Product, width: usize) -> String {
    format!(
        "{:<width$}  {:<11}  {:>10}",
        product.name(),
        product.category().as_str(),
        product.base_price().to_plain_string(),
        width = width
    )
}

/// `["Apple", "Apple", "Laptop"]` → `"2 x Apple, 1 x Laptop"`, in first-seen order.
pub fn summarize_items(names: &[&str]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for &name in names {
        match counts.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name, 1)),
        }
    }

    if counts.is_empty() {
        return "(none)".to_string();
    }

    counts
        .iter()
        .map(|(name, count)| format!("{} x {}", count, name))
        .collect::<Vec<_>>()
        .join(", ")
}
