//! # checkout
//!
//! Prices a cart from the seeded catalog and prints the receipt.
//!
//! ```text
//! $ checkout --role veteran Apple Apple Apple Laptop
//! Processing cart for veteran
//! Items: 3 x Apple, 1 x Laptop
//! Receipt:
//!   Subtotal:        1001.50
//!   Tax:             150.00
//!   Discounts:      -100.15
//!   ----------------------
//!   Grand Total:     1051.35
//! ```

use std::io;

use anyhow::Context;
use checkout_cli::{init_tracing, run, Cli, CliConfig};
use checkout_core::Catalog;
use clap::Parser;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load().context("Failed to load configuration")?;
    init_tracing(&config);

    info!(
        default_role = %config.default_role,
        output = ?config.output,
        "Configuration loaded"
    );

    let catalog = Catalog::seeded();
    info!(products = catalog.len(), "Catalog ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &config, &catalog, &mut out)
}
