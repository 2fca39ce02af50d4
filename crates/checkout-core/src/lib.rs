//! # checkout-core: Pure Pricing Logic for Checkout
//!
//! This crate turns a cart of products and a customer role into a receipt:
//! subtotal, tax, discount and grand total. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    checkout-cli                                 │   │
//! │  │    args ──► config ──► resolve names ──► print receipt          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │ calculate │  │  lookup   │  │   │
//! │  │   │ Category  │  │   Rate    │  │   rules   │  │   seed    │  │   │
//! │  │   │   Role    │  │           │  │  Receipt  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Role, Rate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`rules`] - Tax, volume and role rates; discount stacking policy
//! - [`pricing`] - The engine: `calculate` and `price_breakdown`
//! - [`receipt`] - Receipt value and its printed form
//! - [`catalog`] - In-memory product lookup and the standard seed
//! - [`error`] - Domain error types
//! - [`validation`] - Construction-time checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same cart and role, same receipt
//! 2. **Integer Money**: all amounts are cents (i64); rates are basis points
//! 3. **Validate Once**: bad input is rejected when a `Product` or `Role` is
//!    built, so the engine never fails
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{calculate, Catalog, Role};
//!
//! let catalog = Catalog::seeded();
//! let cart = catalog.resolve_cart(["Apple", "Apple", "Apple", "Laptop"]).unwrap();
//!
//! let receipt = calculate(&cart, Role::Veteran);
//!
//! // 3 × $0.50 + $1000.00, 15% tax on the laptop, 10% veteran discount
//! assert_eq!(receipt.subtotal().cents(), 100_150);
//! assert_eq!(receipt.tax().cents(), 15_000);
//! assert_eq!(receipt.discount().cents(), 10_015);
//! assert_eq!(receipt.grand_total().cents(), 105_135);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{calculate, price_breakdown, PriceBreakdown};
pub use receipt::Receipt;
pub use rules::StackingPolicy;
pub use types::*;
