//! # Pricing Engine
//!
//! Turns a cart and a customer role into a [`Receipt`].
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cart: &[Product], role: Role                                          │
//! │       │                                                                 │
//! │       ▼  one pass over the items                                       │
//! │  subtotal, tax (per item), non-luxury subtotal, item count             │
//! │       │                                                                 │
//! │       ├──► volume_rate(count) × non-luxury subtotal ──► volume disc.   │
//! │       │                                                                 │
//! │       └──► role_rate(role) × subtotal ─────────────────► role disc.    │
//! │                                                                         │
//! │  StackingPolicy::for_role(role).combine(volume, role) ──► discount     │
//! │                                                                         │
//! │  grand_total = subtotal + tax - discount                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//! Each percentage is applied once and rounded half-up to the cent: tax per
//! item, volume discount once, role discount once. Everything after that is
//! integer addition, so the receipt balances to the cent.
//!
//! The engine is a pure function of its inputs. It holds no state, performs
//! no I/O and can be called from any thread.

use serde::Serialize;

use crate::money::Money;
use crate::receipt::Receipt;
use crate::rules::{self, StackingPolicy};
use crate::types::{Product, Rate, Role};

/// Every intermediate value of one pricing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct PriceBreakdown {
    pub role: Role,
    /// Number of items, luxury included.
    pub item_count: usize,
    pub subtotal: Money,
    /// Base for the volume discount.
    pub non_luxury_subtotal: Money,
    pub tax: Money,
    pub volume_rate: Rate,
    pub volume_discount: Money,
    pub role_rate: Rate,
    pub role_discount: Money,
    pub stacking: StackingPolicy,
    /// What the customer actually gets off.
    pub discount: Money,
}

impl PriceBreakdown {
    /// The receipt for this breakdown.
    pub fn receipt(&self) -> Receipt {
        Receipt::new(self.subtotal, self.tax, self.discount)
    }
}

/// Prices a cart for a role.
///
/// ```rust
/// use checkout_core::{calculate, Category, Money, Product, Role};
///
/// let tv = Product::new("7", "Monitor", Category::Electronics, Money::from_cents(10_000)).unwrap();
/// let receipt = calculate(&[tv], Role::Standard);
///
/// assert_eq!(receipt.subtotal().cents(), 10_000);
/// assert_eq!(receipt.tax().cents(), 1_500);
/// assert_eq!(receipt.grand_total().cents(), 11_500);
/// ```
pub fn calculate(cart: &[Product], role: Role) -> Receipt {
    price_breakdown(cart, role).receipt()
}

/// Prices a cart for a role and returns every intermediate value.
pub fn price_breakdown(cart: &[Product], role: Role) -> PriceBreakdown {
    let mut subtotal = Money::zero();
    let mut non_luxury_subtotal = Money::zero();
    let mut tax = Money::zero();

    for product in cart {
        let price = product.base_price();
        subtotal += price;
        tax += price.apply_rate(rules::tax_rate(product.category()));
        if !product.is_luxury() {
            non_luxury_subtotal += price;
        }
    }

    let item_count = cart.len();

    let volume_rate = rules::volume_rate(item_count);
    let volume_discount = non_luxury_subtotal.apply_rate(volume_rate);

    let role_rate = rules::role_rate(role);
    let role_discount = subtotal.apply_rate(role_rate);

    let stacking = StackingPolicy::for_role(role);
    let discount = stacking.combine(volume_discount, role_discount);

    PriceBreakdown {
        role,
        item_count,
        subtotal,
        non_luxury_subtotal,
        tax,
        volume_rate,
        volume_discount,
        role_rate,
        role_discount,
        stacking,
        discount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
