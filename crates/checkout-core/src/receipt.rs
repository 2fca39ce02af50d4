//! # Receipt
//!
//! The engine's output value and its printed form.
//!
//! ```text
//! Receipt:
//!   Subtotal:        1001.50
//!   Tax:             150.00
//!   Discounts:      -100.15
//!   ----------------------
//!   Grand Total:     1051.35
//! ```

use serde::Serialize;
use std::fmt;

use crate::money::Money;

/// Totals for one priced cart.
///
/// ## Invariant
/// `grand_total == subtotal + tax - discount`, exactly, in cents.
///
/// Only the pricing engine builds receipts, and it derives `grand_total` from
/// the other three, so the invariant cannot be broken from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Receipt {
    subtotal: Money,
    tax: Money,
    discount: Money,
    grand_total: Money,
}

impl Receipt {
    pub(crate) fn new(subtotal: Money, tax: Money, discount: Money) -> Self {
        Receipt {
            subtotal,
            tax,
            discount,
            grand_total: subtotal + tax - discount,
        }
    }

    /// A receipt with every field zero (the empty cart).
    pub const fn zero() -> Self {
        Receipt {
            subtotal: Money::zero(),
            tax: Money::zero(),
            discount: Money::zero(),
            grand_total: Money::zero(),
        }
    }

    /// Sum of base prices, before tax and discount.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    #[inline]
    pub fn tax(&self) -> Money {
        self.tax
    }

    /// Combined discount. Printed with a leading minus.
    #[inline]
    pub fn discount(&self) -> Money {
        self.discount
    }

    #[inline]
    pub fn grand_total(&self) -> Money {
        self.grand_total
    }
}

/// Fixed two-decimal receipt lines. Display only.
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Receipt:")?;
        writeln!(f, "  Subtotal:        {}", self.subtotal.to_plain_string())?;
        writeln!(f, "  Tax:             {}", self.tax.to_plain_string())?;
        writeln!(f, "  Discounts:      -{}", self.discount.to_plain_string())?;
        writeln!(f, "  ----------------------")?;
        write!(f, "  Grand Total:     {}", self.grand_total.to_plain_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grand_total_derived() {
        let receipt = Receipt::new(
            Money::from_cents(100_150),
            Money::from_cents(15_000),
            Money::from_cents(10_015),
        );
        assert_eq!(receipt.grand_total().cents(), 105_135);
    }

    #[test]
    fn test_zero() {
        let zero = Receipt::zero();
        assert_eq!(zero, Receipt::new(Money::zero(), Money::zero(), Money::zero()));
        assert!(zero.grand_total().is_zero());
    }

    #[test]
    fn test_display_format() {
        let receipt = Receipt::new(
            Money::from_cents(100_150),
            Money::from_cents(15_000),
            Money::from_cents(10_015),
        );
        let expected = "Receipt:\n\
                        \x20 Subtotal:        1001.50\n\
                        \x20 Tax:             150.00\n\
                        \x20 Discounts:      -100.15\n\
                        \x20 ----------------------\n\
                        \x20 Grand Total:     1051.35";
        assert_eq!(receipt.to_string(), expected);
    }

    #[test]
    fn test_serializes_as_cents() {
        let receipt = Receipt::new(Money::from_cents(6000), Money::zero(), Money::from_cents(300));
        let json = serde_json::to_value(receipt).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "subtotal": 6000,
                "tax": 0,
                "discount": 300,
                "grand_total": 5700
            })
        );
    }
}
