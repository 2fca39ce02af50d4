//! # Domain Types
//!
//! Core domain types used throughout Checkout.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │      Role       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  Food           │   │  Standard       │       │
//! │  │  name           │   │  Electronics    │   │  Veteran        │       │
//! │  │  category       │   │  Luxury         │   │  Employee       │       │
//! │  │  base_price     │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │      Rate       │   Tax rates, volume rates and role rates all      │
//! │  │  bps (u32)      │   share one basis-point type.                     │
//! │  │  1500 = 15%     │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Category and Role are closed sets. Text that names neither is rejected when
//! parsed, so the engine only ever sees valid tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    validate_price, validate_product_id, validate_product_name, ValidationResult,
};

// =============================================================================
// Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1500 bps = 15%, 500 bps = 5%
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from a whole percentage (`percent(15)` = 15%).
    #[inline]
    pub const fn percent(pct: u32) -> Self {
        Rate(pct * 100)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category. Determines the tax rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Electronics,
    Luxury,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 3] = [Category::Food, Category::Electronics, Category::Luxury];

    /// Lowercase name, matching the serialized form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Electronics => "electronics",
            Category::Luxury => "luxury",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parses a category case-insensitively (`"FOOD"`, `"Food"`, `" food "`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Role
// =============================================================================

/// Customer classification. Selects the role discount and how it combines
/// with the volume discount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Standard,
    Veteran,
    Employee,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 3] = [Role::Standard, Role::Veteran, Role::Employee];

    /// Lowercase name, matching the serialized form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Standard => "standard",
            Role::Veteran => "veteran",
            Role::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Role::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "role".to_string(),
                allowed: Role::ALL.iter().map(|r| r.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product that can be placed in a cart.
///
/// ## Invariants
/// - `id` and `name` are non-empty
/// - `base_price` is never negative
///
/// Fields are private: the only way to get a `Product` is [`Product::new`],
/// which checks the invariants once. The engine relies on them and does no
/// further checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: String,
    name: String,
    category: Category,
    base_price: Money,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ```rust
    /// use checkout_core::{Category, Money, Product};
    ///
    /// let laptop = Product::new("4", "Laptop", Category::Electronics, Money::from_cents(100_000));
    /// assert!(laptop.is_ok());
    ///
    /// let bad = Product::new("x", "Refund", Category::Food, Money::from_cents(-1));
    /// assert!(bad.is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        base_price: Money,
    ) -> ValidationResult<Self> {
        let id = id.into().trim().to_string();
        let name = name.into().trim().to_string();

        validate_product_id(&id)?;
        validate_product_name(&name)?;
        validate_price(base_price)?;

        Ok(Product {
            id,
            name,
            category,
            base_price,
        })
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn base_price(&self) -> Money {
        self.base_price
    }

    /// Luxury items are left out of the volume discount base.
    #[inline]
    pub fn is_luxury(&self) -> bool {
        self.category == Category::Luxury
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_from_bps() {
        let rate = Rate::from_bps(1500);
        assert_eq!(rate.bps(), 1500);
        assert_eq!(Rate::percent(15), rate);
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::percent(20).to_string(), "20%");
        assert_eq!(Rate::from_bps(825).to_string(), "8.25%");
        assert_eq!(Rate::from_bps(505).to_string(), "5.05%");
        assert_eq!(Rate::zero().to_string(), "0%");
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("ELECTRONICS".parse::<Category>().unwrap(), Category::Electronics);
        assert_eq!(" Luxury ".parse::<Category>().unwrap(), Category::Luxury);
        assert!(matches!(
            "toys".parse::<Category>(),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("standard".parse::<Role>().unwrap(), Role::Standard);
        assert_eq!("VETERAN".parse::<Role>().unwrap(), Role::Veteran);
        assert_eq!("Employee".parse::<Role>().unwrap(), Role::Employee);

        let err = "manager".parse::<Role>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "role must be one of: [\"standard\", \"veteran\", \"employee\"]"
        );
    }

    #[test]
    fn test_role_default() {
        assert_eq!(Role::default(), Role::Standard);
    }

    #[test]
    fn test_enum_serialization() {
        assert_eq!(serde_json::to_string(&Role::Veteran).unwrap(), "\"veteran\"");
        assert_eq!(
            serde_json::to_string(&Category::Electronics).unwrap(),
            "\"electronics\""
        );
    }

    #[test]
    fn test_product_new_trims_and_keeps_fields() {
        let p = Product::new(" 1 ", " Apple ", Category::Food, Money::from_cents(50)).unwrap();
        assert_eq!(p.id(), "1");
        assert_eq!(p.name(), "Apple");
        assert_eq!(p.category(), Category::Food);
        assert_eq!(p.base_price(), Money::from_cents(50));
        assert!(!p.is_luxury());
    }

    #[test]
    fn test_product_free_item_allowed() {
        assert!(Product::new("0", "Sample", Category::Food, Money::zero()).is_ok());
    }

    #[test]
    fn test_product_rejects_invalid_input() {
        assert!(matches!(
            Product::new("1", "Apple", Category::Food, Money::from_cents(-50)),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            Product::new("", "Apple", Category::Food, Money::from_cents(50)),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            Product::new("1", "   ", Category::Food, Money::from_cents(50)),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_product_rejects_price_above_limit() {
        let yacht = Money::from_cents(i64::MAX / 2);
        assert!(matches!(
            Product::new("1", "Yacht", Category::Electronics, yacht),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
