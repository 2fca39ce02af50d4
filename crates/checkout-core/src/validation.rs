//! # Validation Module
//!
//! Input validation used by the value-object constructors.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI (clap)                                                   │
//! │  └── Argument shape, Role/Category text via FromStr                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Construction (THIS MODULE)                                   │
//! │  ├── Product::new → id, name, price checks                             │
//! │  └── Catalog::insert → duplicate name check                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing engine                                               │
//! │  └── No checks: every value it receives is already valid               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Longest accepted product id.
pub const MAX_PRODUCT_ID_LEN: usize = 64;

/// Highest accepted base price: $1,000,000,000.00.
///
/// Keeps cart sums inside `i64` for carts of up to tens of millions of items,
/// tax included.
pub const MAX_PRICE_CENTS: i64 = 100_000_000_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
///
/// ```rust
/// use checkout_core::validation::validate_product_id;
///
/// assert!(validate_product_id("4").is_ok());
/// assert!(validate_product_id("").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.chars().count() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
///
/// ```rust
/// use checkout_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Diamond Ring").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a base price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - At most [`MAX_PRICE_CENTS`]
///
/// ```rust
/// use checkout_core::money::Money;
/// use checkout_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// assert!(validate_price(Money::from_cents(i64::MAX)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
