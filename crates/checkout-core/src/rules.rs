//! # Pricing Rules
//!
//! The rate tables and the discount-stacking policy, in one place.
//!
//! ## Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TAX (per item, by category)                                           │
//! │    Food 0%          Electronics 15%          Luxury 20%                │
//! │                                                                         │
//! │  VOLUME (by item count, on the non-luxury subtotal)                    │
//! │    count <= 5: 0%    5 < count <= 10: 5%    count > 10: 10%            │
//! │                                                                         │
//! │  ROLE (on the full subtotal)                                           │
//! │    Standard 0%      Veteran 10%              Employee 20%              │
//! │                                                                         │
//! │  STACKING (how volume and role combine)                                │
//! │    Standard → volume only                                              │
//! │    Veteran  → volume + role                                            │
//! │    Employee → max(volume, role)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Older revisions of this system disagreed about several of these numbers
//! (Electronics at 8/10/20%, a 15% cap for veterans, a 25% employee rate).
//! The table above is the adopted set; any change to it belongs in this file
//! and its tests only.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Category, Rate, Role};

/// Carts with more items than this get the first volume tier.
pub const VOLUME_TIER_1_MIN_EXCLUSIVE: usize = 5;

/// Carts with more items than this get the second volume tier.
pub const VOLUME_TIER_2_MIN_EXCLUSIVE: usize = 10;

// =============================================================================
// Rates
// =============================================================================

/// Tax rate for a category.
pub const fn tax_rate(category: Category) -> Rate {
    match category {
        Category::Food => Rate::zero(),
        Category::Electronics => Rate::percent(15),
        Category::Luxury => Rate::percent(20),
    }
}

/// Volume discount rate for a cart of `item_count` items.
///
/// Step function: boundaries are inclusive on the lower tier, so exactly 5
/// items earn nothing and exactly 10 items earn 5%.
pub const fn volume_rate(item_count: usize) -> Rate {
    if item_count > VOLUME_TIER_2_MIN_EXCLUSIVE {
        Rate::percent(10)
    } else if item_count > VOLUME_TIER_1_MIN_EXCLUSIVE {
        Rate::percent(5)
    } else {
        Rate::zero()
    }
}

/// Role discount rate, applied to the full subtotal.
pub const fn role_rate(role: Role) -> Rate {
    match role {
        Role::Standard => Rate::zero(),
        Role::Veteran => Rate::percent(10),
        Role::Employee => Rate::percent(20),
    }
}

// =============================================================================
// Stacking
// =============================================================================

/// How the volume discount and the role discount combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackingPolicy {
    /// Only the volume discount applies.
    VolumeOnly,
    /// Both discounts apply, summed.
    Additive,
    /// Only the larger of the two applies.
    Greater,
}

impl StackingPolicy {
    /// The policy a role is priced under.
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Standard => StackingPolicy::VolumeOnly,
            Role::Veteran => StackingPolicy::Additive,
            Role::Employee => StackingPolicy::Greater,
        }
    }

    /// Combines two already-rounded discount amounts.
    pub fn combine(&self, volume_discount: Money, role_discount: Money) -> Money {
        match self {
            StackingPolicy::VolumeOnly => volume_discount,
            StackingPolicy::Additive => volume_discount + role_discount,
            StackingPolicy::Greater => volume_discount.max(role_discount),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
