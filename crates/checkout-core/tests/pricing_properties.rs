//! Property tests for the pricing engine.

use checkout_core::{calculate, Category, Money, Product, Role};
use proptest::prelude::*;

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Food),
        Just(Category::Electronics),
        Just(Category::Luxury),
    ]
}

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Standard), Just(Role::Veteran), Just(Role::Employee)]
}

fn arb_product() -> impl Strategy<Value = Product> {
    (arb_category(), 0i64..=1_000_000).prop_map(|(category, cents)| {
        Product::new("p", "Item", category, Money::from_cents(cents)).unwrap()
    })
}

fn arb_cart() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(arb_product(), 0..25)
}

fn scaled(cart: &[Product], factor: i64) -> Vec<Product> {
    cart.iter()
        .map(|p| Product::new(p.id(), p.name(), p.category(), p.base_price() * factor).unwrap())
        .collect()
}

proptest! {
    #[test]
    fn receipt_balances_exactly(cart in arb_cart(), role in arb_role()) {
        let r = calculate(&cart, role);
        prop_assert_eq!(r.subtotal() + r.tax() - r.discount(), r.grand_total());
    }

    #[test]
    fn amounts_are_never_negative(cart in arb_cart(), role in arb_role()) {
        let r = calculate(&cart, role);
        prop_assert!(!r.subtotal().is_negative());
        prop_assert!(!r.tax().is_negative());
        prop_assert!(!r.discount().is_negative());
        prop_assert!(!r.grand_total().is_negative());
        prop_assert!(r.discount() <= r.subtotal());
    }

    #[test]
    fn calculation_is_deterministic(cart in arb_cart(), role in arb_role()) {
        prop_assert_eq!(calculate(&cart, role), calculate(&cart, role));
    }

    #[test]
    fn discount_never_drops_when_an_item_is_added(
        cart in arb_cart(),
        extra in arb_product(),
        role in arb_role()
    ) {
        let before = calculate(&cart, role).discount();

        let mut bigger = cart.clone();
        bigger.push(extra);
        let after = calculate(&bigger, role).discount();

        prop_assert!(after >= before);
    }

    #[test]
    fn discount_never_drops_when_prices_scale_up(
        cart in arb_cart(),
        factor in 1i64..=10,
        role in arb_role()
    ) {
        let before = calculate(&cart, role).discount();
        let after = calculate(&scaled(&cart, factor), role).discount();
        prop_assert!(after >= before);
    }

    #[test]
    fn tax_ignores_role(cart in arb_cart()) {
        let tax = calculate(&cart, Role::Standard).tax();
        prop_assert_eq!(calculate(&cart, Role::Veteran).tax(), tax);
        prop_assert_eq!(calculate(&cart, Role::Employee).tax(), tax);
    }

    #[test]
    fn discounted_roles_never_pay_more_than_standard(cart in arb_cart()) {
        let standard = calculate(&cart, Role::Standard).grand_total();
        prop_assert!(calculate(&cart, Role::Veteran).grand_total() <= standard);
        prop_assert!(calculate(&cart, Role::Employee).grand_total() <= standard);
    }
}
