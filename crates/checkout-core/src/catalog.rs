//! # Catalog
//!
//! In-memory product lookup by name.
//!
//! The catalog is a plain value: whoever needs one builds it and passes it
//! along by reference. There is no global instance. The pricing engine never
//! sees it; callers resolve names to [`Product`]s first and hand the engine a
//! slice.
//!
//! ```text
//! "Apple" "Apple" "Laptop"
//!        │
//!        ▼  Catalog::resolve_cart
//! [Product(Apple), Product(Apple), Product(Laptop)]
//!        │
//!        ▼  pricing::calculate
//! Receipt
//! ```

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Category, Product};
use crate::validation::ValidationResult;

/// Products keyed by exact display name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<String, Product>,
}

/// Standard seed: (id, name, category, price in cents).
const SEED: &[(&str, &str, Category, i64)] = &[
    ("1", "Apple", Category::Food, 50),
    ("2", "Banana", Category::Food, 40),
    ("3", "Bread", Category::Food, 250),
    ("4", "Laptop", Category::Electronics, 100_000),
    ("5", "Mouse", Category::Electronics, 2_500),
    ("6", "Keyboard", Category::Electronics, 5_000),
    ("7", "Monitor", Category::Electronics, 20_000),
    ("8", "Diamond Ring", Category::Luxury, 500_000),
    ("9", "Gold Watch", Category::Luxury, 250_000),
    ("10", "Perfume", Category::Luxury, 10_000),
];

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the standard ten-product catalog (food, electronics, luxury).
    pub fn seeded() -> Self {
        let mut catalog = Catalog::new();
        for &(id, name, category, cents) in SEED {
            let product = Product::new(id, name, category, Money::from_cents(cents));
            debug_assert!(product.is_ok(), "invalid seed row: {name}");
            if let Ok(product) = product {
                let inserted = catalog.insert(product);
                debug_assert!(inserted.is_ok(), "duplicate seed row: {name}");
            }
        }
        catalog
    }

    /// Adds a product. Names must be unique.
    pub fn insert(&mut self, product: Product) -> ValidationResult<()> {
        if self.products.contains_key(product.name()) {
            return Err(ValidationError::Duplicate {
                field: "product name".to_string(),
                value: product.name().to_string(),
            });
        }
        self.products.insert(product.name().to_string(), product);
        Ok(())
    }

    /// Finds a product by exact name.
    pub fn lookup(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }

    /// Like [`lookup`](Self::lookup), but a missing name is an error.
    pub fn resolve(&self, name: &str) -> CoreResult<&Product> {
        self.lookup(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))
    }

    /// Resolves a list of names into a cart, keeping order and repeats.
    ///
    /// Fails on the first unknown name.
    pub fn resolve_cart<I, S>(&self, names: I) -> CoreResult<Vec<Product>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.resolve(name.as_ref()).cloned())
            .collect()
    }

    /// Products in name order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 10);

        let laptop = catalog.lookup("Laptop").unwrap();
        assert_eq!(laptop.id(), "4");
        assert_eq!(laptop.category(), Category::Electronics);
        assert_eq!(laptop.base_price(), Money::from_major_minor(1000, 0));

        let ring = catalog.lookup("Diamond Ring").unwrap();
        assert!(ring.is_luxury());
    }

    #[test]
    fn test_every_seed_row_loads() {
        for &(id, name, category, cents) in SEED {
            assert!(Product::new(id, name, category, Money::from_cents(cents)).is_ok());
        }

        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), SEED.len());
        for &(id, name, _, cents) in SEED {
            let product = catalog.lookup(name).unwrap();
            assert_eq!(product.id(), id);
            assert_eq!(product.base_price().cents(), cents);
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = Catalog::seeded();
        assert!(catalog.lookup("apple").is_none());
        assert!(catalog.lookup("Apple ").is_none());
        assert!(catalog.lookup("Apple").is_some());
    }

    #[test]
    fn test_resolve_missing_product() {
        let catalog = Catalog::seeded();
        let err = catalog.resolve("Toaster").unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(ref n) if n == "Toaster"));
    }

    #[test]
    fn test_resolve_cart_keeps_order_and_repeats() {
        let catalog = Catalog::seeded();
        let cart = catalog
            .resolve_cart(["Apple", "Laptop", "Apple"])
            .unwrap();

        let names: Vec<&str> = cart.iter().map(Product::name).collect();
        assert_eq!(names, vec!["Apple", "Laptop", "Apple"]);
    }

    #[test]
    fn test_resolve_cart_fails_on_unknown() {
        let catalog = Catalog::seeded();
        let result = catalog.resolve_cart(vec!["Apple".to_string(), "Unicorn".to_string()]);
        assert!(matches!(result, Err(CoreError::ProductNotFound(_))));
    }

    #[test]
    fn test_insert_rejects_duplicate_name() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        let tea = Product::new("20", "Tea", Category::Food, Money::from_cents(300)).unwrap();
        catalog.insert(tea.clone()).unwrap();

        let again = Product::new("21", "Tea", Category::Food, Money::from_cents(350)).unwrap();
        assert!(matches!(
            catalog.insert(again),
            Err(ValidationError::Duplicate { .. })
        ));
        assert_eq!(catalog.lookup("Tea"), Some(&tea));
    }

    #[test]
    fn test_products_in_name_order() {
        let catalog = Catalog::seeded();
        let names: Vec<&str> = catalog.products().map(Product::name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
