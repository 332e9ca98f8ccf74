use serde::{Deserialize, Serialize};
use shopmate_core::{Product, ProductId, Reducer};

/// Wishlist mutations. Toggle is the sole mutation: present means
/// favorited, so a double toggle is a net no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishlistAction {
    Toggle(Product),
}

/// The set of favorited products, each stored as the full product snapshot
/// taken at the moment it was toggled in. At most one entry per id,
/// insertion order preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Wishlist {
    entries: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether a product with this id is currently favorited (the UI's
    /// heart state).
    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    fn toggled(&self, product: &Product) -> Self {
        if self.contains(product.id) {
            Self {
                entries: self
                    .entries
                    .iter()
                    .filter(|entry| entry.id != product.id)
                    .cloned()
                    .collect(),
            }
        } else {
            let mut entries = self.entries.clone();
            entries.push(product.clone());
            Self { entries }
        }
    }
}

impl Reducer for Wishlist {
    type Action = WishlistAction;

    fn reduce(&self, action: &WishlistAction) -> Self {
        match action {
            WishlistAction::Toggle(product) => self.toggled(product),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: u64, title: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: Decimal::new(4999, 2),
            thumbnail: format!("https://cdn.example.com/{id}/thumbnail.jpg"),
            category: "footwear".to_string(),
            description: String::new(),
            discount_percentage: Decimal::ZERO,
            rating: Decimal::ZERO,
        }
    }

    #[test]
    fn toggle_adds_the_full_snapshot_when_absent() {
        let p = product(1, "Trail Boot");
        let wishlist = Wishlist::new().reduce(&WishlistAction::Toggle(p.clone()));

        assert_eq!(wishlist.entries(), &[p]);
        assert!(wishlist.contains(ProductId::new(1)));
    }

    #[test]
    fn toggle_removes_when_present() {
        let p = product(1, "Trail Boot");
        let wishlist = Wishlist::new()
            .reduce(&WishlistAction::Toggle(p.clone()))
            .reduce(&WishlistAction::Toggle(p));

        assert!(wishlist.is_empty());
    }

    #[test]
    fn toggle_matches_by_id_not_by_snapshot_equality() {
        let original = product(1, "Trail Boot");
        let renamed = product(1, "Trail Boot II");

        let wishlist = Wishlist::new()
            .reduce(&WishlistAction::Toggle(original))
            .reduce(&WishlistAction::Toggle(renamed));

        assert!(wishlist.is_empty());
    }

    #[test]
    fn toggle_preserves_insertion_order_of_other_entries() {
        let wishlist = Wishlist::new()
            .reduce(&WishlistAction::Toggle(product(1, "First")))
            .reduce(&WishlistAction::Toggle(product(2, "Second")))
            .reduce(&WishlistAction::Toggle(product(3, "Third")))
            .reduce(&WishlistAction::Toggle(product(2, "Second")));

        let ids: Vec<u64> = wishlist.entries().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn reduce_does_not_mutate_the_input_wishlist() {
        let wishlist = Wishlist::new().reduce(&WishlistAction::Toggle(product(1, "First")));
        let before = wishlist.clone();

        let _ = wishlist.reduce(&WishlistAction::Toggle(product(2, "Second")));

        assert_eq!(wishlist, before);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn product_strategy() -> impl Strategy<Value = Product> {
            (1u64..10_000, "[A-Za-z][A-Za-z0-9 ]{0,30}").prop_map(|(id, title)| Product {
                id: ProductId::new(id),
                title,
                price: Decimal::new(4999, 2),
                thumbnail: format!("https://cdn.example.com/{id}/thumbnail.jpg"),
                category: "footwear".to_string(),
                description: String::new(),
                discount_percentage: Decimal::ZERO,
                rating: Decimal::ZERO,
            })
        }

        proptest! {
            /// Toggling a product not already favorited twice returns to
            /// the starting wishlist, whatever it held.
            #[test]
            fn double_toggle_is_identity(
                existing in proptest::collection::vec(product_strategy(), 0..8),
                p in product_strategy(),
            ) {
                let wishlist = existing
                    .into_iter()
                    .filter(|entry| entry.id != p.id)
                    .fold(Wishlist::new(), |w, entry| w.reduce(&WishlistAction::Toggle(entry)));

                let toggled_twice = wishlist
                    .reduce(&WishlistAction::Toggle(p.clone()))
                    .reduce(&WishlistAction::Toggle(p));

                prop_assert_eq!(toggled_twice, wishlist);
            }

            /// Membership never holds more than one entry per id.
            #[test]
            fn at_most_one_entry_per_id(
                toggles in proptest::collection::vec(product_strategy(), 0..16),
            ) {
                let wishlist = toggles
                    .into_iter()
                    .fold(Wishlist::new(), |w, p| w.reduce(&WishlistAction::Toggle(p)));

                let mut ids: Vec<u64> = wishlist.entries().iter().map(|p| p.id.0).collect();
                ids.sort_unstable();
                let before = ids.len();
                ids.dedup();
                prop_assert_eq!(ids.len(), before);
            }
        }
    }
}
