use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopmate_core::{Product, ProductId, Reducer};

/// One product entry in the cart with an aggregated quantity.
///
/// The display fields are a snapshot taken when the product was first
/// added; a later price change in the catalog is not reflected in an
/// already-present line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub thumbnail: String,
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            thumbnail: product.thumbnail.clone(),
            quantity: 1,
        }
    }

    /// Price of this line: unit price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Cart mutations. The set is closed so the reducer match is exhaustive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of the product: an existing line's quantity is
    /// incremented, otherwise a new line is appended.
    AddToCart(Product),
    /// Remove the whole line for this id; no-op if absent.
    RemoveFromCart(ProductId),
}

/// The shopping cart: at most one line per product id, insertion order
/// preserved for display stability.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Total price over all lines, rounded to 2 decimal places for display.
    pub fn total_price(&self) -> Decimal {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .sum::<Decimal>()
            .round_dp(2)
    }

    fn with_added(&self, product: &Product) -> Self {
        let mut lines = self.lines.clone();
        match lines.iter_mut().find(|line| line.id == product.id) {
            Some(line) => {
                // Repeat add only bumps the quantity; the snapshot fields
                // keep their values from the first add.
                line.quantity += 1;
            }
            None => lines.push(CartLine::from_product(product)),
        }
        Self { lines }
    }

    fn without(&self, id: ProductId) -> Self {
        Self {
            lines: self
                .lines
                .iter()
                .filter(|line| line.id != id)
                .cloned()
                .collect(),
        }
    }
}

impl Reducer for Cart {
    type Action = CartAction;

    fn reduce(&self, action: &CartAction) -> Self {
        match action {
            CartAction::AddToCart(product) => self.with_added(product),
            CartAction::RemoveFromCart(id) => self.without(*id),
        }
    }
}
