//! Catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier, assigned by the remote catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A product as served by the remote catalog.
///
/// This record is owned by the catalog and read-only here: the core never
/// mutates a product, it only copies one by value into cart lines and
/// wishlist entries. Field names follow the catalog's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub thumbnail: String,
    pub category: String,
    pub description: String,
    pub discount_percentage: Decimal,
    pub rating: Decimal,
}
