//! `shopmate-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no I/O, no runtime
//! concerns): the product record mirrored from the remote catalog and the
//! state-transition contract the cart and wishlist reducers implement.

pub mod product;
pub mod reducer;

pub use product::{Product, ProductId};
pub use reducer::Reducer;
