//! `shopmate-cart` — shopping cart state.

pub mod cart;

pub use cart::{Cart, CartAction, CartLine};
