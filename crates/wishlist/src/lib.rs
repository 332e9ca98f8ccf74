//! `shopmate-wishlist` — favorited products state.

pub mod wishlist;

pub use wishlist::{Wishlist, WishlistAction};
