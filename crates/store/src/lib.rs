//! `shopmate-store` — state containers and subscriptions.
//!
//! A store provider owns one state tree, applies actions through its
//! reducer, and broadcasts every state replacement to subscribers. One
//! instance per state tree is constructed at process start and injected
//! into the UI layer; there is no ambient global state.

pub mod provider;
pub mod subscription;

pub use provider::Store;
pub use subscription::{Subscribers, Subscription};
