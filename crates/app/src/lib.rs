//! `shopmate-app` — composition root.
//!
//! **Responsibility:** assemble the state and persistence core for the UI
//! layer: one durable key-value store, the session store restored from it,
//! and the cart/wishlist store providers. All instances are constructed
//! here once at startup and injected — there is no ambient global state,
//! which also gives tests a fresh world per instance.

pub mod config;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use state::AppState;
