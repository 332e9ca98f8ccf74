//! `shopmate-catalog` — remote product catalog client.
//!
//! Read-only, stateless collaborator: the catalog owns the products; this
//! client only fetches them. Failures surface to the caller as
//! [`CatalogError`] — every variant means "catalog unavailable" from the
//! caller's point of view. No retries and no response caching here; both
//! are caller policy.

pub mod client;

pub use client::{CatalogClient, CatalogError};
