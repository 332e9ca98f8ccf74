//! Application state assembly.

use std::sync::Arc;

use anyhow::Context;

use shopmate_cart::Cart;
use shopmate_catalog::CatalogClient;
use shopmate_kv::{KeyValueStore, SqliteStore};
use shopmate_session::SessionStore;
use shopmate_store::Store;
use shopmate_wishlist::Wishlist;

use crate::config::AppConfig;

/// The assembled state core, handed to the UI layer at startup.
///
/// The UI subscribes to the stores and dispatches actions (cart, wishlist)
/// or calls the named operations (session); it must not mutate the state
/// snapshots it receives. Everything here lives for the lifetime of the
/// process and is dropped with it — no explicit teardown.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
    pub cart: Arc<Store<Cart>>,
    pub wishlist: Arc<Store<Wishlist>>,
    pub session: Arc<SessionStore>,
}

impl AppState {
    /// Assemble the core over the on-disk key-value store.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let kv: Arc<dyn KeyValueStore> = match &config.data_dir {
            Some(dir) => Arc::new(
                SqliteStore::open(&dir.join("store.db"))
                    .await
                    .context("failed to open durable key-value store")?,
            ),
            None => Arc::new(
                SqliteStore::open_default()
                    .await
                    .context("failed to open durable key-value store")?,
            ),
        };

        Self::with_store(config, kv).await
    }

    /// Assemble the core over an explicit key-value backend.
    ///
    /// Tests pass a `MemoryStore`; production goes through [`Self::init`].
    pub async fn with_store(
        config: &AppConfig,
        kv: Arc<dyn KeyValueStore>,
    ) -> anyhow::Result<Self> {
        let session = SessionStore::load(kv)
            .await
            .context("failed to restore session state")?;

        tracing::info!(catalog_url = %config.catalog_url, "application state assembled");

        Ok(Self {
            catalog: CatalogClient::new(&config.catalog_url),
            cart: Arc::new(Store::new(Cart::new())),
            wishlist: Arc::new(Store::new(Wishlist::new())),
            session: Arc::new(session),
        })
    }
}
