//! Application configuration from the environment.

use std::path::PathBuf;

/// Catalog endpoint used when `SHOPMATE_CATALOG_URL` is not set.
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com";

/// Process configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the remote product catalog.
    pub catalog_url: String,
    /// Directory for the durable key-value database. `None` resolves to
    /// the platform's app data directory.
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from `SHOPMATE_CATALOG_URL` and
    /// `SHOPMATE_DATA_DIR`, falling back to code defaults.
    pub fn from_env() -> Self {
        Self {
            catalog_url: std::env::var("SHOPMATE_CATALOG_URL")
                .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string()),
            data_dir: std::env::var_os("SHOPMATE_DATA_DIR").map(PathBuf::from),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            data_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_public_catalog() {
        let config = AppConfig::default();
        assert_eq!(config.catalog_url, "https://dummyjson.com");
        assert_eq!(config.data_dir, None);
    }
}
