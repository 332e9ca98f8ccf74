use serde::Deserialize;
use shopmate_core::{Product, ProductId};
use thiserror::Error;

/// Catalog fetch error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),
    #[error("catalog API error ({0}): {1}")]
    Api(u16, String),
    #[error("catalog response malformed: {0}")]
    Parse(String),
}

/// Page envelope the catalog wraps product listings in.
#[derive(Debug, Deserialize)]
struct ProductPage {
    products: Vec<Product>,
}

/// Client for the remote product catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the product listing.
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.fetch_page(&format!("{}/products", self.base_url)).await
    }

    /// Fetch the products of one category.
    pub async fn list_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        self.fetch_page(&format!("{}/products/category/{category}", self.base_url))
            .await
    }

    /// Recommendations for a product detail view: other products from the
    /// same category, the product itself excluded, capped at `limit`.
    pub async fn related_products(
        &self,
        product: &Product,
        limit: usize,
    ) -> Result<Vec<Product>, CatalogError> {
        let candidates = self.list_products_by_category(&product.category).await?;
        Ok(related_from(candidates, product.id, limit))
    }

    async fn fetch_page(&self, url: &str) -> Result<Vec<Product>, CatalogError> {
        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::warn!(url, "catalog request failed: {e}");
            CatalogError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Api(
                status.as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }

        let page: ProductPage = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        Ok(page.products)
    }
}

fn related_from(candidates: Vec<Product>, exclude: ProductId, limit: usize) -> Vec<Product> {
    let mut related: Vec<Product> = candidates
        .into_iter()
        .filter(|p| p.id != exclude)
        .collect();
    related.truncate(limit);
    related
}
