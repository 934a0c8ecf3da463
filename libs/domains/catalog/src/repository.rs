use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for the catalog.
/// Implementations can use different storage backends (SQLite, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Persist a fully-populated product
    async fn insert(&self, product: Product) -> CatalogResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> CatalogResult<Option<Product>>;

    /// List products ordered by upload time descending, windowed by
    /// offset/limit
    async fn list(&self, limit: u64, offset: u64) -> CatalogResult<Vec<Product>>;

    /// Products whose category matches case-insensitively
    async fn find_by_category(&self, category: &str) -> CatalogResult<Vec<Product>>;

    /// Distinct non-empty category values, store order
    async fn distinct_categories(&self) -> CatalogResult<Vec<String>>;

    /// Top products by likes descending
    async fn trending(&self, limit: u64) -> CatalogResult<Vec<Product>>;

    /// Overwrite an existing product row
    async fn update(&self, product: Product) -> CatalogResult<Product>;

    /// Delete a product by ID; false when the id is unknown
    async fn delete(&self, id: &str) -> CatalogResult<bool>;
}
