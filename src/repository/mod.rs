use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::domain::types::{CategoryName, ProductId, ProductSlug};

pub mod errors;
pub mod in_memory;

pub use errors::{RepositoryError, RepositoryResult};
pub use in_memory::InMemoryCatalog;

/// Default cap on the number of related products returned for a detail page.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Read-only access to products.
///
/// The storefront never mutates the catalog at runtime, so there is no
/// writer counterpart. Implementations are expected to preserve a stable
/// catalog order across calls; the search engine and the accessors both
/// rely on it for tie-breaking.
pub trait ProductReader {
    /// All products in catalog order.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: &ProductId) -> RepositoryResult<Option<Product>>;
    /// Retrieve a product by its URL slug.
    fn get_product_by_slug(&self, slug: &ProductSlug) -> RepositoryResult<Option<Product>>;
    /// Products flagged for the featured rail, in catalog order.
    fn list_featured(&self) -> RepositoryResult<Vec<Product>>;
    /// Products flagged as best sellers, in catalog order.
    fn list_best_sellers(&self) -> RepositoryResult<Vec<Product>>;
    /// Products flagged as new arrivals, in catalog order.
    fn list_new(&self) -> RepositoryResult<Vec<Product>>;
    /// Products whose category label matches case-insensitively.
    fn list_by_category(&self, category: &CategoryName) -> RepositoryResult<Vec<Product>>;
    /// Up to `limit` products sharing a category with the given product,
    /// excluding the product itself.
    fn list_related(&self, slug: &ProductSlug, limit: usize) -> RepositoryResult<Vec<Product>>;
}

/// Read-only access to categories.
pub trait CategoryReader {
    /// Active categories ordered by their sort position.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its URL slug, active or not.
    fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>>;
    /// Number of products carrying this category's label. Computed, never
    /// stored, so it cannot drift from the product list.
    fn count_products(&self, category: &Category) -> RepositoryResult<usize>;
}
