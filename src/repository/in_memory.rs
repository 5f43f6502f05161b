use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::domain::types::{CategoryName, ProductId, ProductSlug};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, ProductReader};

/// Top-level shape of a catalog seed document.
#[derive(Debug, Deserialize)]
struct CatalogSeed {
    products: Vec<Product>,
    categories: Vec<Category>,
}

/// Catalog repository backed by an immutable in-memory snapshot.
///
/// The snapshot is built once at startup and shared behind an `Arc`, so the
/// repository is cheap to clone and can be handed to every consumer freely.
/// All accessors are single linear scans; the catalog is small enough that
/// indexing would buy nothing.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    inner: Arc<CatalogData>,
}

#[derive(Debug)]
struct CatalogData {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl InMemoryCatalog {
    /// Build a catalog from already-constructed domain values. Products keep
    /// the order they are given in; that order is the tie-break order for
    /// every listing.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            inner: Arc::new(CatalogData {
                products,
                categories,
            }),
        }
    }

    /// Parse a catalog from a JSON seed document.
    pub fn from_json_str(seed: &str) -> RepositoryResult<Self> {
        let seed: CatalogSeed = serde_json::from_str(seed)?;
        Ok(Self::new(seed.products, seed.categories))
    }

    /// Load a catalog from a JSON seed file on disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// The seed catalog shipped with the crate.
    pub fn bundled() -> RepositoryResult<Self> {
        Self::from_json_str(include_str!("../../data/catalog.json"))
    }

    fn products(&self) -> &[Product] {
        &self.inner.products
    }

    fn collect_products<F>(&self, predicate: F) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
    {
        self.products()
            .iter()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }
}

impl ProductReader for InMemoryCatalog {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.products().to_vec())
    }

    fn get_product_by_id(&self, id: &ProductId) -> RepositoryResult<Option<Product>> {
        Ok(self.products().iter().find(|p| &p.id == id).cloned())
    }

    fn get_product_by_slug(&self, slug: &ProductSlug) -> RepositoryResult<Option<Product>> {
        Ok(self.products().iter().find(|p| &p.slug == slug).cloned())
    }

    fn list_featured(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.collect_products(|p| p.is_featured))
    }

    fn list_best_sellers(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.collect_products(|p| p.is_best_seller))
    }

    fn list_new(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.collect_products(|p| p.is_new))
    }

    fn list_by_category(&self, category: &CategoryName) -> RepositoryResult<Vec<Product>> {
        Ok(self.collect_products(|p| {
            p.category.as_str().eq_ignore_ascii_case(category.as_str())
        }))
    }

    fn list_related(&self, slug: &ProductSlug, limit: usize) -> RepositoryResult<Vec<Product>> {
        let Some(current) = self.products().iter().find(|p| &p.slug == slug) else {
            return Ok(Vec::new());
        };

        Ok(self
            .products()
            .iter()
            .filter(|p| {
                p.slug != current.slug
                    && p.category
                        .as_str()
                        .eq_ignore_ascii_case(current.category.as_str())
            })
            .take(limit)
            .cloned()
            .collect())
    }
}

impl CategoryReader for InMemoryCatalog {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let mut categories: Vec<Category> = self
            .inner
            .categories
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        categories.sort_by_key(|c| c.sort_order);
        Ok(categories)
    }

    fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>> {
        Ok(self
            .inner
            .categories
            .iter()
            .find(|c| c.slug.as_str() == slug)
            .cloned())
    }

    fn count_products(&self, category: &Category) -> RepositoryResult<usize> {
        Ok(self
            .products()
            .iter()
            .filter(|p| {
                p.category
                    .as_str()
                    .eq_ignore_ascii_case(category.name.as_str())
            })
            .count())
    }
}
