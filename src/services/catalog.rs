//! Storefront page services.
//!
//! Thin orchestration over the repository traits and the search engine.
//! Repository errors are logged and mapped to [`ServiceError`] so callers
//! can stay oblivious to the backing store.

use crate::domain::product::Product;
use crate::domain::types::ProductSlug;
use crate::dto::categories::CategoryCard;
use crate::dto::products::ProductCard;
use crate::repository::{CategoryReader, DEFAULT_RELATED_LIMIT, ProductReader};
use crate::services::search::{ProductQuery, search_products};

use super::{ServiceError, ServiceResult};

/// Product detail page: the product itself plus a short rail of products
/// from the same category.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub product: Product,
    pub related: Vec<ProductCard>,
}

/// Home page rails.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeRails {
    pub featured: Vec<ProductCard>,
    pub best_sellers: Vec<ProductCard>,
    pub new_arrivals: Vec<ProductCard>,
}

/// Run a catalog search and return matching products in the requested
/// order.
pub fn show_catalog<R>(query: &ProductQuery, repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    match repo.list_products() {
        Ok(products) => Ok(search_products(&products, query)),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Build the product detail page for a slug.
pub fn show_product<R>(slug: &ProductSlug, repo: &R) -> ServiceResult<ProductPage>
where
    R: ProductReader,
{
    let product = match repo.get_product_by_slug(slug) {
        Ok(Some(product)) => product,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product by slug: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let related = match repo.list_related(slug, DEFAULT_RELATED_LIMIT) {
        Ok(related) => related.into_iter().map(ProductCard::from).collect(),
        Err(e) => {
            log::error!("Failed to list related products: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(ProductPage { product, related })
}

/// Build the home page rails from the merchandising flags.
pub fn show_home<R>(repo: &R) -> ServiceResult<HomeRails>
where
    R: ProductReader,
{
    let rail = |result: Result<Vec<Product>, _>, what: &str| match result {
        Ok(products) => Ok(products.into_iter().map(ProductCard::from).collect()),
        Err(e) => {
            log::error!("Failed to list {what} products: {e}");
            Err(ServiceError::Internal)
        }
    };

    Ok(HomeRails {
        featured: rail(repo.list_featured(), "featured")?,
        best_sellers: rail(repo.list_best_sellers(), "best seller")?,
        new_arrivals: rail(repo.list_new(), "new")?,
    })
}

/// Active categories with computed product counts, in navigation order.
pub fn show_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryCard>>
where
    R: CategoryReader,
{
    let categories = match repo.list_categories() {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let mut cards = Vec::with_capacity(categories.len());
    for category in categories {
        let count = match repo.count_products(&category) {
            Ok(count) => count,
            Err(e) => {
                log::error!("Failed to count products for category: {e}");
                return Err(ServiceError::Internal);
            }
        };
        cards.push(CategoryCard::new(category, count));
    }

    Ok(cards)
}
