use serde::Serialize;

use crate::domain::product::Product;

/// The slice of a product that list and grid views render.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub short_description: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub discount_percent: Option<u8>,
    pub rating: f32,
    pub total_reviews: i32,
    pub in_stock: bool,
    pub is_new: bool,
    pub is_best_seller: bool,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
}

impl From<Product> for ProductCard {
    fn from(product: Product) -> Self {
        let discount_percent = product.discount_percent().map(|d| d.get());
        let image = product.primary_image().cloned();

        Self {
            id: product.id.into_inner(),
            slug: product.slug.into_inner(),
            name: product.name.into_inner(),
            short_description: product.short_description,
            price: product.price.get(),
            original_price: product.original_price.map(|p| p.get()),
            discount_percent,
            rating: product.rating.get(),
            total_reviews: product.total_reviews.get(),
            in_stock: product.in_stock,
            is_new: product.is_new,
            is_best_seller: product.is_best_seller,
            image_url: image.as_ref().map(|i| i.url.as_str().to_string()),
            image_alt: image.map(|i| i.alt),
        }
    }
}
