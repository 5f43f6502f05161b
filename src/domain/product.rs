use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryName, DiscountPercent, ImageUrl, ProductDescription, ProductId, ProductName,
    ProductPrice, ProductSlug, Rating, ReviewCount, StockQuantity, TagName,
};

/// One image attached to a product. Ordered within the product's gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: String,
    pub url: ImageUrl,
    pub alt: String,
    pub is_primary: bool,
    pub order: i32,
}

/// Nutrition facts per 100g. Fixed shape, all amounts in grams except
/// `calories` (kcal) and `sodium` (milligrams).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sodium: f64,
}

/// A sellable catalog item.
///
/// Field names serialize in camelCase to stay compatible with the seed data
/// and the storefront's JSON payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub slug: ProductSlug,
    pub name: ProductName,
    pub description: ProductDescription,
    #[serde(default)]
    pub short_description: String,
    /// Free-text category label; matched case-insensitively by the engine.
    pub category: CategoryName,
    #[serde(default)]
    pub tags: Vec<TagName>,
    pub price: ProductPrice,
    /// Pre-discount price. Expected to be >= `price` when present; seed data
    /// is trusted, not validated.
    pub original_price: Option<ProductPrice>,
    /// Stored discount percentage. See [`Product::discount_percent`] for the
    /// derived fallback.
    pub discount: Option<DiscountPercent>,
    /// Merchandising flag. Not derived from `stock_quantity`; the two are
    /// known to drift in seed data, see [`Product::stock_is_consistent`].
    pub in_stock: bool,
    pub stock_quantity: StockQuantity,
    pub rating: Rating,
    pub total_reviews: ReviewCount,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_best_seller: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    pub nutrition_info: Option<NutritionInfo>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
}

impl Product {
    /// Effective discount percentage: the stored value when present,
    /// otherwise derived from `original_price`.
    pub fn discount_percent(&self) -> Option<DiscountPercent> {
        if self.discount.is_some() {
            return self.discount;
        }
        let original = self.original_price?.get();
        if original <= self.price.get() {
            return None;
        }
        let percent = ((1.0 - self.price.get() / original) * 100.0).round() as u8;
        DiscountPercent::new(percent).ok()
    }

    /// The image flagged as primary, falling back to the lowest-ordered one.
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images
            .iter()
            .find(|image| image.is_primary)
            .or_else(|| self.images.iter().min_by_key(|image| image.order))
    }

    /// Whether `in_stock` agrees with `stock_quantity > 0`.
    ///
    /// The storefront treats neither field as authoritative and never
    /// enforces agreement; this check is opt-in for callers that care.
    pub fn stock_is_consistent(&self) -> bool {
        self.in_stock == (self.stock_quantity.get() > 0)
    }
}
