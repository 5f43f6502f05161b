use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, CategorySlug};

/// A navigation/filtering group for products.
///
/// Products reference categories by label, not by id, so membership is a
/// case-insensitive name match. The product count is deliberately not stored
/// here: the original data model denormalized it and let it drift out of
/// sync, so this crate computes it from the product list instead (see
/// `CategoryReader::count_products`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: CategorySlug,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
    pub sort_order: i32,
}
