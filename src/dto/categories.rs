use serde::Serialize;

use crate::domain::category::Category;

/// Category as rendered in navigation and filter chips, with its product
/// count computed from the live product list.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCard {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub products_count: usize,
}

impl CategoryCard {
    pub fn new(category: Category, products_count: usize) -> Self {
        Self {
            id: category.id.into_inner(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            description: category.description,
            products_count,
        }
    }
}
