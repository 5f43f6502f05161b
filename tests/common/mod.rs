//! Helpers for integration tests.
#![allow(dead_code)] // each test binary uses a different subset

use chrono::{TimeZone, Utc};
use namamy_catalog::domain::category::Category;
use namamy_catalog::domain::product::Product;
use namamy_catalog::domain::types::{
    CategoryId, CategoryName, CategorySlug, ProductDescription, ProductId, ProductName,
    ProductPrice, ProductSlug, Rating, ReviewCount, StockQuantity,
};

/// A minimal in-stock product; tests override the fields they care about.
pub fn product(id: &str, name: &str, price: f64) -> Product {
    Product {
        id: ProductId::new(id).expect("valid product id"),
        slug: ProductSlug::new(id).expect("valid product slug"),
        name: ProductName::new(name).expect("valid product name"),
        description: ProductDescription::new("Roasted fox nuts.").expect("valid description"),
        short_description: String::new(),
        category: CategoryName::new("Roasted").expect("valid category name"),
        tags: vec![],
        price: ProductPrice::new(price).expect("valid price"),
        original_price: None,
        discount: None,
        in_stock: true,
        stock_quantity: StockQuantity::new(25).expect("valid stock quantity"),
        rating: Rating::new(4.0).expect("valid rating"),
        total_reviews: ReviewCount::new(10).expect("valid review count"),
        is_new: false,
        is_featured: false,
        is_best_seller: false,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        images: vec![],
        nutrition_info: None,
        ingredients: vec![],
        allergens: vec![],
    }
}

pub fn category(id: &str, name: &str, sort_order: i32) -> Category {
    Category {
        id: CategoryId::new(id).expect("valid category id"),
        name: CategoryName::new(name).expect("valid category name"),
        slug: CategorySlug::new(id).expect("valid category slug"),
        description: String::new(),
        is_active: true,
        sort_order,
    }
}

pub fn ids(products: &[Product]) -> Vec<String> {
    products.iter().map(|p| p.id.to_string()).collect()
}
