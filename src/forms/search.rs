//! Validation for caller-supplied search parameters.
//!
//! The engine itself never rejects input; anything malformed must be caught
//! here, at the boundary. Unlike the original storefront this layer refuses
//! inverted price ranges instead of silently returning an empty result, and
//! it does not impose the UI's `[0, 1000]` default range — a caller that
//! wants a ceiling has to ask for one.

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::services::search::{ProductQuery, SortDirection, SortKey};

/// Raw query-string shape of a catalog search request.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchProductsForm {
    pub query: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 0.0))]
    pub min_price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub max_price: Option<f64>,
    pub in_stock: Option<bool>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub min_rating: Option<f32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Validated search parameters, ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchProductsPayload {
    pub query: ProductQuery,
}

#[derive(Debug, Error)]
pub enum SearchFormError {
    #[error("Search form validation failed: {0}")]
    Validation(String),
    #[error("Invalid price range: {min} is greater than {max}")]
    InvalidPriceRange { min: f64, max: f64 },
}

impl From<ValidationErrors> for SearchFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<SearchProductsForm> for SearchProductsPayload {
    type Error = SearchFormError;

    fn try_from(form: SearchProductsForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let mut query = ProductQuery::default();

        if let Some(text) = form.query
            && !text.trim().is_empty()
        {
            query.search = Some(text);
        }

        if let Some(category) = form.category
            && !category.trim().is_empty()
        {
            query.category = Some(category);
        }

        if form.min_price.is_some() || form.max_price.is_some() {
            let min = form.min_price.unwrap_or(0.0);
            let max = form.max_price.unwrap_or(f64::MAX);
            if min > max {
                return Err(SearchFormError::InvalidPriceRange { min, max });
            }
            query.price_range = Some((min, max));
        }

        if form.in_stock == Some(true) {
            query.in_stock_only = true;
        }

        if let Some(rating) = form.min_rating
            && rating > 0.0
        {
            query.min_rating = Some(rating);
        }

        // Unrecognized sort keys leave the catalog order untouched.
        query.sort_by = form.sort_by.as_deref().and_then(SortKey::parse);
        query.sort_order = form
            .sort_order
            .as_deref()
            .map(SortDirection::parse)
            .unwrap_or_default();

        Ok(Self { query })
    }
}
