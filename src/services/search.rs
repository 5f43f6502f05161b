//! The storefront search/filter/sort engine.
//!
//! A pure function over an immutable product slice: no I/O, no hidden
//! state, always returns a (possibly empty) result. Filters combine with
//! logical AND and each stage is optional; absent criteria are no-ops
//! rather than errors. Input validation is the caller's job (see
//! `forms::search`).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Sentinel category label meaning "do not filter by category".
pub const ALL_CATEGORIES: &str = "all";

/// Sort keys accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Price,
    Rating,
    Name,
    Newest,
    Popularity,
}

impl SortKey {
    /// Parse a caller-supplied sort key. Unrecognized values map to `None`,
    /// which leaves the catalog order untouched.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "price" => Some(Self::Price),
            "rating" => Some(Self::Rating),
            "name" => Some(Self::Name),
            "newest" => Some(Self::Newest),
            "popularity" => Some(Self::Popularity),
            _ => None,
        }
    }
}

/// Direction applied to a [`SortKey`]'s base ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Parse a caller-supplied direction, defaulting to ascending for
    /// anything other than `desc`.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// Query/filter/sort criteria for one engine invocation.
///
/// Built with chained setters in the usual repository-query style:
///
/// ```
/// use namamy_catalog::services::search::{ProductQuery, SortDirection, SortKey};
///
/// let query = ProductQuery::default()
///     .search("peri peri")
///     .price_range(100.0, 400.0)
///     .in_stock_only()
///     .sort(SortKey::Price, SortDirection::Ascending);
/// # let _ = query;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    /// Free-text needle matched against name, description and tags.
    pub search: Option<String>,
    /// Category label; the [`ALL_CATEGORIES`] sentinel disables the filter.
    pub category: Option<String>,
    /// Inclusive price bounds.
    pub price_range: Option<(f64, f64)>,
    /// When set, drop products not in stock. Can only narrow the result.
    pub in_stock_only: bool,
    /// Keep products rated at least this value. Zero is a no-op.
    pub min_rating: Option<f32>,
    pub sort_by: Option<SortKey>,
    pub sort_order: SortDirection,
}

impl ProductQuery {
    pub fn search(mut self, needle: impl Into<String>) -> Self {
        self.search = Some(needle.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = Some((min, max));
        self
    }

    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    pub fn min_rating(mut self, rating: f32) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_by = Some(key);
        self.sort_order = direction;
        self
    }
}

/// Apply a query to the catalog, returning matching products in the
/// requested order.
///
/// Stages run as a fixed pipeline: text match, category, price range,
/// stock, rating, then at most one sort. When no sort key is set the
/// catalog order is preserved, and the sort itself is stable so ties keep
/// catalog order too.
pub fn search_products(catalog: &[Product], query: &ProductQuery) -> Vec<Product> {
    let mut items: Vec<Product> = catalog.to_vec();

    if let Some(text) = query.search.as_deref() {
        let needle = text.trim().to_lowercase();
        if !needle.is_empty() {
            items.retain(|p| matches_text(p, &needle));
        }
    }

    if let Some(category) = query.category.as_deref()
        && !category.eq_ignore_ascii_case(ALL_CATEGORIES)
    {
        items.retain(|p| p.category.as_str().eq_ignore_ascii_case(category));
    }

    if let Some((min, max)) = query.price_range {
        items.retain(|p| {
            let price = p.price.get();
            price >= min && price <= max
        });
    }

    if query.in_stock_only {
        items.retain(|p| p.in_stock);
    }

    if let Some(min_rating) = query.min_rating
        && min_rating > 0.0
    {
        items.retain(|p| p.rating.get() >= min_rating);
    }

    if let Some(key) = query.sort_by {
        sort_products(&mut items, key, query.sort_order);
    }

    items
}

fn matches_text(product: &Product, needle: &str) -> bool {
    product.name.as_str().to_lowercase().contains(needle)
        || product.description.as_str().to_lowercase().contains(needle)
        || product
            .tags
            .iter()
            .any(|tag| tag.as_str().to_lowercase().contains(needle))
}

/// Base ordering for each key. `Newest` and `Popularity` naturally read
/// best-first, so their base comparators are descending by timestamp and
/// review count respectively.
fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Price => a.price.get().total_cmp(&b.price.get()),
        SortKey::Rating => a.rating.get().total_cmp(&b.rating.get()),
        SortKey::Name => a
            .name
            .as_str()
            .to_lowercase()
            .cmp(&b.name.as_str().to_lowercase()),
        SortKey::Newest => b.created_at.cmp(&a.created_at),
        SortKey::Popularity => b.total_reviews.get().cmp(&a.total_reviews.get()),
    }
}

/// Stable sort by a single key.
///
/// Popularity ignores the requested direction and always puts the most
/// reviewed products first; the storefront shipped with that behavior and
/// callers rely on it.
pub(crate) fn sort_products(items: &mut [Product], key: SortKey, direction: SortDirection) {
    items.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        if key == SortKey::Popularity || direction == SortDirection::Ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}
