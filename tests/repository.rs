//! Catalog repository and seed-loading behavior.

use std::io::Write;

use namamy_catalog::domain::types::{CategoryName, ProductId, ProductSlug};
use namamy_catalog::repository::{
    CategoryReader, DEFAULT_RELATED_LIMIT, InMemoryCatalog, ProductReader,
};
use namamy_catalog::services::catalog::{show_categories, show_product};

mod common;

use common::{category, ids, product};

#[test]
fn accessors_scan_in_catalog_order() {
    let mut featured = product("classic-salted", "Classic Salted", 249.0);
    featured.is_featured = true;
    let mut also_featured = product("peri-peri", "Peri Peri", 329.0);
    also_featured.is_featured = true;
    let plain = product("raw-fox-nuts", "Raw Fox Nuts", 199.0);

    let repo = InMemoryCatalog::new(vec![featured, also_featured, plain], vec![]);

    let listed = repo.list_products().unwrap();
    assert_eq!(ids(&listed), ["classic-salted", "peri-peri", "raw-fox-nuts"]);

    let featured = repo.list_featured().unwrap();
    assert_eq!(ids(&featured), ["classic-salted", "peri-peri"]);

    let by_id = repo
        .get_product_by_id(&ProductId::new("peri-peri").unwrap())
        .unwrap();
    assert_eq!(by_id.unwrap().name, "Peri Peri");

    let missing = repo
        .get_product_by_slug(&ProductSlug::new("no-such-product").unwrap())
        .unwrap();
    assert!(missing.is_none());
}

#[test]
fn category_listing_is_case_insensitive() {
    let mut upper = product("a", "A", 249.0);
    upper.category = CategoryName::new("ROASTED").unwrap();
    let lower = product("b", "B", 329.0);

    let repo = InMemoryCatalog::new(vec![upper, lower], vec![]);
    let listed = repo
        .list_by_category(&CategoryName::new("roasted").unwrap())
        .unwrap();
    assert_eq!(listed.len(), 2);
}

#[test]
fn related_products_exclude_self_and_respect_limit() {
    let products: Vec<_> = (1..=6)
        .map(|i| product(&format!("pack-{i}"), &format!("Pack {i}"), 249.0))
        .collect();
    let repo = InMemoryCatalog::new(products, vec![]);

    let slug = ProductSlug::new("pack-1").unwrap();
    let related = repo.list_related(&slug, DEFAULT_RELATED_LIMIT).unwrap();

    assert_eq!(related.len(), DEFAULT_RELATED_LIMIT);
    assert!(related.iter().all(|p| p.slug != slug));

    let unknown = ProductSlug::new("pack-99").unwrap();
    assert!(repo.list_related(&unknown, DEFAULT_RELATED_LIMIT).unwrap().is_empty());
}

#[test]
fn inactive_categories_stay_out_of_navigation() {
    let mut retired = category("trail-mixes", "Trail Mixes", 1);
    retired.is_active = false;
    let active = category("roasted", "Roasted", 2);

    let repo = InMemoryCatalog::new(vec![], vec![retired, active]);
    let listed = repo.list_categories().unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].slug, "roasted");

    // Direct slug lookup still reaches inactive categories.
    let by_slug = repo.get_category_by_slug("trail-mixes").unwrap();
    assert!(by_slug.is_some());
}

#[test]
fn bundled_seed_parses_and_holds_known_quirks() {
    let repo = InMemoryCatalog::bundled().expect("bundled seed should parse");

    let products = repo.list_products().unwrap();
    assert!(!products.is_empty());

    // Slugs are unique.
    for (i, a) in products.iter().enumerate() {
        for b in &products[i + 1..] {
            assert_ne!(a.slug, b.slug);
        }
    }

    // The seed intentionally carries stock-flag drift; the domain exposes
    // it instead of papering over it.
    assert!(products.iter().any(|p| !p.stock_is_consistent()));

    // And at least one product sits above the UI's default 1000 price cap.
    assert!(products.iter().any(|p| p.price.get() > 1000.0));

    let cards = show_categories(&repo).unwrap();
    assert!(cards.iter().all(|c| c.slug != "trail-mixes"));
    let flavoured = cards.iter().find(|c| c.slug == "flavoured").unwrap();
    assert_eq!(flavoured.products_count, 4);
}

#[test]
fn seed_round_trips_through_a_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(include_bytes!("../data/catalog.json"))
        .expect("write seed");

    let repo = InMemoryCatalog::from_json_file(file.path()).expect("seed file should parse");
    let page = show_product(
        &ProductSlug::new("classic-salted-makhana-100g").unwrap(),
        &repo,
    )
    .unwrap();

    assert_eq!(page.product.name, "Classic Salted Makhana");
    assert!(!page.related.is_empty());
    assert!(page.related.len() <= DEFAULT_RELATED_LIMIT);
}

#[test]
fn malformed_seed_reports_a_parse_error() {
    let err = InMemoryCatalog::from_json_str("{\"products\": []").unwrap_err();
    assert!(err.to_string().contains("parse"));
}
