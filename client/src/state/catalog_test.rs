use super::*;
use std::collections::HashSet;

#[test]
fn all_filter_returns_full_catalog_in_order() {
    let products = filter_products(CategoryFilter::All);
    assert_eq!(products.len(), PRODUCTS.len());
    let ids: Vec<u32> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, (1..=18).collect::<Vec<_>>());
}

#[test]
fn category_filter_returns_only_matching_products() {
    for category in Category::ALL {
        let products = filter_products(CategoryFilter::Only(category));
        assert!(!products.is_empty(), "{category:?} should have products");
        assert!(products.iter().all(|p| p.category == category));
        let expected = PRODUCTS.iter().filter(|p| p.category == category).count();
        assert_eq!(products.len(), expected);
    }
}

#[test]
fn category_counts_match_catalog() {
    let count = |c| filter_products(CategoryFilter::Only(c)).len();
    assert_eq!(count(Category::Snacks), 2);
    assert_eq!(count(Category::Drinks), 4);
    assert_eq!(count(Category::Stationery), 4);
    assert_eq!(count(Category::Meals), 3);
    assert_eq!(count(Category::Hygiene), 2);
    assert_eq!(count(Category::Accessories), 3);
}

#[test]
fn product_ids_are_unique() {
    let ids: HashSet<u32> = PRODUCTS.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), PRODUCTS.len());
}

#[test]
fn filter_slugs_are_distinct() {
    let slugs: HashSet<&str> = CategoryFilter::choices().into_iter().map(CategoryFilter::slug).collect();
    assert_eq!(slugs.len(), CategoryFilter::choices().len());
    assert!(slugs.contains("all"));
}

#[test]
fn choices_start_with_all() {
    let choices = CategoryFilter::choices();
    assert_eq!(choices.len(), 7);
    assert_eq!(choices[0], CategoryFilter::All);
    assert_eq!(choices[0].label(), "All");
    assert_eq!(choices[1].label(), "Snacks");
}

#[test]
fn image_background_uses_accent_alphas() {
    let product = &PRODUCTS[0];
    assert_eq!(
        product.image_background(),
        "background: linear-gradient(135deg, #F59E0B20, #F59E0B40);"
    );
    assert_eq!(product.icon_style(), "color: #F59E0B; font-size: 3.5rem;");
}
