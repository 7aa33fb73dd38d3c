use std::time::Duration;

use workshop_catalog::Config;

#[test]
fn test_default_locations() {
    let config = Config::default();
    assert_eq!(config.categories_location(), "data/categories.csv");
    assert_eq!(config.products_location(), "data/products.csv");
    assert_eq!(config.pieces_location(), "data/signature-pieces.csv");
    assert_eq!(config.timeout, None);
}

#[test]
fn test_base_trailing_slash_and_url() {
    let config = Config::default().with_base("https://cdn.example.com/sheets/");
    assert_eq!(config.products_location(), "https://cdn.example.com/sheets/products.csv");
}

#[test]
fn test_empty_base_uses_bare_file_names() {
    let config = Config::default().with_base("");
    assert_eq!(config.categories_location(), "categories.csv");
}

// Everything touching the process environment lives in one test so nothing races.
#[test]
fn test_from_env() {
    // SAFETY: the only test in this binary that reads or writes these variables
    unsafe {
        std::env::set_var("CATALOG_BASE", "https://cdn.example.com");
        std::env::set_var("CATALOG_PRODUCTS", "products-2024.csv");
        std::env::set_var("CATALOG_CATEGORIES", "  ");
        std::env::set_var("CATALOG_TIMEOUT_SECS", "15");
    }
    let config = Config::from_env();
    assert_eq!(config.products_location(), "https://cdn.example.com/products-2024.csv");
    assert_eq!(config.categories_location(), "https://cdn.example.com/categories.csv");
    assert_eq!(config.timeout, Some(Duration::from_secs(15)));

    unsafe { std::env::set_var("CATALOG_TIMEOUT_SECS", "soon") };
    assert_eq!(Config::from_env().timeout, None);

    unsafe {
        for key in ["CATALOG_BASE", "CATALOG_PRODUCTS", "CATALOG_CATEGORIES", "CATALOG_TIMEOUT_SECS"] {
            std::env::remove_var(key);
        }
    }
    assert_eq!(Config::from_env(), Config::default());
}
