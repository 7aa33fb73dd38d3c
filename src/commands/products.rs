use anyhow::{Result, bail};
use serde::Serialize;
use workshop_catalog::catalog::{self, PageLink, Selection};
use workshop_catalog::{Config, Product};
use workshop_catalog::source;

use super::{print_json, separator, truncate};

#[derive(Serialize)]
struct PageView<'a> {
    page: usize,
    pages: usize,
    total: usize,
    products: &'a [&'a Product],
    links: Vec<PageLink>,
}

pub fn run(config: &Config, category: Option<&str>, page: usize, json: bool) -> Result<()> {
    let products = source::load_products(config);
    let selection = Selection::from_arg(category);
    let filtered = catalog::filter(&products, &selection);
    let pages = catalog::page_count(filtered.len());
    check_page(page, pages)?;

    let view = PageView {
        page,
        pages,
        total: filtered.len(),
        products: catalog::page(&filtered, page),
        links: catalog::page_links(page, pages),
    };

    if json {
        return print_json(&view);
    }

    if view.total == 0 {
        println!("No products found in this category.");
        return Ok(());
    }

    println!("{:<4} {:<30} {:<22} Description", "#", "Product", "Category");
    separator(100);
    let offset = (page - 1) * catalog::PRODUCTS_PER_PAGE;
    for (i, p) in view.products.iter().enumerate() {
        println!(
            "{:<4} {:<30} {:<22} {}",
            offset + i + 1,
            truncate(&p.name, 30),
            truncate(&p.category, 22),
            truncate(&p.description, 40)
        );
    }
    separator(100);

    let strip: Vec<String> = view
        .links
        .iter()
        .map(|link| match link {
            PageLink::Page(n) if *n == page => format!("[{n}]"),
            PageLink::Page(n) => n.to_string(),
            PageLink::Gap => "...".to_string(),
        })
        .collect();
    println!("Page {page} of {pages} ({} products): {}", view.total, strip.join(" "));

    Ok(())
}

fn check_page(page: usize, pages: usize) -> Result<()> {
    if page == 0 {
        bail!("pages are numbered from 1");
    }
    if pages > 0 && page > pages {
        bail!("no products on page {page}, the last page is {pages}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::check_page;

    #[test]
    fn page_zero_rejected() {
        assert!(check_page(0, 3).is_err());
    }

    #[test]
    fn page_past_end_rejected() {
        let err = check_page(2, 1).unwrap_err();
        assert_eq!(err.to_string(), "no products on page 2, the last page is 1");
        assert!(check_page(usize::MAX, 1).is_err());
    }

    #[test]
    fn pages_in_range_accepted() {
        assert!(check_page(1, 1).is_ok());
        assert!(check_page(3, 3).is_ok());
    }

    #[test]
    fn empty_listing_accepts_first_page() {
        assert!(check_page(1, 0).is_ok());
    }
}
