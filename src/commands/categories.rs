use anyhow::Result;
use serde::Serialize;
use workshop_catalog::Config;
use workshop_catalog::catalog::CategoryIndex;
use workshop_catalog::source;

use super::{print_json, separator, truncate};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Row<'a> {
    name: &'a str,
    image_url: &'a str,
    products: usize,
}

pub fn run(config: &Config, json: bool) -> Result<()> {
    let categories = source::load_categories(config);
    let products = source::load_products(config);
    let index = CategoryIndex::build(&categories, &products);

    let rows: Vec<Row> = categories
        .iter()
        .map(|c| Row { name: &c.name, image_url: &c.image_url, products: index.count(&c.name) })
        .collect();

    if json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("No categories to show.");
        return Ok(());
    }

    println!("{:<30} {:>8}  Image", "Category", "Products");
    separator(90);
    for r in &rows {
        println!("{:<30} {:>8}  {}", truncate(r.name, 30), r.products, r.image_url);
    }
    separator(90);
    println!("{} categories", rows.len());

    Ok(())
}
