use anyhow::{Result, bail};
use workshop_catalog::Config;
use workshop_catalog::catalog::CategoryIndex;
use workshop_catalog::source::{self, Outcome};

pub fn run(config: &Config) -> Result<()> {
    let categories = source::fetch_categories(config);
    let products = source::fetch_products(config);
    let pieces = source::fetch_signature_pieces(config);

    let mut failures = 0;
    failures += report("categories", &config.categories_location(), &categories);
    failures += report("products", &config.products_location(), &products);
    failures += report("signature pieces", &config.pieces_location(), &pieces);

    if let (Ok(categories), Ok(products)) = (&categories, &products) {
        let index = CategoryIndex::build(categories, products);
        let unmatched = index.unmatched();
        if unmatched.is_empty() {
            println!("Every product category has a category row.");
        } else {
            println!();
            println!("Product categories with no category row:");
            for name in unmatched {
                println!("  {name:?} ({} products)", index.count(name));
            }
        }
    }

    if failures > 0 {
        bail!("{failures} source(s) unavailable");
    }

    Ok(())
}

fn report<T>(what: &str, location: &str, outcome: &Outcome<T>) -> usize {
    match outcome {
        Ok(records) => {
            println!("{what:<18} {:>5} records  {location}", records.len());
            0
        }
        Err(e) => {
            println!("{what:<18} FAILED  {e}");
            1
        }
    }
}
