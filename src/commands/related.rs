use anyhow::{Result, bail};
use workshop_catalog::Config;
use workshop_catalog::catalog::{self, Direction, Selection};
use workshop_catalog::source;

use super::{print_json, separator, truncate};

pub fn run(config: &Config, name: &str, json: bool) -> Result<()> {
    let products = source::load_products(config);

    let Some(current) = products.iter().find(|p| p.name == name) else {
        bail!("no product named '{name}'");
    };

    let related = catalog::related(&products, current);

    if json {
        return print_json(&related);
    }

    println!("Related to {} ({}):", current.name, current.category);
    separator(70);
    if related.is_empty() {
        println!("  nothing else in this category");
    }
    for p in &related {
        println!("  {:<30} {}", truncate(&p.name, 30), truncate(&p.description, 36));
    }

    let siblings = catalog::filter(&products, &Selection::Category(current.category.clone()));
    let prev = catalog::step(&siblings, name, Direction::Prev);
    let next = catalog::step(&siblings, name, Direction::Next);
    if let (Some(prev), Some(next)) = (prev, next) {
        separator(70);
        println!("  < {}  |  {} >", prev.name, next.name);
    }

    Ok(())
}
