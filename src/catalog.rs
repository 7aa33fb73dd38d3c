use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::record::{Category, Product};

pub const PRODUCTS_PER_PAGE: usize = 12;
const MAX_PAGE_LINKS: usize = 7;

/// Category name as used for matching: trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryKey(String);

impl CategoryKey {
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Products grouped by category, built once per load.
#[derive(Debug, Default)]
pub struct CategoryIndex {
    groups: HashMap<CategoryKey, Vec<usize>>,
    unmatched: Vec<String>,
}

impl CategoryIndex {
    pub fn build(categories: &[Category], products: &[Product]) -> Self {
        let known: HashSet<CategoryKey> = categories.iter().map(|c| CategoryKey::new(&c.name)).collect();
        let mut groups: HashMap<CategoryKey, Vec<usize>> = HashMap::new();
        let mut unmatched: Vec<String> = Vec::new();

        for (i, product) in products.iter().enumerate() {
            let key = CategoryKey::new(&product.category);
            if !known.contains(&key) && !groups.contains_key(&key) {
                unmatched.push(product.category.clone());
            }
            groups.entry(key).or_default().push(i);
        }

        Self { groups, unmatched }
    }

    /// Product categories with no category row, first-seen spelling, in source order.
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    pub fn products_in<'a>(&self, products: &'a [Product], name: &str) -> Vec<&'a Product> {
        self.groups
            .get(&CategoryKey::new(name))
            .map(|positions| positions.iter().filter_map(|&i| products.get(i)).collect())
            .unwrap_or_default()
    }

    pub fn count(&self, name: &str) -> usize {
        self.groups.get(&CategoryKey::new(name)).map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Category(String),
}

impl Selection {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Self::All,
            Some(name) if name.trim().eq_ignore_ascii_case("all") => Self::All,
            Some(name) => Self::Category(name.to_string()),
        }
    }
}

pub fn filter<'a>(products: &'a [Product], selection: &Selection) -> Vec<&'a Product> {
    match selection {
        Selection::All => products.iter().collect(),
        Selection::Category(name) => {
            let key = CategoryKey::new(name);
            products.iter().filter(|p| CategoryKey::new(&p.category) == key).collect()
        }
    }
}

pub fn page_count(items: usize) -> usize {
    items.div_ceil(PRODUCTS_PER_PAGE)
}

/// Items on 1-based `page`; empty when the page is out of range.
pub fn page<T>(items: &[T], page: usize) -> &[T] {
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(PRODUCTS_PER_PAGE)) else { return &[] };
    if start >= items.len() {
        return &[];
    }
    &items[start..(start + PRODUCTS_PER_PAGE).min(items.len())]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageLink {
    Page(usize),
    Gap,
}

/// Page strip of at most seven entries, with gaps around the current page.
pub fn page_links(current: usize, total: usize) -> Vec<PageLink> {
    use PageLink::{Gap, Page};

    if total <= MAX_PAGE_LINKS {
        return (1..=total).map(Page).collect();
    }

    let mut links = Vec::with_capacity(MAX_PAGE_LINKS);
    if current <= 4 {
        links.extend((1..=5).map(Page));
        links.extend([Gap, Page(total)]);
    } else if current >= total - 3 {
        links.extend([Page(1), Gap]);
        links.extend((total - 4..=total).map(Page));
    } else {
        links.extend([Page(1), Gap]);
        links.extend((current - 1..=current + 1).map(Page));
        links.extend([Gap, Page(total)]);
    }
    links
}

/// Other products in the same category, in source order.
pub fn related<'a>(products: &'a [Product], current: &Product) -> Vec<&'a Product> {
    let key = CategoryKey::new(&current.category);
    products
        .iter()
        .filter(|p| p.name != current.name && CategoryKey::new(&p.category) == key)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Neighbour of the product named `current`, wrapping at both ends.
pub fn step<'a>(products: &[&'a Product], current: &str, direction: Direction) -> Option<&'a Product> {
    let len = products.len();
    let at = products.iter().position(|p| p.name == current)?;
    let next = match direction {
        Direction::Prev => (at + len - 1) % len,
        Direction::Next => (at + 1) % len,
    };
    products.get(next).copied()
}
