use crate::csv;
use crate::record::{Category, Product, SignaturePiece};

/// `name,imageUrl` rows split at the first comma, so URLs may contain commas.
pub fn parse_categories(text: &str) -> Vec<Category> {
    text.split('\n')
        .skip(1)
        .map(str::trim)
        .filter_map(|line| line.split_once(','))
        .map(|(name, url)| (name.trim(), url.trim()))
        .filter(|(name, url)| !name.is_empty() && !url.is_empty())
        .map(|(name, url)| Category { name: name.to_string(), image_url: url.to_string() })
        .collect()
}

/// `name,category,imageUrl,description` rows with quoting. Rows with fewer
/// than four fields are dropped.
pub fn parse_products(text: &str) -> Vec<Product> {
    csv::logical_rows(text)
        .into_iter()
        .map(|row| csv::split_fields(&row))
        .filter(|fields| fields.len() >= 4)
        .map(|fields| {
            let field = |i: usize| fields.get(i).map(|f| f.trim().to_string()).unwrap_or_default();
            Product {
                name: field(0),
                category: field(1),
                image_url: field(2),
                description: field(3),
            }
        })
        .collect()
}

/// One bare image URL per non-blank line; ids count from 1 after the header.
pub fn parse_signature_pieces(text: &str) -> Vec<SignaturePiece> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .skip(1)
        .map(|(id, line)| SignaturePiece { image_url: line.to_string(), id })
        .collect()
}
