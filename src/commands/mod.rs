pub mod categories;
pub mod check;
pub mod pieces;
pub mod products;
pub mod related;

use anyhow::Result;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn separator(width: usize) {
    println!("{}", "-".repeat(width));
}

pub fn truncate(s: &str, max: usize) -> String {
    let flat = s.replace('\n', " ");
    if flat.chars().count() <= max {
        flat
    } else {
        let cut: String = flat.chars().take(max - 3).collect();
        format!("{cut}...")
    }
}
