use std::time::Duration;

use tracing::warn;

pub const DEFAULT_BASE: &str = "data";
pub const DEFAULT_CATEGORIES: &str = "categories.csv";
pub const DEFAULT_PRODUCTS: &str = "products.csv";
pub const DEFAULT_PIECES: &str = "signature-pieces.csv";

/// Where the three sheets live. A base starting with `http://` or `https://`
/// is fetched over HTTP, anything else is a directory on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base: String,
    pub categories: String,
    pub products: String,
    pub pieces: String,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_string(),
            categories: DEFAULT_CATEGORIES.to_string(),
            products: DEFAULT_PRODUCTS.to_string(),
            pieces: DEFAULT_PIECES.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base: env_or("CATALOG_BASE", defaults.base),
            categories: env_or("CATALOG_CATEGORIES", defaults.categories),
            products: env_or("CATALOG_PRODUCTS", defaults.products),
            pieces: env_or("CATALOG_PIECES", defaults.pieces),
            timeout: timeout_from_env(),
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn categories_location(&self) -> String {
        self.join(&self.categories)
    }

    pub fn products_location(&self) -> String {
        self.join(&self.products)
    }

    pub fn pieces_location(&self) -> String {
        self.join(&self.pieces)
    }

    fn join(&self, file: &str) -> String {
        if self.base.is_empty() {
            file.to_string()
        } else {
            format!("{}/{file}", self.base.trim_end_matches('/'))
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty()).unwrap_or(default)
}

fn timeout_from_env() -> Option<Duration> {
    let raw = std::env::var("CATALOG_TIMEOUT_SECS").ok()?;
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => {
            warn!(value = %raw, "ignoring invalid CATALOG_TIMEOUT_SECS");
            None
        }
    }
}
