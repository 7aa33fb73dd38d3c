//! Fetching the sheets and turning them into records.
//!
//! `fetch_*` return the tagged outcome; `load_*` collapse a failure to an empty
//! list after logging it, which is what the galleries want.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::parse;
use crate::record::{Category, Product, SignaturePiece};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not fetch {location}: {reason}")]
    Transport { location: String, reason: String },
    #[error("{location} is not valid UTF-8 text")]
    Malformed { location: String },
}

impl SourceError {
    pub fn location(&self) -> &str {
        match self {
            Self::Transport { location, .. } | Self::Malformed { location } => location,
        }
    }
}

pub type Outcome<T> = Result<Vec<T>, SourceError>;

pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Reads `location` as text, over HTTP for URLs and from disk otherwise.
pub fn fetch_text(location: &str, timeout: Option<Duration>) -> Result<String, SourceError> {
    let bytes = if is_remote(location) {
        fetch_remote(location, timeout)?
    } else {
        std::fs::read(location).map_err(|e| transport(location, e))?
    };

    String::from_utf8(bytes).map_err(|_| SourceError::Malformed { location: location.to_string() })
}

fn fetch_remote(url: &str, timeout: Option<Duration>) -> Result<Vec<u8>, SourceError> {
    let agent = ureq::Agent::new_with_config(
        ureq::config::Config::builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build(),
    );

    let mut response = agent.get(url).call().map_err(|e| transport(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(transport(url, format!("HTTP {status}")));
    }

    response.body_mut().read_to_vec().map_err(|e| transport(url, e))
}

fn transport(location: &str, reason: impl ToString) -> SourceError {
    SourceError::Transport { location: location.to_string(), reason: reason.to_string() }
}

fn fetch_with<T>(
    location: &str,
    timeout: Option<Duration>,
    parser: fn(&str) -> Vec<T>,
) -> Outcome<T> {
    let text = fetch_text(location, timeout)?;
    let records = parser(&text);
    debug!(location, bytes = text.len(), records = records.len(), "parsed source");
    Ok(records)
}

pub fn fetch_categories(config: &Config) -> Outcome<Category> {
    fetch_with(&config.categories_location(), config.timeout, parse::parse_categories)
}

pub fn fetch_products(config: &Config) -> Outcome<Product> {
    fetch_with(&config.products_location(), config.timeout, parse::parse_products)
}

pub fn fetch_signature_pieces(config: &Config) -> Outcome<SignaturePiece> {
    fetch_with(&config.pieces_location(), config.timeout, parse::parse_signature_pieces)
}

/// Collapses a failed outcome to an empty list. Callers cannot tell an empty
/// sheet from a missing one; the log is the only trace of the failure.
pub fn or_empty<T>(what: &str, outcome: Outcome<T>) -> Vec<T> {
    outcome.unwrap_or_else(|e| {
        warn!(source = what, location = e.location(), error = %e, "source unavailable, showing nothing");
        Vec::new()
    })
}

pub fn load_categories(config: &Config) -> Vec<Category> {
    or_empty("categories", fetch_categories(config))
}

pub fn load_products(config: &Config) -> Vec<Product> {
    or_empty("products", fetch_products(config))
}

pub fn load_signature_pieces(config: &Config) -> Vec<SignaturePiece> {
    or_empty("signature pieces", fetch_signature_pieces(config))
}
