pub mod catalog;
pub mod config;
pub mod csv;
pub mod parse;
pub mod record;
pub mod source;

pub use config::Config;
pub use record::{Category, Product, SignaturePiece};
pub use source::SourceError;
