//! Error types for the Tilth storefront.
//!
//! View operations never fail; these only arise where catalogs are built or
//! loaded and where configuration is read.

use thiserror::Error;

use crate::item::ItemId;

/// Catalog construction and loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two items share an id, breaking the identity contract.
    #[error("Duplicate item id '{0}'")]
    DuplicateId(ItemId),

    /// Price is negative, NaN or infinite.
    #[error("Item '{id}' has invalid price {price}")]
    InvalidPrice { id: ItemId, price: f64 },

    /// Source could not be read.
    #[error("Catalog source unavailable: {0}")]
    Source(String),

    /// Source data did not match the item schema.
    #[error("Catalog parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}
