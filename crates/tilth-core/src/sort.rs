//! Sort key types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display ordering. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog-defined ranking: review count, descending.
    #[default]
    #[serde(alias = "recommended")]
    Relevance,
    #[serde(alias = "price-low")]
    PriceAsc,
    #[serde(alias = "price-high")]
    PriceDesc,
    #[serde(alias = "rating")]
    RatingDesc,
    NameAsc,
    NameDesc,
    StockAsc,
    StockDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::Relevance,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::StockAsc,
        SortKey::StockDesc,
    ];

    /// Canonical kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::StockAsc => "stock-asc",
            SortKey::StockDesc => "stock-desc",
        }
    }

    /// Parse a canonical name or storefront alias.
    pub fn parse(value: &str) -> Option<SortKey> {
        let key = match value.trim().to_ascii_lowercase().as_str() {
            "relevance" | "recommended" => SortKey::Relevance,
            "price-asc" | "price-low" => SortKey::PriceAsc,
            "price-desc" | "price-high" => SortKey::PriceDesc,
            "rating-desc" | "rating" => SortKey::RatingDesc,
            "name-asc" | "name" => SortKey::NameAsc,
            "name-desc" => SortKey::NameDesc,
            "stock-asc" | "stock" => SortKey::StockAsc,
            "stock-desc" => SortKey::StockDesc,
            _ => return None,
        };
        Some(key)
    }

    /// Parse, falling back to relevance for anything unrecognized.
    pub fn parse_lenient(value: &str) -> SortKey {
        SortKey::parse(value).unwrap_or_else(|| {
            tracing::debug!("Unknown sort key '{}', using relevance", value);
            SortKey::Relevance
        })
    }

    /// Column and direction, for keys that map to a sortable column.
    pub fn column(&self) -> Option<(SortField, SortDirection)> {
        match self {
            SortKey::Relevance | SortKey::RatingDesc => None,
            SortKey::NameAsc => Some((SortField::Name, SortDirection::Asc)),
            SortKey::NameDesc => Some((SortField::Name, SortDirection::Desc)),
            SortKey::PriceAsc => Some((SortField::Price, SortDirection::Asc)),
            SortKey::PriceDesc => Some((SortField::Price, SortDirection::Desc)),
            SortKey::StockAsc => Some((SortField::Stock, SortDirection::Asc)),
            SortKey::StockDesc => Some((SortField::Stock, SortDirection::Desc)),
        }
    }

    /// Key for a column and direction.
    pub fn from_column(field: SortField, direction: SortDirection) -> SortKey {
        match (field, direction) {
            (SortField::Name, SortDirection::Asc) => SortKey::NameAsc,
            (SortField::Name, SortDirection::Desc) => SortKey::NameDesc,
            (SortField::Price, SortDirection::Asc) => SortKey::PriceAsc,
            (SortField::Price, SortDirection::Desc) => SortKey::PriceDesc,
            (SortField::Stock, SortDirection::Asc) => SortKey::StockAsc,
            (SortField::Stock, SortDirection::Desc) => SortKey::StockDesc,
        }
    }

    /// Column-header click: the active column flips direction, a new column
    /// starts ascending.
    pub fn toggled(self, field: SortField) -> SortKey {
        match self.column() {
            Some((current, direction)) if current == field => {
                SortKey::from_column(field, direction.reversed())
            }
            _ => SortKey::from_column(field, SortDirection::Asc),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sortable admin table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Price,
    Stock,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}
