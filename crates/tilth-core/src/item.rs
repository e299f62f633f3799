//! Item identity and the catalog schema trait.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::filter::FilterDimensions;
use crate::sort::SortKey;

/// Stable item identifier.
///
/// Source data uses integer ids for some catalogs and string ids for others;
/// both deserialize into the same string-backed id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct ItemId(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(u64),
    Str(String),
}

impl From<RawId> for ItemId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => Self(n.to_string()),
            RawId::Str(s) => Self(s),
        }
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Which storefront section a catalog belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// Public product catalog.
    Products,
    /// Public equipment-rental catalog.
    Rentals,
    /// Admin product list.
    Inventory,
}

impl CatalogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Products => "products",
            CatalogKind::Rentals => "rentals",
            CatalogKind::Inventory => "inventory",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a detail view draws its related items from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelatedScope {
    /// The whole catalog, in catalog order.
    Catalog,
    /// The current filtered and sorted result.
    CurrentResult,
}

/// Schema every catalog element exposes to the query engine.
///
/// The engine only ever reads items through this trait, so the three
/// storefront sections share one filter/sort/paginate pipeline while keeping
/// their own record layouts. Optional attributes default to "absent".
pub trait CatalogItem: Clone + fmt::Debug + Send + Sync + 'static {
    /// Section this schema belongs to.
    const KIND: CatalogKind;

    fn id(&self) -> &ItemId;

    fn name(&self) -> &str;

    /// Long-form text also searched by the free-text filter.
    fn description(&self) -> Option<&str> {
        None
    }

    fn category(&self) -> &str;

    fn subcategory(&self) -> Option<&str> {
        None
    }

    fn location(&self) -> Option<&str> {
        None
    }

    /// Canonical price (`price` or `pricePerDay`, whichever the schema has).
    fn price(&self) -> f64;

    fn is_available(&self) -> bool;

    fn rating(&self) -> Option<f64> {
        None
    }

    /// Drives the default relevance ranking.
    fn review_count(&self) -> u32 {
        0
    }

    fn stock(&self) -> Option<u32> {
        None
    }

    /// Filter predicates this catalog supports.
    fn dimensions() -> FilterDimensions;

    /// Sort keys this catalog supports. Anything else falls back to relevance.
    fn sort_keys() -> &'static [SortKey];

    /// Ordering a freshly opened view starts with.
    fn default_sort() -> SortKey {
        SortKey::Relevance
    }

    /// Candidate pool for "related items" on the detail view.
    fn related_scope() -> RelatedScope {
        RelatedScope::Catalog
    }

    /// How many related items a detail view shows.
    fn related_limit() -> usize {
        4
    }

    /// Check whether a sort key is meaningful for this schema.
    fn supports_sort(key: SortKey) -> bool {
        Self::sort_keys().contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_from_integer_json() {
        let id: ItemId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ItemId::from(42));
        assert_eq!(id.as_ref(), "42");
    }

    #[test]
    fn test_item_id_from_string_json() {
        let id: ItemId = serde_json::from_str("\"sku-7\"").unwrap();
        assert_eq!(id, ItemId::from("sku-7"));
    }

    #[test]
    fn test_item_id_serializes_as_string() {
        let json = serde_json::to_string(&ItemId::from(3)).unwrap();
        assert_eq!(json, "\"3\"");
    }

    #[test]
    fn test_catalog_kind_display() {
        assert_eq!(CatalogKind::Rentals.to_string(), "rentals");
        assert_eq!(CatalogKind::Inventory.as_str(), "inventory");
    }
}
