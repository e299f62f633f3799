//! Item schemas for the three storefront sections.
//!
//! Field names follow the source data (`pricePerDay`, `reviewCount`, `inStock`).

use serde::{Deserialize, Serialize};

use crate::filter::FilterDimensions;
use crate::item::{CatalogItem, CatalogKind, ItemId, RelatedScope};
use crate::sort::SortKey;

// =============================================================================
// Rental catalog
// =============================================================================

/// A piece of equipment offered for rent by the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalTool {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub subcategory: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    pub rating: f64,

    #[serde(default)]
    pub review_count: u32,

    pub price_per_day: f64,
    pub available: bool,

    /// Pickup location.
    pub location: String,

    #[serde(default)]
    pub description: String,
}

impl CatalogItem for RentalTool {
    const KIND: CatalogKind = CatalogKind::Rentals;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn subcategory(&self) -> Option<&str> {
        Some(&self.subcategory)
    }

    fn location(&self) -> Option<&str> {
        Some(&self.location)
    }

    fn price(&self) -> f64 {
        self.price_per_day
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn rating(&self) -> Option<f64> {
        Some(self.rating)
    }

    fn review_count(&self) -> u32 {
        self.review_count
    }

    fn dimensions() -> FilterDimensions {
        FilterDimensions::ALL
    }

    /// Related equipment follows the list the renter is browsing.
    fn related_scope() -> RelatedScope {
        RelatedScope::CurrentResult
    }

    fn related_limit() -> usize {
        3
    }

    fn sort_keys() -> &'static [SortKey] {
        &[
            SortKey::Relevance,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::RatingDesc,
            SortKey::NameAsc,
            SortKey::NameDesc,
        ]
    }
}

// =============================================================================
// Product catalog
// =============================================================================

/// A product sold in the public storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub description: String,

    pub in_stock: bool,

    #[serde(default)]
    pub details: ProductDetails,
}

/// Technical details shown on the product detail page.
///
/// Only the fields the catalog engine reads are typed; everything else the
/// source carries (weight, composition, feature lists) is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(default)]
    pub reviews: u32,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CatalogItem for Product {
    const KIND: CatalogKind = CatalogKind::Products;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn is_available(&self) -> bool {
        self.in_stock
    }

    fn rating(&self) -> Option<f64> {
        self.details.rating
    }

    fn review_count(&self) -> u32 {
        self.details.reviews
    }

    fn dimensions() -> FilterDimensions {
        FilterDimensions {
            category: true,
            subcategory: false,
            location: false,
            availability: true,
            price_range: true,
        }
    }

    fn sort_keys() -> &'static [SortKey] {
        &[
            SortKey::Relevance,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::RatingDesc,
            SortKey::NameAsc,
            SortKey::NameDesc,
        ]
    }
}

// =============================================================================
// Admin inventory
// =============================================================================

/// A product row in the admin inventory list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryProduct {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub featured: bool,
}

impl InventoryProduct {
    /// Stock below this level is flagged on the dashboard.
    pub const LOW_STOCK_THRESHOLD: u32 = 5;

    pub fn is_low_stock(&self) -> bool {
        self.stock < Self::LOW_STOCK_THRESHOLD
    }
}

impl CatalogItem for InventoryProduct {
    const KIND: CatalogKind = CatalogKind::Inventory;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn is_available(&self) -> bool {
        self.stock > 0
    }

    fn stock(&self) -> Option<u32> {
        Some(self.stock)
    }

    fn dimensions() -> FilterDimensions {
        FilterDimensions {
            category: true,
            subcategory: false,
            location: false,
            availability: true,
            price_range: true,
        }
    }

    fn sort_keys() -> &'static [SortKey] {
        &[
            SortKey::Relevance,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::NameAsc,
            SortKey::NameDesc,
            SortKey::StockAsc,
            SortKey::StockDesc,
        ]
    }

    fn default_sort() -> SortKey {
        SortKey::NameAsc
    }
}
