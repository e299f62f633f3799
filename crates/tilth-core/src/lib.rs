//! Core types for the Tilth storefront.
//!
//! This crate contains the shared data structures used by every Tilth crate:
//! - Item identity and the `CatalogItem` schema trait
//! - The product, rental and inventory item schemas
//! - Validated catalog snapshots with facets
//! - Filter, sort, page, selection and layout state types
//! - Configuration types
//! - Error types
//! - Bundled sample datasets

mod catalog;
mod config;
mod error;
mod filter;
mod item;
mod page;
mod schemas;
mod selection;
mod sort;

pub mod samples;

pub use catalog::{Catalog, Facets};
pub use config::{config_dir, config_path, PageSizes, StorefrontConfig};
pub use error::{CatalogError, ConfigError};
pub use filter::{FilterDimensions, FilterState, PriceRange};
pub use item::{CatalogItem, CatalogKind, ItemId, RelatedScope};
pub use page::PageState;
pub use schemas::{InventoryProduct, Product, ProductDetails, RentalTool};
pub use selection::{DisplayMode, FilterSection, LayoutMode, SelectionState};
pub use sort::{SortDirection, SortField, SortKey};
