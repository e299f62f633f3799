//! Catalog query engine for the Tilth storefront.
//!
//! This crate turns a catalog snapshot plus view state into the page a
//! consumer renders:
//! - Filter, sort and paginate stages as pure functions
//! - View controller owning filters, sort, page and layout state
//! - List/detail selection resolved against the live catalog
//! - Shared snapshots with change broadcasts
//! - Catalog sources and sessions that adopt replacements

pub mod controller;
pub mod filter;
pub mod paginate;
pub mod selection;
pub mod session;
pub mod shared;
pub mod sort;
pub mod source;

// Re-export commonly used types
pub use controller::{CatalogPage, CatalogViewController};
pub use paginate::{paginate, Paginated};
pub use selection::SelectionController;
pub use session::CatalogSession;
pub use shared::SharedCatalog;
pub use source::{load_catalog, CatalogSource, JsonFileSource, StaticSource};

// Re-export tilth_core types for convenience
pub use tilth_core::{
    Catalog, CatalogError, CatalogItem, CatalogKind, FilterState, ItemId, PriceRange, SortKey,
    StorefrontConfig,
};
