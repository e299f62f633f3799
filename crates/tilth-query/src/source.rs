//! Catalog sources.
//!
//! A source produces the raw item list for one catalog. The query engine
//! never touches a source directly; a session loads from it and hands the
//! validated snapshot to the view.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use tilth_core::{Catalog, CatalogError, CatalogItem};

/// Anything that can produce a full item list for one catalog.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogSource<T: CatalogItem> {
    /// Load every item. Called on open and on each refresh.
    fn load(&self) -> Result<Vec<T>, CatalogError>;
}

/// Load from a source and validate into a catalog snapshot.
pub fn load_catalog<T, S>(source: &S) -> Result<Catalog<T>, CatalogError>
where
    T: CatalogItem,
    S: CatalogSource<T> + ?Sized,
{
    let items = source.load()?;
    Catalog::new(items)
}

// =============================================================================
// StaticSource
// =============================================================================

/// An in-memory item list, such as a bundled sample dataset.
#[derive(Debug, Clone)]
pub struct StaticSource<T> {
    items: Vec<T>,
}

impl<T: CatalogItem> StaticSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: CatalogItem> CatalogSource<T> for StaticSource<T> {
    fn load(&self) -> Result<Vec<T>, CatalogError> {
        Ok(self.items.clone())
    }
}

// =============================================================================
// JsonFileSource
// =============================================================================

/// A JSON array of items on disk, re-read on every load.
#[derive(Debug, Clone)]
pub struct JsonFileSource<T> {
    path: PathBuf,
    _item: PhantomData<fn() -> T>,
}

impl<T: CatalogItem> JsonFileSource<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _item: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> CatalogSource<T> for JsonFileSource<T>
where
    T: CatalogItem + serde::de::DeserializeOwned,
{
    fn load(&self) -> Result<Vec<T>, CatalogError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| CatalogError::Source(format!("{}: {}", self.path.display(), e)))?;
        let items: Vec<T> = serde_json::from_str(&content)?;
        tracing::debug!(
            "Loaded {} {} items from {}",
            items.len(),
            T::KIND,
            self.path.display()
        );
        Ok(items)
    }
}
