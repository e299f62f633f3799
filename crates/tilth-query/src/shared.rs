//! Shared catalog snapshot with change notifications.
//!
//! Replacing the snapshot and notifying subscribers happen in one call, so
//! nothing can swap the catalog without every open view finding out.

use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::watch;

use tilth_core::{Catalog, CatalogItem};

// =============================================================================
// SharedCatalog
// =============================================================================

/// A catalog snapshot shared between views.
///
/// Readers get an `Arc` to an immutable snapshot, so a query cycle keeps
/// working on the catalog it started with even if a replacement lands
/// mid-cycle. Each replacement bumps a generation counter broadcast over
/// `tokio::sync::watch`.
///
/// ## Thread Safety
///
/// Uses `parking_lot::RwLock` for the snapshot pointer (never poisons) and
/// `tokio::sync::watch` for broadcasts.
pub struct SharedCatalog<T: CatalogItem> {
    inner: RwLock<Arc<Catalog<T>>>,
    tx: watch::Sender<u64>,
}

impl<T: CatalogItem> SharedCatalog<T> {
    /// Create a shared catalog starting at generation 0.
    pub fn new(catalog: Catalog<T>) -> Self {
        let (tx, _rx) = watch::channel(0);
        Self {
            inner: RwLock::new(Arc::new(catalog)),
            tx,
        }
    }

    // =========================================================================
    // Mutation (broadcasts automatically)
    // =========================================================================

    /// Swap in a new snapshot and notify subscribers.
    ///
    /// Returns the new generation.
    pub fn replace(&self, catalog: Catalog<T>) -> u64 {
        let len = catalog.len();
        {
            let mut inner = self.inner.write();
            *inner = Arc::new(catalog);
        }

        let mut generation = 0;
        self.tx.send_modify(|g| {
            *g += 1;
            generation = *g;
        });
        tracing::debug!(
            "Replaced {} catalog ({} items), generation {}",
            T::KIND,
            len,
            generation
        );
        generation
    }

    // =========================================================================
    // Read Methods
    // =========================================================================

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<Catalog<T>> {
        self.inner.read().clone()
    }

    /// Number of replacements so far.
    pub fn generation(&self) -> u64 {
        *self.tx.borrow()
    }

    /// Subscribe to replacements. The receiver starts with the current
    /// generation marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }
}

impl<T: CatalogItem> Default for SharedCatalog<T> {
    fn default() -> Self {
        Self::new(Catalog::empty())
    }
}

impl<T: CatalogItem> std::fmt::Debug for SharedCatalog<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedCatalog")
            .field("kind", &T::KIND)
            .field("items", &self.inner.read().len())
            .field("generation", &self.generation())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilth_core::{samples, RentalTool};

    fn rentals() -> Catalog<RentalTool> {
        Catalog::new(samples::rental_tools().unwrap()).unwrap()
    }

    #[test]
    fn test_new_starts_at_generation_zero() {
        let shared = SharedCatalog::new(rentals());
        assert_eq!(shared.generation(), 0);
        assert_eq!(shared.snapshot().len(), 14);
    }

    #[test]
    fn test_replace_bumps_generation_and_notifies() {
        let shared = SharedCatalog::new(rentals());
        let mut rx = shared.subscribe();
        assert!(!rx.has_changed().unwrap());

        let generation = shared.replace(Catalog::empty());
        assert_eq!(generation, 1);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 1);
        assert!(!rx.has_changed().unwrap());
        assert!(shared.snapshot().is_empty());
    }

    #[test]
    fn test_replace_without_subscribers() {
        let shared: SharedCatalog<RentalTool> = SharedCatalog::default();
        assert_eq!(shared.replace(rentals()), 1);
        assert_eq!(shared.replace(rentals()), 2);
        assert_eq!(shared.generation(), 2);
    }

    #[test]
    fn test_old_snapshot_survives_replacement() {
        let shared = SharedCatalog::new(rentals());
        let held = shared.snapshot();
        shared.replace(Catalog::empty());

        assert_eq!(held.len(), 14);
        assert!(shared.snapshot().is_empty());
    }

    #[test]
    fn test_replace_visible_across_threads() {
        let shared = Arc::new(SharedCatalog::new(rentals()));
        let mut rx = shared.subscribe();

        let writer = Arc::clone(&shared);
        std::thread::spawn(move || {
            writer.replace(Catalog::empty());
        })
        .join()
        .unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 1);
        assert!(shared.snapshot().is_empty());
    }
}
