//! One open catalog view bound to a shared snapshot.
//!
//! A session pairs a [`CatalogViewController`] and a [`SelectionController`]
//! with a [`SharedCatalog`]. Replacements published on the shared catalog are
//! picked up by [`CatalogSession::refresh`], which the host calls between
//! query cycles. A view never sees the catalog change underneath a cycle.

use std::sync::Arc;
use tokio::sync::watch;

use tilth_core::{Catalog, CatalogError, CatalogItem, ItemId, StorefrontConfig};

use crate::controller::{CatalogPage, CatalogViewController};
use crate::selection::SelectionController;
use crate::shared::SharedCatalog;
use crate::source::{load_catalog, CatalogSource};

pub struct CatalogSession<T: CatalogItem> {
    shared: Arc<SharedCatalog<T>>,
    updates: watch::Receiver<u64>,
    view: CatalogViewController<T>,
    selection: SelectionController,
}

impl<T: CatalogItem> CatalogSession<T> {
    /// Open a session on a shared catalog.
    pub fn open(shared: Arc<SharedCatalog<T>>, config: &StorefrontConfig) -> Self {
        let updates = shared.subscribe();
        let view = CatalogViewController::with_config(shared.snapshot(), config);
        Self {
            shared,
            updates,
            view,
            selection: SelectionController::new(),
        }
    }

    /// Load a source into a fresh shared catalog and open a session on it.
    pub fn from_source<S>(source: &S, config: &StorefrontConfig) -> Result<Self, CatalogError>
    where
        S: CatalogSource<T> + ?Sized,
    {
        let catalog = load_catalog(source)?;
        tracing::info!("Opened {} catalog with {} items", T::KIND, catalog.len());
        Ok(Self::open(Arc::new(SharedCatalog::new(catalog)), config))
    }

    /// Adopt the latest snapshot if one was published since the last refresh.
    ///
    /// Filters and sort survive, the page is clamped, and a selection whose
    /// item disappeared drops back to the list. Returns `true` if a new
    /// snapshot was adopted.
    pub fn refresh(&mut self) -> bool {
        if !self.updates.has_changed().unwrap_or(false) {
            return false;
        }
        let generation = *self.updates.borrow_and_update();
        tracing::debug!("Adopting {} catalog generation {}", T::KIND, generation);

        self.view.replace_catalog(self.shared.snapshot());
        self.selection.reconcile(self.view.catalog());
        true
    }

    /// Reload from a source and publish to every session on this catalog.
    pub fn reload_from<S>(&mut self, source: &S) -> Result<u64, CatalogError>
    where
        S: CatalogSource<T> + ?Sized,
    {
        let generation = self.shared.replace(load_catalog(source)?);
        self.refresh();
        Ok(generation)
    }

    pub fn current_view(&self) -> CatalogPage<'_, T> {
        self.view.current_view()
    }

    /// Open an item's detail view. Unknown ids are ignored.
    pub fn select(&mut self, id: &ItemId) -> bool {
        self.selection.select(id, self.view.catalog())
    }

    pub fn back_to_list(&mut self) {
        self.selection.back_to_list();
    }

    /// The selected item as it exists in the adopted snapshot.
    pub fn selected(&self) -> Option<&T> {
        self.selection.selected(self.view.catalog())
    }

    /// Items related to the current selection, empty when nothing is selected.
    pub fn related(&self, limit: usize) -> Vec<&T> {
        match self.selection.selected_id() {
            Some(id) => self.view.related(id, limit),
            None => Vec::new(),
        }
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn view(&self) -> &CatalogViewController<T> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut CatalogViewController<T> {
        &mut self.view
    }

    pub fn catalog(&self) -> &Arc<Catalog<T>> {
        self.view.catalog()
    }

    pub fn shared(&self) -> &Arc<SharedCatalog<T>> {
        &self.shared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockCatalogSource;
    use tilth_core::{samples, DisplayMode, RentalTool, SortKey};

    fn session() -> CatalogSession<RentalTool> {
        let mut source = MockCatalogSource::<RentalTool>::new();
        source
            .expect_load()
            .times(1)
            .returning(|| samples::rental_tools());
        CatalogSession::from_source(&source, &StorefrontConfig::default()).unwrap()
    }

    fn without(id: u64) -> Vec<RentalTool> {
        samples::rental_tools()
            .unwrap()
            .into_iter()
            .filter(|t| t.id != ItemId::from(id))
            .collect()
    }

    #[test]
    fn test_from_source_opens_first_page() {
        let session = session();
        let view = session.current_view();
        assert_eq!(view.filtered_count, 14);
        assert_eq!(view.items.len(), 6);
        assert_eq!(session.view().page_state().page_size, 6);
    }

    #[test]
    fn test_from_source_failure() {
        let mut source = MockCatalogSource::<RentalTool>::new();
        source
            .expect_load()
            .returning(|| Err(CatalogError::Source("timeout".to_string())));
        let result = CatalogSession::from_source(&source, &StorefrontConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_refresh_without_change_is_noop() {
        let mut session = session();
        assert!(!session.refresh());
    }

    #[test]
    fn test_refresh_adopts_replacement_and_keeps_filters() {
        let mut session = session();
        session.view_mut().set_sort_key(SortKey::PriceAsc);
        session.view_mut().set_available_only(true);

        session.shared().replace(Catalog::new(without(6)).unwrap());
        // Not adopted until the host refreshes.
        assert_eq!(session.catalog().len(), 14);

        assert!(session.refresh());
        assert_eq!(session.catalog().len(), 13);
        assert_eq!(session.view().sort_key(), SortKey::PriceAsc);
        let view = session.current_view();
        assert_eq!(view.filtered_count, 10);
        assert_eq!(view.items[0].name, "Rotary Tiller");
    }

    #[test]
    fn test_refresh_drops_stale_selection() {
        let mut session = session();
        assert!(session.select(&ItemId::from(4)));
        assert_eq!(session.selection().mode(), DisplayMode::Detail);

        session.shared().replace(Catalog::new(without(4)).unwrap());
        session.refresh();

        assert!(session.selected().is_none());
        assert_eq!(session.selection().mode(), DisplayMode::List);
    }

    #[test]
    fn test_refresh_keeps_surviving_selection() {
        let mut session = session();
        session.select(&ItemId::from(4));

        session.shared().replace(Catalog::new(without(9)).unwrap());
        session.refresh();

        assert_eq!(
            session.selected().map(|t| t.name.as_str()),
            Some("Commercial Harvester")
        );
    }

    #[test]
    fn test_two_sessions_share_replacements() {
        let shared = Arc::new(SharedCatalog::new(
            Catalog::new(samples::rental_tools().unwrap()).unwrap(),
        ));
        let config = StorefrontConfig::default();
        let mut first = CatalogSession::open(Arc::clone(&shared), &config);
        let mut second = CatalogSession::open(Arc::clone(&shared), &config);

        let mut reload = MockCatalogSource::<RentalTool>::new();
        reload.expect_load().times(1).returning(|| Ok(without(1)));
        assert_eq!(first.reload_from(&reload).unwrap(), 1);

        assert_eq!(first.catalog().len(), 13);
        assert_eq!(second.catalog().len(), 14);
        assert!(second.refresh());
        assert_eq!(second.catalog().len(), 13);
        assert!(!first.refresh());
    }

    #[test]
    fn test_select_unknown_id() {
        let mut session = session();
        assert!(!session.select(&ItemId::from("nope")));
        assert!(session.selected().is_none());

        session.select(&ItemId::from(1));
        session.back_to_list();
        assert_eq!(session.selection().selected_id(), Some(&ItemId::from(1)));
        assert_eq!(
            session.selected().map(|t| t.name.as_str()),
            Some("Tractor - Medium Duty")
        );
    }

    #[test]
    fn test_related_follows_selection() {
        let mut session = session();
        assert!(session.related(3).is_empty());

        session.select(&ItemId::from(2));
        let names: Vec<_> = session.related(3).iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Mini Excavator", "Farming tools"]);

        session.view_mut().set_search_term("excavator");
        let names: Vec<_> = session.related(3).iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Mini Excavator"]);
    }
}
