//! List/detail selection.
//!
//! Only the selected *id* is stored. The item itself is looked up in the
//! current catalog on every read, so a detail view never shows a copy that
//! has drifted from the catalog it came from.

use tilth_core::{Catalog, CatalogItem, DisplayMode, ItemId, SelectionState};

/// Tracks which item, if any, is open in the detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an item's detail view.
    ///
    /// Ids missing from `catalog` leave the state untouched and return `false`.
    pub fn select<T: CatalogItem>(&mut self, id: &ItemId, catalog: &Catalog<T>) -> bool {
        if !catalog.contains(id) {
            tracing::debug!("Ignoring selection of unknown {} item {}", T::KIND, id);
            return false;
        }

        tracing::debug!("Selected {} item {}", T::KIND, id);
        self.state.selected_id = Some(id.clone());
        self.state.mode = DisplayMode::Detail;
        true
    }

    /// Return to the list. The id is kept so the host can restore scroll
    /// position or highlight the last-viewed item.
    pub fn back_to_list(&mut self) {
        self.state.mode = DisplayMode::List;
    }

    /// Alias for [`back_to_list`](Self::back_to_list).
    pub fn deselect(&mut self) {
        self.back_to_list();
    }

    /// Re-open the last selected item, if it still exists.
    pub fn reenter_detail<T: CatalogItem>(&mut self, catalog: &Catalog<T>) -> bool {
        match self.state.selected_id.clone() {
            Some(id) => self.select(&id, catalog),
            None => false,
        }
    }

    /// Resolve the selected item against the given catalog.
    ///
    /// Works in both modes, so the list can highlight the last opened item.
    /// `None` when nothing was selected or the id has vanished.
    pub fn selected<'a, T: CatalogItem>(&self, catalog: &'a Catalog<T>) -> Option<&'a T> {
        self.state.selected_id.as_ref().and_then(|id| catalog.get(id))
    }

    /// Check if detail mode points at an id the catalog no longer has.
    pub fn is_stale<T: CatalogItem>(&self, catalog: &Catalog<T>) -> bool {
        self.state.is_detail()
            && self
                .state
                .selected_id
                .as_ref()
                .is_some_and(|id| !catalog.contains(id))
    }

    /// Drop back to the list if the selection went stale.
    ///
    /// Returns `true` if the state changed.
    pub fn reconcile<T: CatalogItem>(&mut self, catalog: &Catalog<T>) -> bool {
        if !self.is_stale(catalog) {
            return false;
        }
        tracing::info!(
            "Selected {} item {:?} no longer in catalog, returning to list",
            T::KIND,
            self.state.selected_id
        );
        self.state = SelectionState::default();
        true
    }

    pub fn mode(&self) -> DisplayMode {
        self.state.mode
    }

    pub fn selected_id(&self) -> Option<&ItemId> {
        self.state.selected_id.as_ref()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }
}
