//! Catalog view controller.
//!
//! Owns the mutable view state of one open catalog (filters, sort key, page,
//! layout, expanded sidebar sections) and derives the visible page on demand
//! by running filter → sort → paginate against the current snapshot.
//!
//! ## Invariants
//!
//! - Any filter or sort change resets the page to 1.
//! - The stored page never points past the last page of the current result.
//! - `current_view()` recomputes from scratch; nothing derived is cached.

use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

use tilth_core::{
    Catalog, CatalogItem, Facets, FilterSection, FilterState, ItemId, LayoutMode, PageState,
    PriceRange, RelatedScope, SortField, SortKey, StorefrontConfig,
};

use crate::filter::filter;
use crate::paginate::{clamp_page, paginate, total_pages};
use crate::sort::{effective_key, sort};

// =============================================================================
// Derived View
// =============================================================================

/// The page a consumer renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage<'a, T> {
    /// Items on this page, in display order.
    pub items: Vec<&'a T>,

    /// 1-based page served.
    pub page: usize,

    pub page_size: usize,

    /// At least 1, so an empty result reads "page 1 of 1".
    pub total_pages: usize,

    /// Items matching the filters across all pages.
    pub filtered_count: usize,
}

impl<T> CatalogPage<'_, T> {
    /// 1-based positions of the first and last item shown, for
    /// "Showing 7-12 of 14". `None` when the page is empty.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}

// =============================================================================
// Controller
// =============================================================================

/// View state and pipeline orchestration for one catalog.
#[derive(Debug)]
pub struct CatalogViewController<T: CatalogItem> {
    catalog: Arc<Catalog<T>>,
    filters: FilterState,
    sort_key: SortKey,
    page: PageState,
    layout: LayoutMode,
    expanded: HashSet<FilterSection>,
}

impl<T: CatalogItem> CatalogViewController<T> {
    /// Open a view with default state.
    pub fn new(catalog: Arc<Catalog<T>>, page_size: usize) -> Self {
        Self {
            catalog,
            filters: FilterState::default(),
            sort_key: T::default_sort(),
            page: PageState::new(page_size),
            layout: LayoutMode::default(),
            expanded: FilterSection::ALL.into_iter().collect(),
        }
    }

    /// Open a view using configured page size, sort and layout.
    pub fn with_config(catalog: Arc<Catalog<T>>, config: &StorefrontConfig) -> Self {
        let mut controller = Self::new(catalog, config.page_size_for(T::KIND));
        if let Some(key) = config.default_sort.filter(|k| T::supports_sort(*k)) {
            controller.sort_key = key;
        }
        controller.layout = config.layout;
        controller
    }

    // =========================================================================
    // Filter Operations (each resets to page 1)
    // =========================================================================

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filters.search_term = term.into();
        self.reset_page("search term changed");
    }

    /// Set the category; `None`, blank and "All" clear it.
    pub fn set_category(&mut self, category: Option<String>) {
        if !self.dimension_supported(T::dimensions().category, "category") {
            return;
        }
        self.filters = std::mem::take(&mut self.filters).with_category(category);
        self.reset_page("category changed");
    }

    /// Set the subcategory; `None`, blank and "All" clear it.
    pub fn set_subcategory(&mut self, subcategory: Option<String>) {
        if !self.dimension_supported(T::dimensions().subcategory, "subcategory") {
            return;
        }
        self.filters = std::mem::take(&mut self.filters).with_subcategory(subcategory);
        self.reset_page("subcategory changed");
    }

    /// Set the pickup location; `None`, blank and "All" clear it.
    pub fn set_location(&mut self, location: Option<String>) {
        if !self.dimension_supported(T::dimensions().location, "location") {
            return;
        }
        self.filters = std::mem::take(&mut self.filters).with_location(location);
        self.reset_page("location changed");
    }

    pub fn set_available_only(&mut self, available_only: bool) {
        if !self.dimension_supported(T::dimensions().availability, "availability") {
            return;
        }
        self.filters.available_only = available_only;
        self.reset_page("availability changed");
    }

    pub fn toggle_available_only(&mut self) {
        let next = !self.filters.available_only;
        self.set_available_only(next);
    }

    /// Set the price range. Malformed bounds are repaired, not rejected.
    pub fn set_price_range(&mut self, range: Option<PriceRange>) {
        if !self.dimension_supported(T::dimensions().price_range, "price range") {
            return;
        }
        let normalized = range.and_then(PriceRange::normalized);
        if range.is_some() && normalized != range {
            tracing::warn!("Malformed price range {:?} normalized to {:?}", range, normalized);
        }
        self.filters.price_range = normalized;
        self.reset_page("price range changed");
    }

    /// Reset every filter. Sort, layout and selection are untouched.
    pub fn clear_all_filters(&mut self) {
        self.filters = FilterState::default();
        self.reset_page("filters cleared");
    }

    // =========================================================================
    // Sort Operations (each resets to page 1)
    // =========================================================================

    /// Set the sort key. Keys this catalog cannot order by become relevance.
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = effective_key::<T>(key);
        self.reset_page("sort changed");
    }

    /// Set the sort key from its name or a storefront alias ("price-high").
    pub fn set_sort_by(&mut self, name: &str) {
        self.set_sort_key(SortKey::parse_lenient(name));
    }

    /// Column-header sort: same column flips direction, new column ascends.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.set_sort_key(self.sort_key.toggled(field));
    }

    // =========================================================================
    // Page Operations
    // =========================================================================

    /// Go to a page, clamped to the current result.
    pub fn set_page(&mut self, page: usize) {
        let clamped = clamp_page(page, self.total_pages());
        if clamped != page {
            tracing::debug!("Requested page {} clamped to {}", page, clamped);
        }
        self.page.current_page = clamped;
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.current_page.saturating_sub(1));
    }

    /// Change the page size. Zero degrades to one; the page resets to 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page = PageState::new(page_size);
    }

    // =========================================================================
    // Presentation State (never affects the pipeline)
    // =========================================================================

    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
    }

    /// Expand or collapse a sidebar section.
    pub fn toggle_filter_section(&mut self, section: FilterSection) {
        if !self.expanded.remove(&section) {
            self.expanded.insert(section);
        }
    }

    pub fn is_section_expanded(&self, section: FilterSection) -> bool {
        self.expanded.contains(&section)
    }

    // =========================================================================
    // Catalog Replacement
    // =========================================================================

    /// Swap in a new snapshot between query cycles.
    ///
    /// Filters and sort survive; the page is clamped to the new result size.
    /// Filter values that no longer exist simply match nothing.
    pub fn replace_catalog(&mut self, catalog: Arc<Catalog<T>>) {
        tracing::info!(
            "Replacing {} catalog: {} -> {} items",
            T::KIND,
            self.catalog.len(),
            catalog.len()
        );
        self.catalog = catalog;
        let clamped = clamp_page(self.page.current_page, self.total_pages());
        if clamped != self.page.current_page {
            tracing::debug!(
                "Page {} out of range after replacement, now {}",
                self.page.current_page,
                clamped
            );
            self.page.current_page = clamped;
        }
    }

    // =========================================================================
    // Derived View
    // =========================================================================

    /// Run filter → sort → paginate against the current snapshot.
    pub fn current_view(&self) -> CatalogPage<'_, T> {
        let filtered = filter(self.catalog.items(), &self.filters);
        let filtered_count = filtered.len();
        let ordered = sort(&filtered, self.sort_key);
        let page = paginate(&ordered, self.page.current_page, self.page.page_size);

        CatalogPage {
            items: page.items,
            page: page.page,
            page_size: self.page.page_size,
            total_pages: page.total_pages,
            filtered_count,
        }
    }

    /// Items matching the current filters.
    pub fn filtered_count(&self) -> usize {
        filter(self.catalog.items(), &self.filters).len()
    }

    /// Pages in the current result. At least 1.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.page.page_size)
    }

    /// Selector values for the filter sidebar.
    pub fn facets(&self) -> Facets {
        self.catalog.facets()
    }

    /// Up to `limit` other items in the same category as `id`.
    ///
    /// The pool is the current filtered and sorted result for schemas that
    /// browse related items alongside the list, otherwise the whole catalog
    /// in catalog order. Unknown ids have no related items.
    pub fn related(&self, id: &ItemId, limit: usize) -> Vec<&T> {
        let Some(anchor) = self.catalog.get(id) else {
            tracing::debug!("No {} item {} to relate to", T::KIND, id);
            return Vec::new();
        };

        let pool = match T::related_scope() {
            RelatedScope::CurrentResult => {
                sort(&filter(self.catalog.items(), &self.filters), self.sort_key)
            }
            RelatedScope::Catalog => self.catalog.iter().collect(),
        };

        pool.into_iter()
            .filter(|item| item.category() == anchor.category() && item.id() != id)
            .take(limit)
            .collect()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn catalog(&self) -> &Arc<Catalog<T>> {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn reset_page(&mut self, reason: &str) {
        if self.page.current_page != 1 {
            tracing::debug!("Page reset to 1: {}", reason);
        }
        self.page.reset();
    }

    fn dimension_supported(&self, supported: bool, name: &str) -> bool {
        if !supported {
            tracing::debug!("{} catalog has no {} filter, ignoring", T::KIND, name);
        }
        supported
    }
}

// =============================================================================
// Tests
// =============================================================================
