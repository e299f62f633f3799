//! Pagination state.

use serde::{Deserialize, Serialize};

/// Current page and page size of a catalog view.
///
/// `current_page` is 1-based and the owner keeps it inside
/// `[1, max(1, total_pages)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl PageState {
    /// First page with the given size. A zero size degrades to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Back to the first page.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(6)
    }
}
