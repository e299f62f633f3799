//! Pagination stage: cut one page out of the ordered result.

/// One page of an ordered result.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<'a, T> {
    /// Items on the page. At most `page_size` long.
    pub items: Vec<&'a T>,

    /// The page actually served, after clamping.
    pub page: usize,

    /// Always at least 1, even for an empty result.
    pub total_pages: usize,
}

/// Number of pages needed for `len` items. Never zero.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice out one page.
///
/// Out-of-range pages are clamped to the nearest valid page rather than
/// rejected, and a zero page size is treated as one.
pub fn paginate<'a, T>(items: &[&'a T], page: usize, page_size: usize) -> Paginated<'a, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page = clamp_page(page, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    let slice = items.get(start..end).unwrap_or_default();

    Paginated {
        items: slice.to_vec(),
        page,
        total_pages,
    }
}
