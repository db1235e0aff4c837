/// Fixed page size, matching the layout of the list view.
pub const TODOS_PER_PAGE: usize = 8;

/// Number of pages needed to show `len` items. Zero when the list is empty;
/// the footer displays `max(total_pages, 1)` so the counter never reads 0.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(TODOS_PER_PAGE)
}

/// Clamp a 1-based page number into `[1, total_pages]`, with a floor of 1
/// even for an empty list.
pub fn clamp(page: usize, len: usize) -> usize {
    page.min(total_pages(len)).max(1)
}

pub fn next(page: usize, len: usize) -> usize {
    clamp(page + 1, len)
}

pub fn prev(page: usize) -> usize {
    page.saturating_sub(1).max(1)
}

/// Zero-based bounds of the visible slice for a 1-based page:
/// `[(page-1)*8, page*8)` capped at `len`.
pub fn slice_bounds(page: usize, len: usize) -> (usize, usize) {
    let start = (page.saturating_sub(1) * TODOS_PER_PAGE).min(len);
    let end = (start + TODOS_PER_PAGE).min(len);
    (start, end)
}
