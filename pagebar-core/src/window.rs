use std::cmp::min;

/// Default number of items shown per page, matching the original list view.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page numbers displayed around the current page button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub leading: Vec<usize>,
    pub trailing: Vec<usize>,
}

/// Number of pages needed to show `total_items` at `page_size` per page.
///
/// Always derived, never stored, so it cannot drift from the dataset.
/// An empty dataset has zero pages.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    (total_items + page_size - 1) / page_size
}

/// Compute the page numbers shown before and after `current_page`.
///
/// The window is the two pages on either side of the current page, with
/// extra padding near the first and last pages so the bar keeps roughly
/// the same width there. The padding is asymmetric on purpose: leading
/// padding goes in front of the two-back range and is derived from
/// `total_pages`, while trailing padding near the start appends the
/// literal pages 4 and 5 after the two-ahead range. Pure function; all
/// arithmetic is total, so `total_pages == 0` or an out-of-range
/// `current_page` yields empty or short windows rather than a panic.
pub fn compute_window(current_page: usize, total_pages: usize) -> PageWindow {
    let mut leading = Vec::new();
    // On the last page, pad with up to two earlier pages first.
    if current_page == total_pages {
        if current_page.saturating_sub(4) > 0 {
            leading.push(total_pages - 4);
        }
        if current_page.saturating_sub(3) > 1 {
            leading.push(total_pages - 3);
        }
    }
    // On the second-to-last page, one extra page is enough.
    if current_page + 1 == total_pages && current_page.saturating_sub(4) > 0 {
        leading.push(total_pages - 4);
    }
    for page in current_page.saturating_sub(2).max(1)..current_page {
        leading.push(page);
    }

    let mut trailing = Vec::new();
    for page in current_page + 1..=min(current_page + 2, total_pages) {
        trailing.push(page);
    }
    // Near the first page, pad the tail of the bar with pages 4 and 5.
    if current_page == 1 {
        if current_page + 2 < total_pages {
            trailing.push(4);
        }
        if current_page + 3 < total_pages {
            trailing.push(5);
        }
    }
    if current_page == 2 && current_page + 3 < total_pages {
        trailing.push(5);
    }

    PageWindow { leading, trailing }
}

/// Start (inclusive) and end (exclusive) item indices for `current_page`.
///
/// Bounds are not clamped to any dataset here; callers slice with
/// saturation so out-of-range pages give a short or empty slice.
pub fn compute_slice(current_page: usize, page_size: usize) -> (usize, usize) {
    let first = current_page.saturating_sub(1) * page_size;
    (first, current_page * page_size)
}
