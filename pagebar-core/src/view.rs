use crate::window::{compute_slice, compute_window, total_pages};
use log::{debug, warn};
use std::fmt;

/// Paged list view state: the dataset plus the 1-indexed current page.
///
/// The page window and the visible slice are derived on demand, never
/// cached, so they cannot go stale when the dataset or page changes.
#[derive(Debug, Clone)]
pub struct PagedView<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub page_size: usize,
}

impl<T> PagedView<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            page_size,
        }
    }

    pub fn with_items(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            current_page: 1,
            page_size,
        }
    }

    /// Install a freshly acquired dataset. The current page is kept as-is.
    pub fn set_items(&mut self, items: Vec<T>) {
        debug!("dataset replaced: {} items", items.len());
        self.items = items;
    }

    /// Accept the acquisition result from the data source. Failure is a
    /// normal input, not an error state: it is logged and the view keeps
    /// operating on an empty dataset until data arrives.
    pub fn load<E: fmt::Display>(&mut self, result: Result<Vec<T>, E>) {
        match result {
            Ok(items) => self.set_items(items),
            Err(e) => {
                warn!("failed to acquire dataset, showing an empty list: {}", e);
                self.items = Vec::new();
            }
        }
    }

    /// Jump to `page` unconditionally. Out-of-range pages are stored
    /// unchanged; disabling boundary buttons is the renderer's job.
    pub fn go_to(&mut self, page: usize) {
        debug!("page {} -> {}", self.current_page, page);
        self.current_page = page;
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.page_size)
    }

    /// Slice bounds of the current page, clamped to the dataset.
    pub fn slice_bounds(&self) -> (usize, usize) {
        let (first, last) = compute_slice(self.current_page, self.page_size);
        (first.min(self.items.len()), last.min(self.items.len()))
    }

    pub fn visible_items(&self) -> &[T] {
        let (first, last) = self.slice_bounds();
        &self.items[first..last]
    }

    /// Everything the presentation layer needs for one render pass.
    pub fn snapshot(&self) -> PageState<'_, T> {
        let total_pages = self.total_pages();
        let window = compute_window(self.current_page, total_pages);
        PageState {
            visible_items: self.visible_items(),
            leading: window.leading,
            trailing: window.trailing,
            current_page: self.current_page,
            total_pages,
        }
    }
}

/// One render pass worth of view state, handed to the presentation layer.
#[derive(Debug)]
pub struct PageState<'a, T> {
    pub visible_items: &'a [T],
    pub leading: Vec<usize>,
    pub trailing: Vec<usize>,
    pub current_page: usize,
    pub total_pages: usize,
}

impl<T> PageState<'_, T> {
    /// True when the first/previous controls should be disabled.
    pub fn at_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// True when the next/last controls should be disabled.
    pub fn at_last_page(&self) -> bool {
        self.current_page == self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twelve_items() -> PagedView<usize> {
        PagedView::with_items((1..=12).collect(), 5)
    }

    #[test]
    fn starts_on_page_one() {
        let view: PagedView<u8> = PagedView::new(5);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.total_pages(), 0);
        assert!(view.visible_items().is_empty());
    }

    #[test]
    fn slices_follow_the_current_page() {
        let mut view = twelve_items();
        assert_eq!(view.visible_items(), &[1, 2, 3, 4, 5]);

        view.go_to(3);
        assert_eq!(view.slice_bounds(), (10, 12));
        assert_eq!(view.visible_items(), &[11, 12]);
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let mut view = twelve_items();
        view.go_to(4);
        assert_eq!(view.current_page, 4);
        assert!(view.visible_items().is_empty());
    }

    #[test]
    fn go_to_does_not_clamp() {
        let mut view = twelve_items();
        view.go_to(99);
        assert_eq!(view.current_page, 99);
        assert!(view.visible_items().is_empty());
    }

    #[test]
    fn snapshot_carries_window_and_slice() {
        let mut view = twelve_items();
        view.go_to(2);
        let state = view.snapshot();
        assert_eq!(state.visible_items, &[6, 7, 8, 9, 10]);
        assert_eq!(state.leading, vec![1]);
        assert_eq!(state.trailing, vec![3]);
        assert_eq!(state.current_page, 2);
        assert_eq!(state.total_pages, 3);
    }

    #[test]
    fn boundary_queries_for_the_renderer() {
        let mut view = twelve_items();
        assert!(view.snapshot().at_first_page());
        assert!(!view.snapshot().at_last_page());

        view.go_to(3);
        assert!(!view.snapshot().at_first_page());
        assert!(view.snapshot().at_last_page());
    }

    #[test]
    fn failed_acquisition_degrades_to_empty() {
        let mut view: PagedView<usize> = PagedView::new(5);
        view.load(Err("connection refused"));
        assert_eq!(view.total_pages(), 0);
        let state = view.snapshot();
        assert!(state.visible_items.is_empty());
        assert!(state.leading.is_empty());
        assert!(state.trailing.is_empty());
    }

    #[test]
    fn late_arriving_data_replaces_the_empty_view() {
        let mut view: PagedView<usize> = PagedView::new(5);
        assert!(view.visible_items().is_empty());

        view.load(Ok::<_, String>((1..=7).collect()));
        assert_eq!(view.total_pages(), 2);
        assert_eq!(view.visible_items(), &[1, 2, 3, 4, 5]);
    }
}
