pub mod view;
pub mod window;

pub use view::{PageState, PagedView};
pub use window::{DEFAULT_PAGE_SIZE, PageWindow, compute_slice, compute_window, total_pages};
