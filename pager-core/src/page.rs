//! Pure pagination math. Pages are zero-based here; only the footer shows
//! them one-based.

use crate::action::NavAction;

/// Compute the number of pages for a paginated list.
///
/// An empty list still has exactly one (empty) page.
pub fn page_count(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1)).max(1)
}

/// Clamp a page index into `[0, page_count - 1]`.
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.min(page_count.max(1) - 1)
}

/// Return start/end indices for a page window.
pub fn page_window(item_count: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = page.saturating_mul(safe_per_page).min(item_count);
    let end = start.saturating_add(safe_per_page).min(item_count);
    (start, end)
}

/// Items shown on `page`.
pub fn visible_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let (start, end) = page_window(items.len(), per_page, page);
    &items[start..end]
}

/// Apply a navigation action to the current page.
///
/// Back and next clamp at the edges instead of wrapping; a control can be
/// pressed after the boundary moved underneath it. `Stop` leaves the page
/// unchanged.
pub fn apply_action(current: usize, page_count: usize, action: NavAction) -> usize {
    let last = page_count.max(1) - 1;
    let current = current.min(last);

    match action {
        NavAction::First => 0,
        NavAction::Back => current.saturating_sub(1),
        NavAction::Next => (current + 1).min(last),
        NavAction::Last => last,
        NavAction::Stop => current,
    }
}

/// Cursor position of one message within its pages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageState {
    pub current: usize,
    pub count: usize,
}

impl PageState {
    pub fn new(current: usize, count: usize) -> Self {
        let count = count.max(1);
        Self {
            current: clamp_page(current, count),
            count,
        }
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.count
    }

    pub fn footer_text(&self) -> String {
        format!("Page {} of {}", self.current + 1, self.count)
    }
}
