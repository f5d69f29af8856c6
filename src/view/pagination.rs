//! Page windows and navigation over a record count.
//!
//! Pagination knows nothing about row content: given a record count, a page
//! size and a requested page, [`paginate`] clamps the page into range and
//! describes which page numbers and navigation moves a renderer should offer.

use serde::Serialize;
use std::ops::Range;

/// Number of rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Upper bound on numbered page controls; the window spans half of it on each
/// side of the current page.
pub const DEFAULT_MAX_BUTTONS: usize = 10;

/// A navigation move a renderer may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIntent {
    First,
    Previous,
    Next,
    Last,
}

impl NavIntent {
    /// Label used by text renderers.
    pub const fn label(&self) -> &'static str {
        match self {
            NavIntent::First => "start",
            NavIntent::Previous => "previous",
            NavIntent::Next => "next",
            NavIntent::Last => "end",
        }
    }
}

/// A valid navigation move and the page it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub intent: NavIntent,
    pub target: usize,
}

/// Pagination state for one render cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    /// Records being paginated (after filtering)
    pub total_records: usize,
    /// Current page, 1-based, clamped into `[1, total_pages]`
    pub current_page: usize,
    /// Records per page
    pub page_size: usize,
    /// `ceil(total_records / page_size)`
    pub total_pages: usize,
    /// Page numbers to expose as controls, ascending
    pub window: Vec<usize>,
    /// Valid navigation moves, in First/Previous/Next/Last order
    pub navigation: Vec<NavLink>,
}

impl PageDescriptor {
    /// Whether `page` is the current page.
    #[inline]
    pub fn is_current(&self, page: usize) -> bool {
        page == self.current_page && self.total_pages > 0
    }

    /// Target page of a navigation move, when that move is valid.
    pub fn target(&self, intent: NavIntent) -> Option<usize> {
        self.navigation
            .iter()
            .find(|link| link.intent == intent)
            .map(|link| link.target)
    }

    /// Whether a navigation move is offered.
    #[inline]
    pub fn has(&self, intent: NavIntent) -> bool {
        self.target(intent).is_some()
    }

    /// Index range of the records shown on the current page.
    pub fn record_range(&self) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(self.total_records);
        let end = start.saturating_add(self.page_size).min(self.total_records);
        start..end
    }
}

/// Number of pages needed for `total_records`; zero records means zero pages.
#[inline]
pub fn total_pages(total_records: usize, page_size: usize) -> usize {
    total_records.div_ceil(page_size.max(1))
}

/// Clamp a requested page into `[1, total_pages]` (1 when there are no pages).
#[inline]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Describe the page window for `current_page` with the default button count.
///
/// # Examples
/// ```
/// use tablescope::view::pagination::{NavIntent, paginate};
///
/// let page = paginate(23, 2, 15);
/// assert_eq!(page.total_pages, 2);
/// assert_eq!(page.window, vec![1, 2]);
/// assert!(page.has(NavIntent::Previous));
/// assert!(!page.has(NavIntent::Next));
/// ```
pub fn paginate(total_records: usize, current_page: usize, page_size: usize) -> PageDescriptor {
    paginate_with(total_records, current_page, page_size, DEFAULT_MAX_BUTTONS)
}

/// Describe the page window for `current_page`.
///
/// A page size of zero is treated as one. The window runs from
/// `max(1, current - max_buttons / 2)` to `min(total_pages, current + max_buttons / 2)`.
pub fn paginate_with(
    total_records: usize,
    current_page: usize,
    page_size: usize,
    max_buttons: usize,
) -> PageDescriptor {
    let page_size = page_size.max(1);
    let total_pages = total_pages(total_records, page_size);
    let current = clamp_page(current_page, total_pages);
    if current != current_page {
        tracing::debug!(requested = current_page, current, total_pages, "clamped page request");
    }

    let radius = max_buttons / 2;
    let window = if total_pages == 0 {
        Vec::new()
    } else {
        let start = current.saturating_sub(radius).max(1);
        let end = current.saturating_add(radius).min(total_pages);
        (start..=end).collect()
    };

    let mut navigation = Vec::with_capacity(4);
    if current > 1 {
        navigation.push(NavLink { intent: NavIntent::First, target: 1 });
        navigation.push(NavLink { intent: NavIntent::Previous, target: current - 1 });
    }
    if current < total_pages {
        navigation.push(NavLink { intent: NavIntent::Next, target: current + 1 });
        navigation.push(NavLink { intent: NavIntent::Last, target: total_pages });
    }

    PageDescriptor {
        total_records,
        current_page: current,
        page_size,
        total_pages,
        window,
        navigation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_last_page_of_two() {
        let page = paginate(23, 2, 15);

        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.window, vec![1, 2]);
        assert_eq!(page.target(NavIntent::First), Some(1));
        assert_eq!(page.target(NavIntent::Previous), Some(1));
        assert!(!page.has(NavIntent::Next));
        assert!(!page.has(NavIntent::Last));
        assert_eq!(page.record_range(), 15..23);
    }

    #[test]
    fn test_first_page() {
        let page = paginate(100, 1, 15);

        assert_eq!(page.total_pages, 7);
        assert_eq!(page.window, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(
            page.navigation,
            vec![
                NavLink { intent: NavIntent::Next, target: 2 },
                NavLink { intent: NavIntent::Last, target: 7 },
            ]
        );
        assert_eq!(page.record_range(), 0..15);
    }

    #[test]
    fn test_window_centered_in_middle() {
        let page = paginate(1000, 20, 10);

        assert_eq!(page.total_pages, 100);
        assert_eq!(page.window, (15..=25).collect::<Vec<_>>());
        assert_eq!(page.navigation.len(), 4);
        assert_eq!(page.target(NavIntent::Previous), Some(19));
        assert_eq!(page.target(NavIntent::Next), Some(21));
        assert_eq!(page.target(NavIntent::Last), Some(100));
    }

    #[test]
    fn test_empty_result() {
        let page = paginate(0, 1, 15);

        assert_eq!(page.total_pages, 0);
        assert_eq!(page.current_page, 1);
        assert!(page.window.is_empty());
        assert!(page.navigation.is_empty());
        assert!(!page.is_current(1));
        assert_eq!(page.record_range(), 0..0);
    }

    #[test]
    fn test_stale_page_is_clamped() {
        let page = paginate(20, 9, 15);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.record_range(), 15..20);

        let page = paginate(20, 0, 15);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn test_single_page() {
        let page = paginate(15, 1, 15);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.window, vec![1]);
        assert!(page.navigation.is_empty());
        assert!(page.is_current(1));
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let page = paginate(3, 2, 0);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.record_range(), 1..2);
    }

    proptest! {
        #[test]
        fn prop_window_within_bounds(
            total in 0usize..10_000,
            current in 1usize..2_000,
            size in 1usize..100,
        ) {
            let page = paginate(total, current, size);

            prop_assert_eq!(page.total_pages, total.div_ceil(size));
            prop_assert!(page.window.len() <= DEFAULT_MAX_BUTTONS + 1);
            for &n in &page.window {
                prop_assert!(n >= 1 && n <= page.total_pages);
            }
            prop_assert!(page.window.windows(2).all(|w| w[1] == w[0] + 1));
            for link in &page.navigation {
                prop_assert!(link.target >= 1 && link.target <= page.total_pages);
                prop_assert_ne!(link.target, page.current_page);
            }

            let range = page.record_range();
            prop_assert!(range.end <= total);
            prop_assert!(range.len() <= size);
            if total > 0 {
                prop_assert!(!range.is_empty());
            }
        }

        #[test]
        fn prop_empty_has_no_controls(current in 0usize..50, size in 1usize..50) {
            let page = paginate(0, current, size);
            prop_assert_eq!(page.total_pages, 0);
            prop_assert!(page.window.is_empty());
            prop_assert!(page.navigation.is_empty());
        }
    }
}
