//! Pure pagination math for the gallery.
//!
//! Everything here is deterministic arithmetic over the item snapshot; the
//! logic is isolated from the UI so the page-count and page-window rules can
//! be tested without building an application.

/// Fixed number of items shown per page in positional mode.
pub const ITEMS_PER_PAGE: usize = 6;

/// How visible items are selected for a page.
///
/// The mode is decided once per item collection from the first item's marker
/// presence and stored in the gallery state; markers on later items still
/// raise the page count but do not flip the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityMode {
    /// Items are sliced into fixed-size windows by their position.
    Positional,
    /// An item is visible only on the page named by its own marker.
    Explicit,
}

/// Decide the visibility mode from the first item's marker presence.
pub fn detect_mode(markers: &[Option<u32>]) -> VisibilityMode {
    match markers.first() {
        Some(Some(_)) => VisibilityMode::Explicit,
        _ => VisibilityMode::Positional,
    }
}

/// Compute the page count for a collection of items.
///
/// The positional count is `ceil(item_count / per_page)`; explicit markers can
/// only grow it. An absent marker counts as page 1. The result is never zero.
pub fn total_pages(item_count: usize, per_page: usize, markers: &[Option<u32>]) -> usize {
    let positional = item_count.div_ceil(per_page.max(1));
    let max_marker = markers
        .iter()
        .map(|marker| marker.unwrap_or(1) as usize)
        .max()
        .unwrap_or(1);
    positional.max(max_marker).max(1)
}

/// Return zero-based start/end indices for a one-based page in positional mode.
pub fn page_window(total_items: usize, per_page: usize, page: u32) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = (page.saturating_sub(1) as usize).saturating_mul(safe_per_page);
    let end = start.saturating_add(safe_per_page).min(total_items);
    (start.min(total_items), end)
}

/// Whether the item at `index` with `marker` is visible on `page`.
pub fn item_visible_on_page(
    mode: VisibilityMode,
    index: usize,
    marker: Option<u32>,
    per_page: usize,
    page: u32,
) -> bool {
    match mode {
        VisibilityMode::Explicit => marker == Some(page),
        VisibilityMode::Positional => {
            let (start, end) = page_window(usize::MAX, per_page, page);
            (start..end).contains(&index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_items_make_three_pages() {
        assert_eq!(total_pages(13, ITEMS_PER_PAGE, &[None; 13]), 3);
    }

    #[test]
    fn exact_multiple_makes_one_page_per_window() {
        assert_eq!(total_pages(6, ITEMS_PER_PAGE, &[None; 6]), 1);
        assert_eq!(total_pages(12, ITEMS_PER_PAGE, &[None; 12]), 2);
    }

    #[test]
    fn zero_items_still_report_one_page() {
        assert_eq!(total_pages(0, ITEMS_PER_PAGE, &[]), 1);
    }

    #[test]
    fn explicit_marker_raises_page_count() {
        let markers = [Some(1), Some(5), Some(2)];
        assert_eq!(total_pages(3, ITEMS_PER_PAGE, &markers), 5);
    }

    #[test]
    fn positional_count_wins_over_smaller_markers() {
        let markers: Vec<Option<u32>> = (0..13).map(|_| Some(2)).collect();
        assert_eq!(total_pages(13, ITEMS_PER_PAGE, &markers), 3);
    }

    #[test]
    fn absent_markers_count_as_page_one() {
        let markers = [None, Some(4), None];
        assert_eq!(total_pages(3, ITEMS_PER_PAGE, &markers), 4);
    }

    #[test]
    fn mode_follows_first_item_only() {
        assert_eq!(detect_mode(&[]), VisibilityMode::Positional);
        assert_eq!(detect_mode(&[None, Some(3)]), VisibilityMode::Positional);
        assert_eq!(detect_mode(&[Some(1), None]), VisibilityMode::Explicit);
    }

    #[test]
    fn page_window_covers_expected_indices() {
        assert_eq!(page_window(13, ITEMS_PER_PAGE, 1), (0, 6));
        assert_eq!(page_window(13, ITEMS_PER_PAGE, 2), (6, 12));
        assert_eq!(page_window(13, ITEMS_PER_PAGE, 3), (12, 13));
    }

    #[test]
    fn positional_visibility_matches_window() {
        for index in 0..13 {
            let expected = (6..12).contains(&index);
            assert_eq!(
                item_visible_on_page(VisibilityMode::Positional, index, None, ITEMS_PER_PAGE, 2),
                expected,
                "index {index}"
            );
        }
    }

    #[test]
    fn explicit_visibility_requires_matching_marker() {
        assert!(item_visible_on_page(
            VisibilityMode::Explicit,
            0,
            Some(2),
            ITEMS_PER_PAGE,
            2
        ));
        assert!(!item_visible_on_page(
            VisibilityMode::Explicit,
            0,
            Some(1),
            ITEMS_PER_PAGE,
            2
        ));
        // An unmarked item never matches any page in explicit mode.
        assert!(!item_visible_on_page(
            VisibilityMode::Explicit,
            0,
            None,
            ITEMS_PER_PAGE,
            1
        ));
    }
}
