use crate::pagination::VisibilityMode;
use crate::portfolio::PortfolioItem;

/// Pagination model: the item snapshot and the page bookkeeping over it.
pub struct GalleryState {
    pub(in crate::app) items: Vec<PortfolioItem>,
    /// One-based current page; always within `1..=total_pages`.
    pub(in crate::app) current_page: u32,
    pub(in crate::app) total_pages: u32,
    pub(in crate::app) mode: VisibilityMode,
}

impl GalleryState {
    /// State before any items have been collected. Accessors report page 1 of
    /// 1 and the view renders no page controls.
    pub(in crate::app) fn inert() -> Self {
        GalleryState {
            items: Vec::new(),
            current_page: 1,
            total_pages: 1,
            mode: VisibilityMode::Positional,
        }
    }

    pub(in crate::app) fn visible_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| item.visible.then_some(idx))
            .collect()
    }
}
