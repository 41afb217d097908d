use crate::masonry::MasonryGrid;
use std::time::Instant;

/// Layout reflow model: the optional masonry engine and the pending-reflow
/// deadline shared by the visibility and resize debounce paths.
pub struct LayoutState {
    /// `None` when masonry is disabled in config; reflows are skipped and the
    /// view falls back to a uniform grid.
    pub(in crate::app) masonry: Option<MasonryGrid>,
    /// Rescheduling overwrites the deadline, which cancels and restarts the
    /// trailing debounce.
    pub(in crate::app) pending_reflow_at: Option<Instant>,
}

impl LayoutState {
    pub(in crate::app) fn new(masonry: Option<MasonryGrid>) -> Self {
        LayoutState {
            masonry,
            pending_reflow_at: None,
        }
    }

    pub(in crate::app) fn has_pending_reflow(&self) -> bool {
        self.pending_reflow_at.is_some()
    }
}
