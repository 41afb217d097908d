use iced::widget::scrollable::RelativeOffset;

/// Scroll and geometry tracking for the page scrollable.
pub struct ViewportState {
    pub(in crate::app) last_scroll_offset: RelativeOffset,
    pub(in crate::app) viewport_width: f32,
    pub(in crate::app) viewport_height: f32,
    pub(in crate::app) content_width: f32,
    pub(in crate::app) content_height: f32,
    /// Last reported window size; used before any scroll event arrives.
    pub(in crate::app) window_width: f32,
    pub(in crate::app) window_height: f32,
}

impl ViewportState {
    pub(in crate::app) fn new(window_width: f32, window_height: f32) -> Self {
        ViewportState {
            last_scroll_offset: RelativeOffset::START,
            viewport_width: 0.0,
            viewport_height: 0.0,
            content_width: 0.0,
            content_height: 0.0,
            window_width,
            window_height,
        }
    }

    /// Best available width for layout decisions: live viewport if reported,
    /// then the reported content width, then the tracked window size.
    pub(in crate::app) fn effective_width(&self) -> f32 {
        if self.viewport_width > 0.0 {
            self.viewport_width
        } else if self.content_width > 0.0 {
            self.content_width
        } else {
            self.window_width.max(1.0)
        }
    }
}
