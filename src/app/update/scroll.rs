use super::super::state::{
    App, CARD_ROW_HEIGHT_PX, CONTROLS_ROW_HEIGHT_PX, HERO_SECTION_HEIGHT_PX,
    NARROW_SCROLL_OFFSET_PX, NARROW_VIEWPORT_WIDTH_PX,
};
use iced::widget::scrollable::RelativeOffset;

impl App {
    pub(super) fn handle_scrolled(
        &mut self,
        offset: RelativeOffset,
        viewport_width: f32,
        viewport_height: f32,
        content_width: f32,
        content_height: f32,
    ) {
        let finite_or_zero = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        self.viewport.last_scroll_offset = Self::sanitize_offset(offset);
        self.viewport.viewport_width = finite_or_zero(viewport_width);
        self.viewport.viewport_height = finite_or_zero(viewport_height);
        self.viewport.content_width = finite_or_zero(content_width);
        self.viewport.content_height = finite_or_zero(content_height);
    }

    /// Relative offset that puts the gallery section's top at the viewport
    /// top. Narrow viewports keep a fixed margin above the section so it is
    /// not tucked under the hero's collapsed chrome.
    pub(super) fn gallery_scroll_offset(&self) -> RelativeOffset {
        let width = self.viewport.effective_width();
        let raise_px = if width <= NARROW_VIEWPORT_WIDTH_PX {
            NARROW_SCROLL_OFFSET_PX
        } else {
            0.0
        };
        let target_top_px = (HERO_SECTION_HEIGHT_PX - raise_px).max(0.0);

        let content_height = if self.viewport.content_height > 0.0 {
            self.viewport.content_height
        } else {
            self.estimated_content_height_px()
        };
        let viewport_height = if self.viewport.viewport_height > 0.0 {
            self.viewport.viewport_height
        } else {
            self.viewport.window_height.max(1.0)
        };

        // `snap_to` expects offset over the scrollable range (content - viewport).
        let scrollable_px = (content_height - viewport_height).max(1.0);
        Self::sanitize_offset(RelativeOffset {
            x: 0.0,
            y: target_top_px / scrollable_px,
        })
    }

    pub(super) fn sanitize_offset(offset: RelativeOffset) -> RelativeOffset {
        let clamp = |v: f32| {
            if v.is_finite() {
                v.clamp(0.0, 1.0)
            } else {
                0.0
            }
        };
        RelativeOffset {
            x: clamp(offset.x),
            y: clamp(offset.y),
        }
    }

    /// Rough content height before the first scroll event reports real
    /// geometry: hero, visible card rows, controls.
    fn estimated_content_height_px(&self) -> f32 {
        let visible = self.gallery.visible_indices().len() as f32;
        let rows = (visible / 3.0).ceil().max(1.0);
        HERO_SECTION_HEIGHT_PX + rows * CARD_ROW_HEIGHT_PX + CONTROLS_ROW_HEIGHT_PX
    }
}
