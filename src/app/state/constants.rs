use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

/// Viewport width at or below which the gallery scroll target is raised.
pub(crate) const NARROW_VIEWPORT_WIDTH_PX: f32 = 920.0;
/// Scroll offset applied above the gallery on narrow viewports.
pub(crate) const NARROW_SCROLL_OFFSET_PX: f32 = 70.0;
/// Delay between a visibility change and the layout reflow.
pub(crate) const REFLOW_AFTER_VISIBILITY_DELAY: Duration = Duration::from_millis(100);
/// Trailing debounce for resize-triggered reflows.
pub(crate) const RESIZE_REFLOW_DEBOUNCE: Duration = Duration::from_millis(250);
/// Poll cadence of the tick subscription while a reflow is pending.
pub(crate) const REFLOW_TICK_INTERVAL: Duration = Duration::from_millis(50);

// Keep these values in sync with `view.rs` section layout.
pub(crate) const HERO_SECTION_HEIGHT_PX: f32 = 320.0;
pub(crate) const CARD_ROW_HEIGHT_PX: f32 = 180.0;
pub(crate) const CONTROLS_ROW_HEIGHT_PX: f32 = 64.0;

pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));
