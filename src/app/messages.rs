use crate::portfolio::PortfolioItem;
use iced::keyboard::{Key, Modifiers};
use iced::widget::scrollable::RelativeOffset;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    PageSelected(u32),
    NextPage,
    PreviousPage,
    ExplorePressed,
    RefreshRequested,
    PortfolioReloaded {
        items: Vec<PortfolioItem>,
        error: Option<String>,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    Scrolled {
        offset: RelativeOffset,
        viewport_width: f32,
        viewport_height: f32,
        content_width: f32,
        content_height: f32,
    },
    Tick(Instant),
}
