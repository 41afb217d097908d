use super::super::super::messages::Message;
use super::super::super::state::{App, PAGE_SCROLL_ID};
use super::super::Effect;
use crate::portfolio::load_portfolio;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::window;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollToGallery => {
                let offset = self.gallery_scroll_offset();
                if offset == self.viewport.last_scroll_offset {
                    // Already aligned; snapping again would be a visual no-op.
                    return Task::none();
                }
                self.viewport.last_scroll_offset = offset;
                iced::widget::scrollable::snap_to(PAGE_SCROLL_ID.clone(), offset)
            }
            Effect::LoadManifest(path) => Task::perform(
                async move {
                    match load_portfolio(&path) {
                        Ok(portfolio) => Message::PortfolioReloaded {
                            items: portfolio.items,
                            error: None,
                        },
                        Err(err) => Message::PortfolioReloaded {
                            items: Vec::new(),
                            error: Some(err.to_string()),
                        },
                    }
                },
                |message| message,
            ),
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    // Events captured by a focused widget (e.g. a text input) never reach
    // the pagination shortcuts.
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(iced::window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
