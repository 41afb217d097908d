use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::PageSelected(page) => self.handle_page_selected(page, &mut effects),
            Message::NextPage => self.handle_next_page(&mut effects),
            Message::PreviousPage => self.handle_previous_page(&mut effects),
            Message::ExplorePressed => self.handle_explore_pressed(&mut effects),
            Message::RefreshRequested => self.handle_refresh_requested(&mut effects),
            Message::PortfolioReloaded { items, error } => {
                self.handle_portfolio_reloaded(items, error)
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height);
            }
            Message::Scrolled {
                offset,
                viewport_width,
                viewport_height,
                content_width,
                content_height,
            } => self.handle_scrolled(
                offset,
                viewport_width,
                viewport_height,
                content_width,
                content_height,
            ),
            Message::Tick(now) => self.handle_tick(now),
        }

        effects
    }
}
