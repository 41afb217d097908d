use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    /// Map arrow keys to page navigation. Requests at the bounds are dropped
    /// here so no out-of-range warning is logged for plain key repeats.
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        if modifiers.command() || modifiers.alt() {
            return None;
        }

        match key.as_ref() {
            Key::Named(key::Named::ArrowLeft) if self.current_page() > 1 => {
                Some(Message::PreviousPage)
            }
            Key::Named(key::Named::ArrowRight) if self.current_page() < self.total_pages() => {
                Some(Message::NextPage)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::portfolio::{Portfolio, PortfolioHeader, PortfolioItem};
    use std::path::PathBuf;

    fn build_test_app(item_count: usize) -> App {
        let items = (0..item_count)
            .map(|i| PortfolioItem {
                title: format!("Project {i}"),
                description: String::new(),
                category: None,
                page: None,
                visible: false,
            })
            .collect();
        let portfolio = Portfolio {
            portfolio: PortfolioHeader::default(),
            items,
        };
        let (app, _task) = App::bootstrap(
            portfolio,
            AppConfig::default(),
            PathBuf::from("portfolio.toml"),
        );
        app
    }

    #[test]
    fn arrow_right_advances_until_last_page() {
        let mut app = build_test_app(13);
        assert!(matches!(
            app.shortcut_message_for_key(Key::Named(key::Named::ArrowRight), Modifiers::empty()),
            Some(Message::NextPage)
        ));

        app.show_page(3);
        assert!(
            app.shortcut_message_for_key(Key::Named(key::Named::ArrowRight), Modifiers::empty())
                .is_none()
        );
    }

    #[test]
    fn arrow_left_is_ignored_on_the_first_page() {
        let mut app = build_test_app(13);
        assert!(
            app.shortcut_message_for_key(Key::Named(key::Named::ArrowLeft), Modifiers::empty())
                .is_none()
        );

        app.show_page(2);
        assert!(matches!(
            app.shortcut_message_for_key(Key::Named(key::Named::ArrowLeft), Modifiers::empty()),
            Some(Message::PreviousPage)
        ));
    }

    #[test]
    fn modified_arrows_are_not_shortcuts() {
        let mut app = build_test_app(13);
        app.show_page(2);
        assert!(
            app.shortcut_message_for_key(Key::Named(key::Named::ArrowRight), Modifiers::ALT)
                .is_none()
        );
    }

    #[test]
    fn other_keys_do_not_navigate() {
        let app = build_test_app(13);
        assert!(
            app.shortcut_message_for_key(Key::Character("x".into()), Modifiers::empty())
                .is_none()
        );
    }
}
