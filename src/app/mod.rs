mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::portfolio::Portfolio;
use iced::{Point, Size, Theme, window};
use std::path::PathBuf;

/// Helper to launch the app with the loaded manifest.
pub fn run_app(
    portfolio: Portfolio,
    config: AppConfig,
    manifest_path: PathBuf,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        position: match (config.window_pos_x, config.window_pos_y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                window::Position::Specific(Point::new(x, y))
            }
            _ => window::Position::Default,
        },
        ..window::Settings::default()
    };

    iced::application("Portfolio Gallery", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| Theme::from(crate::theme::Theme::from(app.config.theme)))
        .run_with(move || App::bootstrap(portfolio, config, manifest_path))
}
