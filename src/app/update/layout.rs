use super::super::state::{App, RESIZE_REFLOW_DEBOUNCE};
use std::time::Instant;
use tracing::debug;

impl App {
    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        if !width.is_finite() || !height.is_finite() {
            return;
        }
        self.viewport.window_width = width.max(1.0);
        self.viewport.window_height = height.max(1.0);
        // The last scroll report is stale now; follow the window until the
        // next report carries the real post-resize geometry.
        self.viewport.viewport_width = self.viewport.window_width;
        self.viewport.viewport_height = self.viewport.window_height;
        self.viewport.content_width = 0.0;
        self.viewport.content_height = 0.0;
        debug!(width, height, "Window resized; debouncing reflow");
        // Each resize restarts the trailing debounce.
        self.schedule_reflow(RESIZE_REFLOW_DEBOUNCE);
    }

    pub(super) fn handle_tick(&mut self, now: Instant) {
        let Some(deadline) = self.layout.pending_reflow_at else {
            return;
        };
        if now < deadline {
            return;
        }
        self.layout.pending_reflow_at = None;
        self.reflow_layout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::portfolio::{Portfolio, PortfolioHeader, PortfolioItem};
    use iced::widget::scrollable::RelativeOffset;
    use std::path::PathBuf;
    use std::time::Duration;

    fn build_test_app() -> App {
        let items = (0..8)
            .map(|i| PortfolioItem {
                title: format!("Project {i}"),
                description: format!("Description for project number {i}."),
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
    fn resize_rearms_the_pending_deadline() {
        let mut app = build_test_app();
        app.layout.pending_reflow_at = None;

        app.handle_window_resized(1280.0, 800.0);
        let first = app.layout.pending_reflow_at.expect("deadline armed");

        app.handle_window_resized(1300.0, 800.0);
        let second = app.layout.pending_reflow_at.expect("deadline rearmed");
        assert!(second >= first);
        assert_eq!(app.viewport.window_width, 1300.0);
    }

    #[test]
    fn non_finite_resize_is_ignored() {
        let mut app = build_test_app();
        app.layout.pending_reflow_at = None;

        app.handle_window_resized(f32::NAN, 800.0);
        assert!(app.layout.pending_reflow_at.is_none());
    }

    #[test]
    fn tick_before_the_deadline_leaves_it_armed() {
        let mut app = build_test_app();
        let deadline = Instant::now() + Duration::from_millis(250);
        app.layout.pending_reflow_at = Some(deadline);

        app.handle_tick(deadline - Duration::from_millis(100));
        assert_eq!(app.layout.pending_reflow_at, Some(deadline));
    }

    #[test]
    fn tick_past_the_deadline_fires_and_disarms() {
        let mut app = build_test_app();
        let deadline = Instant::now();
        app.layout.pending_reflow_at = Some(deadline);

        app.handle_tick(deadline + Duration::from_millis(1));
        assert!(app.layout.pending_reflow_at.is_none());
        let grid = app.layout.masonry.as_ref().expect("masonry enabled");
        let placed: usize = grid.columns().iter().map(Vec::len).sum();
        assert_eq!(placed, 6, "all visible cards placed by the reflow");
    }

    #[test]
    fn resize_reflow_follows_the_new_window_width() {
        let mut app = build_test_app();
        app.handle_scrolled(RelativeOffset::START, 1280.0, 720.0, 1280.0, 2400.0);

        app.handle_window_resized(500.0, 800.0);
        assert_eq!(app.viewport.effective_width(), 500.0);

        let deadline = app.layout.pending_reflow_at.expect("deadline armed");
        app.handle_tick(deadline + Duration::from_millis(1));

        let grid = app.layout.masonry.as_ref().expect("masonry enabled");
        assert_eq!(
            grid.columns().len(),
            1,
            "narrow window must repack into a single column"
        );
    }

    #[test]
    fn tick_without_a_deadline_is_a_no_op() {
        let mut app = build_test_app();
        app.layout.pending_reflow_at = None;
        app.handle_tick(Instant::now());
        assert!(app.layout.pending_reflow_at.is_none());
    }
}
