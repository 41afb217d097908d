use super::super::state::App;
use super::Effect;
use tracing::{info, warn};

impl App {
    pub(super) fn handle_page_selected(&mut self, page: u32, effects: &mut Vec<Effect>) {
        self.go_to_page(page, effects);
    }

    pub(super) fn handle_next_page(&mut self, effects: &mut Vec<Effect>) {
        if self.current_page() < self.total_pages() {
            self.go_to_page(self.current_page() + 1, effects);
        }
    }

    pub(super) fn handle_previous_page(&mut self, effects: &mut Vec<Effect>) {
        if self.current_page() > 1 {
            self.go_to_page(self.current_page() - 1, effects);
        }
    }

    pub(super) fn handle_explore_pressed(&mut self, effects: &mut Vec<Effect>) {
        info!("Explore control pressed; scrolling to gallery");
        effects.push(Effect::ScrollToGallery);
    }

    pub(super) fn handle_refresh_requested(&mut self, effects: &mut Vec<Effect>) {
        if self.refreshing {
            return;
        }
        self.refreshing = true;
        info!(path = %self.manifest_path.display(), "Re-scanning portfolio manifest");
        effects.push(Effect::LoadManifest(self.manifest_path.clone()));
    }

    pub(super) fn handle_portfolio_reloaded(
        &mut self,
        items: Vec<crate::portfolio::PortfolioItem>,
        error: Option<String>,
    ) {
        self.refreshing = false;
        if let Some(err) = error {
            warn!(path = %self.manifest_path.display(), "Manifest re-read failed: {err}");
            return;
        }
        self.initialize_gallery(items);
    }

    /// Navigate via a UI path (button or keyboard): change the page, then
    /// scroll the gallery into view. Out-of-range requests fall through to
    /// `show_page`'s guard and trigger no scroll.
    fn go_to_page(&mut self, page: u32, effects: &mut Vec<Effect>) {
        self.show_page(page);
        if self.current_page() == page {
            info!(page, "Navigated to page");
            effects.push(Effect::ScrollToGallery);
        }
    }
}
