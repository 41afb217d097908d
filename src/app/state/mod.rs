mod constants;
mod gallery;
mod layout;
mod viewport;

use crate::config::{AppConfig, ThemeMode};
use crate::masonry::{CardMeasure, MasonryGrid};
use crate::pagination::{self, ITEMS_PER_PAGE};
use crate::portfolio::{Portfolio, PortfolioHeader, PortfolioItem};
use iced::Task;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use gallery::GalleryState;
pub(in crate::app) use layout::LayoutState;
pub(in crate::app) use viewport::ViewportState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) header: PortfolioHeader,
    pub(super) gallery: GalleryState,
    pub(super) layout: LayoutState,
    pub(super) viewport: ViewportState,
    pub(super) config: AppConfig,
    pub(super) manifest_path: PathBuf,
    pub(super) refreshing: bool,
}

impl App {
    pub(super) fn bootstrap(
        portfolio: Portfolio,
        mut config: AppConfig,
        manifest_path: PathBuf,
    ) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let masonry = config.masonry.then(MasonryGrid::new);
        let mut app = App {
            header: portfolio.portfolio,
            gallery: GalleryState::inert(),
            layout: LayoutState::new(masonry),
            viewport: ViewportState::new(config.window_width, config.window_height),
            config,
            manifest_path,
            refreshing: false,
        };
        app.initialize_gallery(portfolio.items);
        info!(
            night_mode = matches!(app.config.theme, ThemeMode::Night),
            masonry = app.layout.masonry.is_some(),
            "Initialized app state"
        );
        (app, Task::none())
    }

    /// Collect a fresh item snapshot and recompute the pagination over it.
    ///
    /// An empty collection warns and leaves the previous state untouched: at
    /// first launch that keeps the gallery inert, on refresh it preserves
    /// whatever was on screen.
    pub(super) fn initialize_gallery(&mut self, items: Vec<PortfolioItem>) {
        if items.is_empty() {
            warn!("No portfolio items found");
            return;
        }

        let markers: Vec<Option<u32>> = items.iter().map(|item| item.page).collect();
        self.gallery.items = items;
        self.gallery.total_pages =
            pagination::total_pages(self.gallery.items.len(), ITEMS_PER_PAGE, &markers) as u32;
        self.gallery.mode = pagination::detect_mode(&markers);
        self.gallery.current_page = 1;
        self.show_page(1);
        info!(
            items = self.gallery.items.len(),
            total_pages = self.gallery.total_pages,
            mode = ?self.gallery.mode,
            "Pagination initialized"
        );
    }

    /// Switch to the given one-based page.
    ///
    /// An out-of-range request warns and changes nothing; the prior visible
    /// set is preserved rather than clamped.
    pub(crate) fn show_page(&mut self, page: u32) {
        if page == 0 || page > self.gallery.total_pages {
            warn!(
                page,
                total_pages = self.gallery.total_pages,
                "Invalid page number"
            );
            return;
        }

        self.gallery.current_page = page;
        let mode = self.gallery.mode;
        let mut visible = 0usize;
        for (index, item) in self.gallery.items.iter_mut().enumerate() {
            item.visible =
                pagination::item_visible_on_page(mode, index, item.page, ITEMS_PER_PAGE, page);
            visible += usize::from(item.visible);
        }
        debug!(page, visible, "Applied page visibility");
        self.schedule_reflow(REFLOW_AFTER_VISIBILITY_DELAY);
    }

    pub(crate) fn current_page(&self) -> u32 {
        self.gallery.current_page
    }

    pub(crate) fn total_pages(&self) -> u32 {
        self.gallery.total_pages
    }

    /// Arm (or re-arm) the reflow deadline. Overwriting a pending deadline is
    /// the cancel-and-restart of the trailing debounce.
    pub(super) fn schedule_reflow(&mut self, delay: Duration) {
        self.layout.pending_reflow_at = Some(Instant::now() + delay);
    }

    /// Re-measure the visible cards. Skipped without error when masonry is
    /// disabled.
    pub(super) fn reflow_layout(&mut self) {
        let width = self.viewport.effective_width();
        let cards: Vec<CardMeasure> = self
            .gallery
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.visible)
            .map(|(index, item)| CardMeasure {
                index,
                text_len: item.title.len() + item.description.len(),
            })
            .collect();

        match &mut self.layout.masonry {
            Some(grid) => {
                grid.reflow(&cards, width);
                debug!(cards = cards.len(), width, "Masonry layout reflowed");
            }
            None => debug!("Masonry disabled; skipping reflow"),
        }
    }

    /// Masonry columns ready to render: the grid exists and covers every
    /// currently visible card. Between a visibility change and its delayed
    /// reflow the assignments lag the new page, and the view falls back to
    /// the uniform grid so the fresh cards show immediately.
    pub(super) fn masonry_lanes(&self) -> Option<&MasonryGrid> {
        let grid = self.layout.masonry.as_ref()?;
        let visible = self.gallery.visible_indices();
        let covered = !visible.is_empty() && visible.iter().all(|&index| grid.has_card(index));
        covered.then_some(grid)
    }
}

fn clamp_config(config: &mut AppConfig) {
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    config.window_pos_x = config.window_pos_x.filter(|v| v.is_finite());
    config.window_pos_y = config.window_pos_y.filter(|v| v.is_finite());
}
