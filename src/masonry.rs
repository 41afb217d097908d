//! Masonry-style grid layout for the gallery cards.
//!
//! The grid assigns each visible card to the currently shortest column so
//! uneven card heights pack without large gaps. Heights are estimated from
//! text length the same way the scroll code estimates line counts; the view
//! only needs stable column assignments, not pixel-perfect measurement.

/// Width breakpoints for the column count.
const SINGLE_COLUMN_MAX_WIDTH_PX: f32 = 600.0;
const DOUBLE_COLUMN_MAX_WIDTH_PX: f32 = 920.0;

/// Estimated card geometry used when packing columns.
const CARD_BASE_HEIGHT_PX: f32 = 96.0;
const CARD_LINE_HEIGHT_PX: f32 = 22.0;
const CARD_CHARS_PER_LINE: f32 = 38.0;

/// A card to be placed, identified by its index in the item snapshot.
#[derive(Debug, Clone, Copy)]
pub struct CardMeasure {
    pub index: usize,
    pub text_len: usize,
}

/// Shortest-column packer for the visible cards.
#[derive(Debug, Clone, Default)]
pub struct MasonryGrid {
    columns: Vec<Vec<usize>>,
    column_heights: Vec<f32>,
}

impl MasonryGrid {
    pub fn new() -> Self {
        MasonryGrid::default()
    }

    /// Recompute column assignments for the given cards and available width.
    pub fn reflow(&mut self, cards: &[CardMeasure], available_width: f32) {
        let column_count = Self::column_count_for_width(available_width);
        self.columns = vec![Vec::new(); column_count];
        self.column_heights = vec![0.0; column_count];

        for card in cards {
            let target = self.shortest_column();
            self.columns[target].push(card.index);
            self.column_heights[target] += Self::estimate_card_height(card.text_len);
        }
    }

    /// Item indices per column, in placement order.
    pub fn columns(&self) -> &[Vec<usize>] {
        &self.columns
    }

    /// Whether the item at `index` has a column assignment.
    pub fn has_card(&self, index: usize) -> bool {
        self.columns.iter().any(|column| column.contains(&index))
    }

    fn shortest_column(&self) -> usize {
        let mut best = 0usize;
        for (idx, height) in self.column_heights.iter().enumerate() {
            if *height < self.column_heights[best] {
                best = idx;
            }
        }
        best
    }

    fn column_count_for_width(width: f32) -> usize {
        if !width.is_finite() || width <= SINGLE_COLUMN_MAX_WIDTH_PX {
            1
        } else if width <= DOUBLE_COLUMN_MAX_WIDTH_PX {
            2
        } else {
            3
        }
    }

    fn estimate_card_height(text_len: usize) -> f32 {
        let lines = (text_len as f32 / CARD_CHARS_PER_LINE).ceil().max(1.0);
        CARD_BASE_HEIGHT_PX + lines * CARD_LINE_HEIGHT_PX
    }
}
