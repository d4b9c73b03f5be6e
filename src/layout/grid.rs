use crate::{
    composition::style::Theme,
    foundation::core::{Canvas, Rect},
};

/// Grid dimensions derived from an item count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridSpec {
    /// Number of columns.
    pub cols: u32,
    /// Number of rows.
    pub rows: u32,
}

impl GridSpec {
    /// Number of cells the grid can hold.
    pub fn capacity(self) -> u32 {
        self.cols * self.rows
    }
}

/// Pick grid dimensions for `n` items.
///
/// Small counts use a fixed table tuned for mobile-portrait aesthetics
/// (narrow stacks preferred over wide grids); larger counts fall back to a
/// near-square grid. The result always satisfies `cols * rows >= n`.
pub fn grid_dims(n: usize) -> GridSpec {
    let (cols, rows) = match n {
        0 => (0, 0),
        1 => (1, 1),
        2 => (1, 2),
        3 => (1, 3),
        4 => (2, 2),
        5..=6 => (2, 3),
        7..=9 => (3, 3),
        10..=12 => (3, 4),
        13..=16 => (4, 4),
        _ => {
            let cols = (n as f64).sqrt().ceil() as usize;
            (cols, n.div_ceil(cols))
        }
    };
    GridSpec {
        cols: cols as u32,
        rows: rows as u32,
    }
}

/// Resolved card geometry for one composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridLayout {
    /// Grid dimensions used.
    pub spec: GridSpec,
    /// One card rectangle per item, in row-major order.
    pub cells: Vec<Rect>,
    /// True when the minimum card size raised a dimension and the card block
    /// no longer fits the padded canvas. Overflow is accepted, not re-flowed,
    /// but callers get to see it.
    pub overflow: bool,
}

/// Compute card rectangles for `item_count` items on `canvas`.
///
/// Card size per axis is the padded, margined share of the canvas, floored to
/// integer pixels and raised to the theme's minimum card size. The whole
/// block is centered so leftover space splits evenly on both sides. Never
/// fails: zero items yield an empty cell list.
pub fn compute_grid(item_count: usize, canvas: Canvas, theme: &Theme) -> GridLayout {
    let spec = grid_dims(item_count);
    if item_count == 0 {
        return GridLayout {
            spec,
            cells: Vec::new(),
            overflow: false,
        };
    }

    let width = f64::from(canvas.width);
    let height = f64::from(canvas.height);
    let min_side = canvas.min_side();
    let padding = theme.base_padding(min_side);
    let margin = theme.card_margin(min_side);
    let cols = f64::from(spec.cols);
    let rows = f64::from(spec.rows);

    let avail_w = width - 2.0 * padding - (cols - 1.0) * margin;
    let avail_h = height - 2.0 * padding - (rows - 1.0) * margin;
    let mut card_w = (avail_w / cols).floor();
    let mut card_h = (avail_h / rows).floor();

    let min_card = (min_side * theme.min_card_ratio).floor();
    let overflow = card_w < min_card || card_h < min_card;
    card_w = card_w.max(min_card);
    card_h = card_h.max(min_card);
    if overflow {
        tracing::debug!(item_count, card_w, card_h, "minimum card size forced grid overflow");
    }

    let block_w = cols * card_w + (cols - 1.0) * margin;
    let block_h = rows * card_h + (rows - 1.0) * margin;
    let start_x = ((width - block_w) / 2.0).floor();
    let start_y = ((height - block_h) / 2.0).floor();

    let mut cells = Vec::with_capacity(item_count);
    for i in 0..item_count.min(spec.capacity() as usize) {
        let col = (i as u32 % spec.cols) as f64;
        let row = (i as u32 / spec.cols) as f64;
        let x = start_x + col * (card_w + margin);
        let y = start_y + row * (card_h + margin);
        cells.push(Rect::new(x, y, x + card_w, y + card_h));
    }

    GridLayout {
        spec,
        cells,
        overflow,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
