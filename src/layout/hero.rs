use crate::{
    composition::style::Theme,
    foundation::core::{Canvas, Rect},
    foundation::error::{GridreelError, GridreelResult},
};

/// Number of items the hero layout holds: one hero plus a 2x2 grid.
pub const HERO_ITEM_COUNT: usize = 5;

/// Resolved geometry of the fixed "hero + 2x2" layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeroLayout {
    /// The large top card.
    pub hero: Rect,
    /// The four equal grid cells below, in row-major order.
    pub cells: Vec<Rect>,
}

/// Compute the hero layout: a large card over the top of the canvas and a
/// 2x2 grid of equal cells filling the rest of the padded area.
///
/// This mode is selected by caller intent, not by item count, so a count
/// other than [`HERO_ITEM_COUNT`] is a configuration error.
pub fn compute_hero(item_count: usize, canvas: Canvas, theme: &Theme) -> GridreelResult<HeroLayout> {
    if item_count != HERO_ITEM_COUNT {
        return Err(GridreelError::layout(format!(
            "hero layout requires exactly {HERO_ITEM_COUNT} images, got {item_count}"
        )));
    }

    let width = f64::from(canvas.width);
    let height = f64::from(canvas.height);
    let min_side = canvas.min_side();
    let padding = theme.base_padding(min_side);
    let margin = theme.card_margin(min_side);

    let hero_h = (height * theme.hero_height_ratio).floor();
    let hero = Rect::new(padding, padding, width - padding, padding + hero_h);

    let grid_top = padding + hero_h + margin;
    let cell_w = ((width - 2.0 * padding - margin) / 2.0).floor();
    let cell_h = ((height - padding - grid_top - margin) / 2.0).floor();

    let mut cells = Vec::with_capacity(4);
    for i in 0..4 {
        let col = (i % 2) as f64;
        let row = (i / 2) as f64;
        let x = padding + col * (cell_w + margin);
        let y = grid_top + row * (cell_h + margin);
        cells.push(Rect::new(x, y, x + cell_w, y + cell_h));
    }

    Ok(HeroLayout { hero, cells })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/hero.rs"]
mod tests;
