use crate::foundation::core::Rgba8;

/// Visual theme and pacing constants for a composition.
///
/// Everything the layout engine and scheduler would otherwise hard-code lives
/// here with documented defaults, so the same core serves different visual
/// treatments. All ratios are relative to the canvas's shorter side.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    /// Full-canvas background color.
    #[serde(default = "default_background")]
    pub background: Rgba8,
    /// Card fill color.
    #[serde(default = "default_card")]
    pub card: Rgba8,
    /// Card drop-shadow color.
    #[serde(default = "default_shadow")]
    pub shadow: Rgba8,
    /// Shadow offset from its card in pixels, applied on both axes.
    #[serde(default = "default_shadow_offset")]
    pub shadow_offset: f64,
    /// Shadow opacity.
    #[serde(default = "default_shadow_opacity")]
    pub shadow_opacity: f64,
    /// Fill color for placeholder rectangles of unavailable images.
    #[serde(default = "default_placeholder")]
    pub placeholder: Rgba8,
    /// Outer padding ratio between canvas edge and the card block.
    #[serde(default = "default_base_padding_ratio")]
    pub base_padding_ratio: f64,
    /// Margin ratio between adjacent cards.
    #[serde(default = "default_card_margin_ratio")]
    pub card_margin_ratio: f64,
    /// Minimum card size ratio; smaller computed cards are raised to this
    /// even when the grid then overflows the canvas.
    #[serde(default = "default_min_card_ratio")]
    pub min_card_ratio: f64,
    /// Fraction of canvas height occupied by the hero card.
    #[serde(default = "default_hero_height_ratio")]
    pub hero_height_ratio: f64,
    /// Inner padding ratio between a card edge and its image, relative to the
    /// card's shorter side.
    #[serde(default = "default_image_inset_ratio")]
    pub image_inset_ratio: f64,
    /// Fixed inner padding in labeled cards, in pixels.
    #[serde(default = "default_label_inset")]
    pub label_inset: f64,
    /// Height of the label strip below a labeled image, in pixels.
    #[serde(default = "default_label_height")]
    pub label_height: f64,
    /// Gap between image area and label strip, in pixels.
    #[serde(default = "default_label_gap")]
    pub label_gap: f64,
    /// Label text color.
    #[serde(default = "default_label_color")]
    pub label_color: Rgba8,
    /// Upper bound on label font size in pixels; the effective size is
    /// `min(card_width / 8, this)`.
    #[serde(default = "default_label_max_size")]
    pub label_max_size: f64,
    /// Fixed intro card duration in seconds.
    #[serde(default = "default_intro_duration")]
    pub intro_duration: f64,
    /// Fixed outro card duration in seconds.
    #[serde(default = "default_outro_duration")]
    pub outro_duration: f64,
    /// Cursor press animation length in seconds.
    #[serde(default = "default_press_duration")]
    pub press_duration: f64,
    /// Fraction of cursor scale lost at full press depth.
    #[serde(default = "default_press_depth")]
    pub press_depth: f64,
    /// Cursor marker radius in pixels.
    #[serde(default = "default_cursor_radius")]
    pub cursor_radius: f64,
    /// Cursor marker color.
    #[serde(default = "default_cursor_color")]
    pub cursor_color: Rgba8,
    /// Glow ring radius as a multiple of the marker radius.
    #[serde(default = "default_cursor_glow_ratio")]
    pub cursor_glow_ratio: f64,
    /// Default linear gain applied to background music (about -20 dB).
    #[serde(default = "default_music_gain")]
    pub music_gain: f64,
    /// Linear gain applied to click sounds; boosted because the source clips
    /// are short and quiet.
    #[serde(default = "default_click_gain")]
    pub click_gain: f64,
}

fn default_background() -> Rgba8 {
    Rgba8::opaque(248, 226, 226)
}

fn default_card() -> Rgba8 {
    Rgba8::opaque(255, 255, 255)
}

fn default_shadow() -> Rgba8 {
    Rgba8::opaque(200, 200, 200)
}

fn default_shadow_offset() -> f64 {
    4.0
}

fn default_shadow_opacity() -> f64 {
    0.3
}

fn default_placeholder() -> Rgba8 {
    Rgba8::opaque(240, 240, 240)
}

fn default_base_padding_ratio() -> f64 {
    0.05
}

fn default_card_margin_ratio() -> f64 {
    0.02
}

fn default_min_card_ratio() -> f64 {
    0.15
}

fn default_hero_height_ratio() -> f64 {
    0.45
}

fn default_image_inset_ratio() -> f64 {
    0.08
}

fn default_label_inset() -> f64 {
    10.0
}

fn default_label_height() -> f64 {
    30.0
}

fn default_label_gap() -> f64 {
    10.0
}

fn default_label_color() -> Rgba8 {
    Rgba8::opaque(0, 0, 0)
}

fn default_label_max_size() -> f64 {
    20.0
}

fn default_intro_duration() -> f64 {
    2.0
}

fn default_outro_duration() -> f64 {
    2.0
}

fn default_press_duration() -> f64 {
    0.2
}

fn default_press_depth() -> f64 {
    0.1
}

fn default_cursor_radius() -> f64 {
    18.0
}

fn default_cursor_color() -> Rgba8 {
    Rgba8::opaque(255, 255, 255)
}

fn default_cursor_glow_ratio() -> f64 {
    1.6
}

fn default_music_gain() -> f64 {
    0.10
}

fn default_click_gain() -> f64 {
    2.0
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: default_background(),
            card: default_card(),
            shadow: default_shadow(),
            shadow_offset: default_shadow_offset(),
            shadow_opacity: default_shadow_opacity(),
            placeholder: default_placeholder(),
            base_padding_ratio: default_base_padding_ratio(),
            card_margin_ratio: default_card_margin_ratio(),
            min_card_ratio: default_min_card_ratio(),
            hero_height_ratio: default_hero_height_ratio(),
            image_inset_ratio: default_image_inset_ratio(),
            label_inset: default_label_inset(),
            label_height: default_label_height(),
            label_gap: default_label_gap(),
            label_color: default_label_color(),
            label_max_size: default_label_max_size(),
            intro_duration: default_intro_duration(),
            outro_duration: default_outro_duration(),
            press_duration: default_press_duration(),
            press_depth: default_press_depth(),
            cursor_radius: default_cursor_radius(),
            cursor_color: default_cursor_color(),
            cursor_glow_ratio: default_cursor_glow_ratio(),
            music_gain: default_music_gain(),
            click_gain: default_click_gain(),
        }
    }
}

impl Theme {
    /// Outer padding in pixels for a given canvas.
    pub fn base_padding(&self, min_side: f64) -> f64 {
        min_side * self.base_padding_ratio
    }

    /// Inter-card margin in pixels for a given canvas.
    pub fn card_margin(&self, min_side: f64) -> f64 {
        min_side * self.card_margin_ratio
    }
}
