use crate::{
    animation::cursor::CursorTrack,
    animation::fade::OpacityCurve,
    foundation::core::{Rect, Rgba8, TimeSpan},
};

/// Whether an image element resolved against a real source or degraded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ContentState {
    /// The source is available; the renderer rasterizes it into the rect.
    Resolved,
    /// The source was unavailable or had zero-area bounds; the renderer
    /// draws a flat placeholder rectangle instead.
    Placeholder,
}

/// An image placed on the timeline, resolved once at composition time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageContent {
    /// Source reference, resolved by the external renderer.
    pub source: String,
    /// Placement rectangle in canvas pixel space.
    pub rect: Rect,
    /// Resolved-versus-placeholder decision.
    pub state: ContentState,
}

impl ImageContent {
    /// Place `source` inside `bounds`, scaling to fit and centering.
    ///
    /// `dims` is the probed intrinsic size; `None` or a zero area degrades
    /// the element to a placeholder covering `bounds` instead of failing the
    /// composition.
    pub fn resolve(source: &str, dims: Option<(u32, u32)>, bounds: Rect) -> Self {
        match dims {
            Some((w, h)) if w > 0 && h > 0 => Self {
                source: source.to_string(),
                rect: fit_rect(w, h, bounds),
                state: ContentState::Resolved,
            },
            _ => {
                tracing::warn!(source, "image unavailable or zero-area, degrading to placeholder");
                Self {
                    source: source.to_string(),
                    rect: bounds,
                    state: ContentState::Placeholder,
                }
            }
        }
    }
}

/// Scale a `src_w` x `src_h` source to fit `bounds` and center it there.
///
/// The scale preserves the source aspect ratio and never exceeds 1.0, so
/// small sources sit centered at their intrinsic size.
pub fn fit_rect(src_w: u32, src_h: u32, bounds: Rect) -> Rect {
    let sw = f64::from(src_w);
    let sh = f64::from(src_h);
    let scale = (bounds.width() / sw).min(bounds.height() / sh).min(1.0);
    let w = (sw * scale).floor();
    let h = (sh * scale).floor();
    let x = bounds.x0 + ((bounds.width() - w) / 2.0).floor();
    let y = bounds.y0 + ((bounds.height() - h) / 2.0).floor();
    Rect::new(x, y, x + w, y + h)
}

/// Tagged visual primitive variants.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ElementKind {
    /// Full-canvas flat fill.
    Background {
        /// Covered area (the whole canvas).
        rect: Rect,
        /// Fill color.
        color: Rgba8,
    },
    /// Drop shadow behind a card, offset by the theme's fixed delta.
    Shadow {
        /// Shadow rectangle.
        rect: Rect,
        /// Shadow color.
        color: Rgba8,
    },
    /// Flat card rectangle.
    Card {
        /// Card rectangle.
        rect: Rect,
        /// Fill color.
        color: Rgba8,
    },
    /// Raster image (or its placeholder) inside a card or the full canvas.
    Image {
        /// Resolved placement.
        content: ImageContent,
    },
    /// Text label; shaping and rasterization belong to the renderer.
    Label {
        /// Strip the renderer centers the text in.
        rect: Rect,
        /// UTF-8 text content.
        text: String,
        /// Font size in pixels.
        size_px: f64,
        /// Text color.
        color: Rgba8,
    },
    /// Animated cursor marker; position comes from sampling the track rather
    /// than a fixed rectangle.
    Cursor {
        /// Motion track sampled with times relative to the element span.
        track: CursorTrack,
        /// Marker radius in pixels.
        radius: f64,
        /// Marker color.
        color: Rgba8,
        /// Optional glow ring radius in pixels.
        glow_radius: Option<f64>,
    },
}

/// One scheduled visual primitive.
///
/// Elements are immutable after creation; a timeline is an append-only list
/// drawn in painter's order (later elements over earlier ones).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneElement {
    /// Stable identifier for debugging and tests.
    pub id: String,
    /// Lifetime on the master timeline.
    pub span: TimeSpan,
    /// Opacity over the lifetime.
    pub opacity: OpacityCurve,
    /// Visual payload.
    pub kind: ElementKind,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/element.rs"]
mod tests;
