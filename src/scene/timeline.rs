use crate::{
    foundation::core::{Canvas, Fps},
    scene::element::SceneElement,
};

/// Ordered sequence of scheduled scene elements plus the master duration.
///
/// Element order is the draw order: later entries paint over earlier ones.
/// The timeline is the sole visual output of a composition call and is
/// consumed by the external renderer, either eagerly or incrementally.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Frame rate metadata for the renderer.
    pub fps: Fps,
    /// Master duration in seconds.
    pub duration: f64,
    /// Elements in painter's order.
    pub elements: Vec<SceneElement>,
}

impl Timeline {
    /// Empty timeline of the given duration.
    pub fn new(canvas: Canvas, fps: Fps, duration: f64) -> Self {
        Self {
            canvas,
            fps,
            duration,
            elements: Vec::new(),
        }
    }

    /// Elements visible at time `t`, in draw order.
    pub fn elements_at(&self, t: f64) -> impl Iterator<Item = &SceneElement> {
        self.elements.iter().filter(move |e| e.span.contains(t))
    }
}
