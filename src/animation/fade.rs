use crate::foundation::core::TimeSpan;

/// Opacity of a scene element over its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum OpacityCurve {
    /// Fixed opacity for the whole span.
    Constant(f64),
    /// Linear ramps at the edges of the span.
    Fade {
        /// Plateau opacity between the ramps.
        base: f64,
        /// Ramp-up length in seconds from the span start (0 disables).
        fade_in: f64,
        /// Ramp-down length in seconds before the span end (0 disables).
        fade_out: f64,
    },
}

impl OpacityCurve {
    /// Fully opaque for the whole span.
    pub fn opaque() -> Self {
        Self::Constant(1.0)
    }

    /// Opacity at absolute time `t` for an element occupying `span`.
    ///
    /// Outside the span the value is 0. Ramps multiply, so a span shorter
    /// than `fade_in + fade_out` never exceeds either ramp.
    pub fn value_at(self, t: f64, span: TimeSpan) -> f64 {
        if !span.contains(t) {
            return 0.0;
        }
        match self {
            Self::Constant(v) => v.clamp(0.0, 1.0),
            Self::Fade {
                base,
                fade_in,
                fade_out,
            } => {
                let mut gain = base.clamp(0.0, 1.0);
                let rel = t - span.start;
                if fade_in > 0.0 {
                    gain *= (rel / fade_in).clamp(0.0, 1.0);
                }
                if fade_out > 0.0 {
                    let rem = (span.duration - rel).max(0.0);
                    gain *= (rem / fade_out).clamp(0.0, 1.0);
                }
                gain
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/fade.rs"]
mod tests;
