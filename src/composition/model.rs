use crate::{
    composition::style::Theme,
    foundation::core::{Canvas, Fps},
    foundation::error::{GridreelError, GridreelResult},
    layout::hero::HERO_ITEM_COUNT,
};

/// A reference to a still-image asset.
///
/// The core performs no I/O: `dims` is the intrinsic size probed by the
/// caller. `None` (or a zero area) marks the asset unavailable, which
/// degrades its element to a placeholder instead of failing composition.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageAsset {
    /// Source reference resolved by the external renderer.
    pub source: String,
    /// Probed intrinsic size in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dims: Option<(u32, u32)>,
}

impl ImageAsset {
    /// Asset with a known intrinsic size.
    pub fn new(source: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            source: source.into(),
            dims: Some((width, height)),
        }
    }

    /// Asset whose size could not be probed; renders as a placeholder.
    pub fn unavailable(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dims: None,
        }
    }
}

/// A reference to an audio asset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioSource {
    /// Source reference resolved by the external renderer.
    pub source: String,
    /// Probed duration in seconds, required only when the cadence is driven
    /// by the voice-over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// Background music layer with an optional gain override.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MusicTrack {
    /// Source reference.
    pub source: String,
    /// Linear gain; the theme's music gain applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain: Option<f64>,
}

/// Optional audio layers of a composition.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioLayers {
    /// Voice-over, played at unit gain from 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_over: Option<AudioSource>,
    /// Background music, attenuated under the voice-over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<MusicTrack>,
    /// Click sound for cursor presses. When absent, the cursor still moves
    /// and presses visually; only the audio events are omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click: Option<AudioSource>,
}

/// Which scene recipe the scheduler builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SceneLayout {
    /// Responsive card grid; cards persist for the whole duration.
    Grid,
    /// Fixed hero + 2x2 grid; requires exactly five images.
    Hero,
    /// Full-frame sequential slideshow with optional intro/outro cards.
    Slideshow,
}

/// Slideshow pacing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Cadence {
    /// Explicit master duration divided equally among the main images, with
    /// hard cuts.
    Uniform {
        /// Master duration in seconds.
        total: f64,
    },
    /// Fixed per-image duration; images repeat cyclically with crossfades
    /// until the master duration is exhausted.
    Cyclic {
        /// Master duration in seconds.
        total: f64,
        /// Time each image holds the frame, in seconds.
        slide: f64,
        /// Overlap between consecutive images, in seconds.
        crossfade: f64,
    },
    /// Master duration equals the voice-over duration; main images divide
    /// what remains after the fixed intro/outro cards.
    VoiceOverDriven,
}

/// Cursor tour configuration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CursorSpec {
    /// Duration of each move between card centers, in seconds.
    pub move_duration: f64,
}

/// A complete, validated composition request.
///
/// This is a pure data model: building it does nothing; [`crate::compose`]
/// turns it into a [`crate::Timeline`] and [`crate::AudioTimeline`]. All
/// entities are immutable once composition starts.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Composition {
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Frame rate metadata passed through to the renderer.
    pub fps: Fps,
    /// Scene recipe.
    pub layout: SceneLayout,
    /// Slideshow pacing.
    pub cadence: Cadence,
    /// Main images in display order.
    pub images: Vec<ImageAsset>,
    /// Text labels, one per card. In grid scenes a short or empty list skips
    /// labels per card; the hero scene requires an exact match when set.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Animated cursor tour over the card centers (grid and hero scenes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<CursorSpec>,
    /// Audio layers.
    #[serde(default)]
    pub audio: AudioLayers,
    /// Intro card shown for the theme's fixed intro duration (slideshow
    /// scenes only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<ImageAsset>,
    /// Outro card shown for the theme's fixed outro duration (slideshow
    /// scenes only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outro: Option<ImageAsset>,
    /// Visual theme and pacing constants.
    #[serde(default)]
    pub theme: Theme,
}

impl Composition {
    /// Validate composition invariants.
    ///
    /// Structural problems (bad counts, bad durations) fail here, before any
    /// element is built; per-asset problems never do.
    pub fn validate(&self) -> GridreelResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(GridreelError::validation("canvas width/height must be > 0"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(GridreelError::validation("fps must have num > 0 and den > 0"));
        }

        match self.cadence {
            Cadence::Uniform { total } => {
                validate_duration(total, "cadence total")?;
            }
            Cadence::Cyclic {
                total,
                slide,
                crossfade,
            } => {
                validate_duration(total, "cadence total")?;
                validate_duration(slide, "cadence slide")?;
                if !crossfade.is_finite() || crossfade < 0.0 {
                    return Err(GridreelError::validation(
                        "cadence crossfade must be finite and >= 0",
                    ));
                }
                if crossfade > slide {
                    return Err(GridreelError::validation(
                        "cadence crossfade must not exceed slide duration",
                    ));
                }
            }
            Cadence::VoiceOverDriven => {
                let Some(vo) = &self.audio.voice_over else {
                    return Err(GridreelError::validation(
                        "voice-over-driven cadence requires a voice-over source",
                    ));
                };
                match vo.duration {
                    Some(d) if d.is_finite() && d > 0.0 => {}
                    _ => {
                        return Err(GridreelError::validation(
                            "voice-over-driven cadence requires a known voice-over duration",
                        ));
                    }
                }
            }
        }

        if self.layout == SceneLayout::Hero {
            if self.images.len() != HERO_ITEM_COUNT {
                return Err(GridreelError::layout(format!(
                    "hero layout requires exactly {HERO_ITEM_COUNT} images, got {}",
                    self.images.len()
                )));
            }
            if !self.labels.is_empty() && self.labels.len() != HERO_ITEM_COUNT {
                return Err(GridreelError::layout(format!(
                    "hero layout requires exactly {HERO_ITEM_COUNT} labels when labels are given, got {}",
                    self.labels.len()
                )));
            }
        }

        if self.layout != SceneLayout::Slideshow && (self.intro.is_some() || self.outro.is_some())
        {
            return Err(GridreelError::validation(
                "intro/outro cards are only supported in slideshow layout",
            ));
        }

        if let Some(cursor) = &self.cursor {
            if self.layout == SceneLayout::Slideshow {
                return Err(GridreelError::validation(
                    "cursor tours require a card scene (grid or hero layout)",
                ));
            }
            validate_duration(cursor.move_duration, "cursor move_duration")?;
        }

        for (idx, image) in self.images.iter().enumerate() {
            if image.source.trim().is_empty() {
                return Err(GridreelError::validation(format!(
                    "image {idx} source must be non-empty"
                )));
            }
        }
        for (source, field) in [
            (self.audio.voice_over.as_ref().map(|a| &a.source), "voice-over"),
            (self.audio.music.as_ref().map(|m| &m.source), "music"),
            (self.audio.click.as_ref().map(|a| &a.source), "click"),
            (self.intro.as_ref().map(|a| &a.source), "intro"),
            (self.outro.as_ref().map(|a| &a.source), "outro"),
        ] {
            if let Some(source) = source
                && source.trim().is_empty()
            {
                return Err(GridreelError::validation(format!(
                    "{field} source must be non-empty"
                )));
            }
        }

        if let Some(music) = &self.audio.music
            && let Some(gain) = music.gain
            && (!gain.is_finite() || gain < 0.0)
        {
            return Err(GridreelError::validation(
                "music gain must be finite and >= 0",
            ));
        }

        for (name, ratio) in [
            ("base_padding_ratio", self.theme.base_padding_ratio),
            ("card_margin_ratio", self.theme.card_margin_ratio),
            ("min_card_ratio", self.theme.min_card_ratio),
            ("hero_height_ratio", self.theme.hero_height_ratio),
            ("image_inset_ratio", self.theme.image_inset_ratio),
        ] {
            if !ratio.is_finite() || ratio < 0.0 || ratio >= 1.0 {
                return Err(GridreelError::validation(format!(
                    "theme {name} must be finite and in [0, 1)"
                )));
            }
        }

        Ok(())
    }

    /// Resolve the master timeline duration in seconds.
    pub fn master_duration(&self) -> GridreelResult<f64> {
        match self.cadence {
            Cadence::Uniform { total } | Cadence::Cyclic { total, .. } => Ok(total),
            Cadence::VoiceOverDriven => self
                .audio
                .voice_over
                .as_ref()
                .and_then(|vo| vo.duration)
                .ok_or_else(|| {
                    GridreelError::validation(
                        "voice-over-driven cadence requires a known voice-over duration",
                    )
                }),
        }
    }
}

fn validate_duration(value: f64, field: &str) -> GridreelResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GridreelError::validation(format!(
            "{field} must be finite and > 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
