use crate::{
    composition::model::AudioLayers,
    composition::style::Theme,
};

/// One audio source placed on the master audio timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioEvent {
    /// Source reference, decoded and resampled by the external renderer.
    pub source: String,
    /// Start offset on the master timeline in seconds.
    pub start: f64,
    /// Linear gain multiplier.
    pub gain: f64,
    /// Optional `[in_start, in_end)` trim of the source in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip: Option<(f64, f64)>,
}

/// All audio layers merged onto one timeline of exactly the master duration.
///
/// Events sum additively in the renderer; no compression or normalization is
/// applied there on this crate's behalf.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioTimeline {
    /// Master duration in seconds; no event extends past it.
    pub duration: f64,
    /// Events in placement order: voice-over, music, then clicks.
    pub events: Vec<AudioEvent>,
}

/// Merge the voice-over, background-music and click layers onto one timeline
/// truncated to `master_duration`.
///
/// Voice-over plays at unit gain from 0. Music is attenuated by its
/// configured gain (the theme default is roughly -20 dB). Click events keep
/// the start/gain/clip the scheduler gave them; any starting at or past the
/// master duration are dropped, and trims are shortened so nothing spills
/// over the end.
pub fn mix(
    master_duration: f64,
    layers: &AudioLayers,
    clicks: &[AudioEvent],
    theme: &Theme,
) -> AudioTimeline {
    let mut events = Vec::new();

    if let Some(vo) = &layers.voice_over {
        events.push(AudioEvent {
            source: vo.source.clone(),
            start: 0.0,
            gain: 1.0,
            clip: Some((0.0, master_duration)),
        });
    }

    if let Some(music) = &layers.music {
        events.push(AudioEvent {
            source: music.source.clone(),
            start: 0.0,
            gain: music.gain.unwrap_or(theme.music_gain),
            clip: Some((0.0, master_duration)),
        });
    }

    for click in clicks {
        if click.start >= master_duration {
            continue;
        }
        let remaining = master_duration - click.start;
        let clip = click.clip.map(|(cs, ce)| (cs, ce.min(cs + remaining)));
        events.push(AudioEvent {
            clip,
            ..click.clone()
        });
    }

    AudioTimeline {
        duration: master_duration,
        events,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/mix.rs"]
mod tests;
