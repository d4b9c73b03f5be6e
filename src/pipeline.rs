use crate::{
    audio::mix::{AudioTimeline, mix},
    composition::model::Composition,
    foundation::error::GridreelResult,
    scene::timeline::Timeline,
    schedule::scheduler::schedule,
};

/// The complete output of one composition call, consumed exactly once by the
/// external renderer/encoder.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderJob {
    /// Scene elements in painter's order.
    pub timeline: Timeline,
    /// Audio events aligned to the timeline duration.
    pub audio: AudioTimeline,
}

/// Handoff seam to the external renderer/encoder collaborator.
///
/// Rasterizing content references, shaping text, decoding and summing audio,
/// and encoding the final file all live behind this trait; the core only
/// produces the job.
pub trait RenderSink {
    /// Consume one composed job.
    fn submit(&mut self, job: &RenderJob) -> GridreelResult<()>;
}

/// Compose `comp` into a render job: validate, schedule the visual timeline,
/// then align the audio layers to it.
///
/// Pure and synchronous: no I/O, no shared state, so independent calls can
/// safely run in parallel.
#[tracing::instrument(skip(comp))]
pub fn compose(comp: &Composition) -> GridreelResult<RenderJob> {
    let scheduled = schedule(comp)?;
    let audio = mix(
        scheduled.timeline.duration,
        &comp.audio,
        &scheduled.clicks,
        &comp.theme,
    );
    Ok(RenderJob {
        timeline: scheduled.timeline,
        audio,
    })
}
