//! Gridreel assembles short vertical-video slideshows from still images,
//! text labels, a cursor-animation overlay, and audio tracks.
//!
//! The crate is the timeline-composition and layout core only: it computes
//! responsive card-grid geometry, schedules visual elements onto a shared
//! timeline (with fades, crossfades and an animated cursor), and aligns the
//! audio layers (voice-over, background music, cursor clicks) to the video
//! duration. Rasterization, text shaping, media decode and encoding belong
//! to an external renderer behind the [`RenderSink`] seam.
//!
//! # Pipeline overview
//!
//! 1. **Model**: build a [`Composition`] (pure data, serde-serializable)
//! 2. **Compose**: [`compose`] validates it and produces a [`RenderJob`]
//! 3. **Render** (external): the job's [`Timeline`] and [`AudioTimeline`]
//!    are consumed eagerly or incrementally, in painter's order
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: composition is pure and stable for a given input.
//! - **No IO**: asset references pass through unresolved; missing assets
//!   degrade to placeholders instead of failing the call.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod audio;
mod composition;
mod foundation;
mod layout;
mod pipeline;
mod scene;
mod schedule;

pub use animation::cursor::CursorTrack;
pub use animation::ease::Ease;
pub use animation::fade::OpacityCurve;
pub use audio::mix::{AudioEvent, AudioTimeline, mix};
pub use composition::model::{
    AudioLayers, AudioSource, Cadence, Composition, CursorSpec, ImageAsset, MusicTrack,
    SceneLayout,
};
pub use composition::style::Theme;
pub use foundation::core::{Canvas, Fps, Point, Rect, Rgba8, TimeSpan, Vec2};
pub use foundation::error::{GridreelError, GridreelResult};
pub use layout::grid::{GridLayout, GridSpec, compute_grid, grid_dims};
pub use layout::hero::{HERO_ITEM_COUNT, HeroLayout, compute_hero};
pub use pipeline::{RenderJob, RenderSink, compose};
pub use scene::element::{ContentState, ElementKind, ImageContent, SceneElement, fit_rect};
pub use scene::timeline::Timeline;
pub use schedule::scheduler::{Schedule, schedule};
