use crate::{
    animation::cursor::CursorTrack,
    animation::ease::Ease,
    animation::fade::OpacityCurve,
    audio::mix::AudioEvent,
    composition::model::{Cadence, Composition, SceneLayout},
    composition::style::Theme,
    foundation::core::{Rect, TimeSpan},
    foundation::error::GridreelResult,
    layout::grid::compute_grid,
    layout::hero::compute_hero,
    scene::element::{ElementKind, ImageContent, SceneElement},
    scene::timeline::Timeline,
};

/// A scheduled composition: the visual timeline plus the click events the
/// cursor tour produced, not yet merged with the other audio layers.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    /// Scene elements in painter's order.
    pub timeline: Timeline,
    /// One click event per cursor press, empty without a click source.
    pub clicks: Vec<AudioEvent>,
}

/// Build the full visual timeline and the click-event list for `comp`.
///
/// Structural configuration errors surface here before any element is built;
/// per-asset problems degrade locally and never abort the schedule.
#[tracing::instrument(skip(comp))]
pub fn schedule(comp: &Composition) -> GridreelResult<Schedule> {
    comp.validate()?;
    let master = comp.master_duration()?;
    let full = TimeSpan::new(0.0, master);

    let mut timeline = Timeline::new(comp.canvas, comp.fps, master);
    timeline.elements.push(SceneElement {
        id: "background".to_string(),
        span: full,
        opacity: OpacityCurve::opaque(),
        kind: ElementKind::Background {
            rect: comp.canvas.bounds(),
            color: comp.theme.background,
        },
    });

    let mut clicks = Vec::new();
    match comp.layout {
        SceneLayout::Grid => {
            let layout = compute_grid(comp.images.len(), comp.canvas, &comp.theme);
            if layout.overflow {
                tracing::warn!(
                    images = comp.images.len(),
                    "minimum card size makes the grid overflow the canvas"
                );
            }
            push_card_scene(&mut timeline, comp, &layout.cells, full);
            clicks = schedule_cursor(&mut timeline, comp, &layout.cells, full);
        }
        SceneLayout::Hero => {
            let layout = compute_hero(comp.images.len(), comp.canvas, &comp.theme)?;
            let mut cells = Vec::with_capacity(1 + layout.cells.len());
            cells.push(layout.hero);
            cells.extend(layout.cells);
            push_card_scene(&mut timeline, comp, &cells, full);
            clicks = schedule_cursor(&mut timeline, comp, &cells, full);
        }
        SceneLayout::Slideshow => {
            schedule_slides(&mut timeline, comp, master);
        }
    }

    Ok(Schedule { timeline, clicks })
}

/// Shadow, card, image and optional label for each cell, all full-span.
///
/// Draw order per card matches the reference composition: shadow below card
/// below image, label on top.
fn push_card_scene(timeline: &mut Timeline, comp: &Composition, cells: &[Rect], span: TimeSpan) {
    let theme = &comp.theme;
    let labeled = !comp.labels.is_empty();

    for (i, (cell, image)) in cells.iter().zip(&comp.images).enumerate() {
        let d = theme.shadow_offset;
        timeline.elements.push(SceneElement {
            id: format!("shadow-{i}"),
            span,
            opacity: OpacityCurve::Constant(theme.shadow_opacity),
            kind: ElementKind::Shadow {
                rect: Rect::new(cell.x0 + d, cell.y0 + d, cell.x1 + d, cell.y1 + d),
                color: theme.shadow,
            },
        });
        timeline.elements.push(SceneElement {
            id: format!("card-{i}"),
            span,
            opacity: OpacityCurve::opaque(),
            kind: ElementKind::Card {
                rect: *cell,
                color: theme.card,
            },
        });

        let inner = if labeled {
            labeled_image_box(*cell, theme)
        } else {
            plain_image_box(*cell, theme)
        };
        timeline.elements.push(SceneElement {
            id: format!("image-{i}"),
            span,
            opacity: OpacityCurve::opaque(),
            kind: ElementKind::Image {
                content: ImageContent::resolve(&image.source, image.dims, inner),
            },
        });

        if let Some(text) = comp.labels.get(i).filter(|t| !t.is_empty()) {
            timeline.elements.push(SceneElement {
                id: format!("label-{i}"),
                span,
                opacity: OpacityCurve::opaque(),
                kind: ElementKind::Label {
                    rect: Rect::new(cell.x0, cell.y1 - theme.label_height, cell.x1, cell.y1),
                    text: text.clone(),
                    size_px: (cell.width() / 8.0).min(theme.label_max_size),
                    color: theme.label_color,
                },
            });
        }
    }
}

/// Inner content box of an unlabeled card: a responsive inset all around.
fn plain_image_box(cell: Rect, theme: &Theme) -> Rect {
    let inset = cell.width().min(cell.height()) * theme.image_inset_ratio;
    Rect::new(
        cell.x0 + inset,
        cell.y0 + inset,
        cell.x1 - inset,
        cell.y1 - inset,
    )
}

/// Inner content box of a labeled card: fixed inset, label strip reserved at
/// the bottom.
fn labeled_image_box(cell: Rect, theme: &Theme) -> Rect {
    Rect::new(
        cell.x0 + theme.label_inset,
        cell.y0 + theme.label_inset,
        cell.x1 - theme.label_inset,
        cell.y1 - theme.label_height - theme.label_gap,
    )
}

/// Add the cursor tour element and derive its click events.
fn schedule_cursor(
    timeline: &mut Timeline,
    comp: &Composition,
    cells: &[Rect],
    span: TimeSpan,
) -> Vec<AudioEvent> {
    let Some(spec) = comp.cursor else {
        return Vec::new();
    };
    if cells.is_empty() {
        return Vec::new();
    }

    let theme = &comp.theme;
    let track = CursorTrack {
        waypoints: cells.iter().map(|c| c.center()).collect(),
        move_duration: spec.move_duration,
        press_duration: theme.press_duration,
        press_depth: theme.press_depth,
        ease: Ease::SmoothStep,
    };
    let press_starts = track.press_starts(span.duration);

    timeline.elements.push(SceneElement {
        id: "cursor".to_string(),
        span,
        opacity: OpacityCurve::opaque(),
        kind: ElementKind::Cursor {
            track,
            radius: theme.cursor_radius,
            color: theme.cursor_color,
            glow_radius: Some(theme.cursor_radius * theme.cursor_glow_ratio),
        },
    });

    match &comp.audio.click {
        Some(click) => press_starts
            .into_iter()
            .map(|start| AudioEvent {
                source: click.source.clone(),
                start: span.start + start,
                gain: theme.click_gain,
                clip: Some((0.0, theme.press_duration)),
            })
            .collect(),
        None => {
            tracing::warn!("no click sound configured; cursor presses are silent");
            Vec::new()
        }
    }
}

/// Schedule full-frame slideshow images plus optional intro/outro cards.
fn schedule_slides(timeline: &mut Timeline, comp: &Composition, master: f64) {
    let theme = &comp.theme;
    let canvas_box = comp.canvas.bounds();
    let intro_len = comp.intro.as_ref().map_or(0.0, |_| theme.intro_duration);
    let outro_len = comp.outro.as_ref().map_or(0.0, |_| theme.outro_duration);
    let window_start = intro_len.min(master);
    let window_end = (master - outro_len).max(window_start);

    if let Some(intro) = &comp.intro {
        timeline.elements.push(SceneElement {
            id: "intro".to_string(),
            span: TimeSpan::new(0.0, intro_len).clamped_to(master),
            opacity: OpacityCurve::opaque(),
            kind: ElementKind::Image {
                content: ImageContent::resolve(&intro.source, intro.dims, canvas_box),
            },
        });
    }

    let n = comp.images.len();
    if n > 0 && window_end > window_start {
        match comp.cadence {
            Cadence::Uniform { .. } | Cadence::VoiceOverDriven => {
                let each = (window_end - window_start) / n as f64;
                for (i, image) in comp.images.iter().enumerate() {
                    timeline.elements.push(SceneElement {
                        id: format!("slide-{i}"),
                        span: TimeSpan::new(window_start + i as f64 * each, each),
                        opacity: OpacityCurve::opaque(),
                        kind: ElementKind::Image {
                            content: ImageContent::resolve(&image.source, image.dims, canvas_box),
                        },
                    });
                }
            }
            Cadence::Cyclic {
                slide, crossfade, ..
            } => {
                let mut k = 0usize;
                loop {
                    let start = window_start + k as f64 * slide;
                    if start >= window_end {
                        break;
                    }
                    let truncated = start + slide + crossfade > window_end;
                    let (fade_in, fade_out) = if k == 0 {
                        (crossfade, 0.0)
                    } else if truncated {
                        (0.0, crossfade)
                    } else {
                        (crossfade, crossfade)
                    };
                    let image = &comp.images[k % n];
                    timeline.elements.push(SceneElement {
                        id: format!("slide-{k}"),
                        span: TimeSpan::new(start, (slide + crossfade).min(window_end - start)),
                        opacity: OpacityCurve::Fade {
                            base: 1.0,
                            fade_in,
                            fade_out,
                        },
                        kind: ElementKind::Image {
                            content: ImageContent::resolve(&image.source, image.dims, canvas_box),
                        },
                    });
                    k += 1;
                }
            }
        }
    }

    if let Some(outro) = &comp.outro {
        let start = (master - outro_len).max(0.0);
        timeline.elements.push(SceneElement {
            id: "outro".to_string(),
            span: TimeSpan::new(start, outro_len).clamped_to(master),
            opacity: OpacityCurve::opaque(),
            kind: ElementKind::Image {
                content: ImageContent::resolve(&outro.source, outro.dims, canvas_box),
            },
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/scheduler.rs"]
mod tests;
