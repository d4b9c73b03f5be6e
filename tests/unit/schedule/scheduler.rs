use super::*;
use crate::{
    AudioLayers, AudioSource, Canvas, ContentState, CursorSpec, Fps, ImageAsset,
};

fn images(n: usize) -> Vec<ImageAsset> {
    (0..n)
        .map(|i| ImageAsset::new(format!("img-{i}.png"), 800, 600))
        .collect()
}

fn base(layout: SceneLayout, cadence: Cadence, n: usize) -> Composition {
    Composition {
        canvas: Canvas {
            width: 900,
            height: 1600,
        },
        fps: Fps::new(24, 1).unwrap(),
        layout,
        cadence,
        images: images(n),
        labels: Vec::new(),
        cursor: None,
        audio: AudioLayers::default(),
        intro: None,
        outro: None,
        theme: Theme::default(),
    }
}

fn ids(timeline: &Timeline) -> Vec<&str> {
    timeline.elements.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn hero_scene_has_sixteen_elements() {
    let out = schedule(&base(SceneLayout::Hero, Cadence::Uniform { total: 10.0 }, 5)).unwrap();
    // background + 5 x (shadow, card, image)
    assert_eq!(out.timeline.elements.len(), 16);
    assert_eq!(out.timeline.elements[0].id, "background");

    // The first card is the hero spanning ~45% of canvas height.
    let hero_card = &out.timeline.elements[2];
    assert_eq!(hero_card.id, "card-0");
    let ElementKind::Card { rect, .. } = &hero_card.kind else {
        panic!("expected a card element");
    };
    assert!((rect.height() / 1600.0 - 0.45).abs() < 1e-9);

    for element in &out.timeline.elements {
        assert_eq!(element.span, TimeSpan::new(0.0, 10.0));
    }
}

#[test]
fn hero_with_wrong_count_fails_before_building() {
    let err = schedule(&base(SceneLayout::Hero, Cadence::Uniform { total: 10.0 }, 4)).unwrap_err();
    assert!(matches!(err, crate::GridreelError::Layout(_)));
}

#[test]
fn grid_scene_orders_shadow_card_image_per_cell() {
    let out = schedule(&base(SceneLayout::Grid, Cadence::Uniform { total: 6.0 }, 2)).unwrap();
    assert_eq!(
        ids(&out.timeline),
        vec!["background", "shadow-0", "card-0", "image-0", "shadow-1", "card-1", "image-1"]
    );
}

#[test]
fn grid_labels_add_one_element_per_card() {
    let mut comp = base(SceneLayout::Grid, Cadence::Uniform { total: 6.0 }, 2);
    comp.labels = vec!["Minimal".to_string(), "Futuristic".to_string()];
    let out = schedule(&comp).unwrap();
    assert_eq!(out.timeline.elements.len(), 9);

    let label = out
        .timeline
        .elements
        .iter()
        .find(|e| e.id == "label-0")
        .unwrap();
    let ElementKind::Label {
        rect,
        text,
        size_px,
        ..
    } = &label.kind
    else {
        panic!("expected a label element");
    };
    assert_eq!(text, "Minimal");
    // Bottom strip of the card, responsive font size capped at the theme max.
    assert_eq!(rect.height(), comp.theme.label_height);
    assert!(*size_px <= comp.theme.label_max_size);
}

#[test]
fn zero_images_yield_background_only() {
    for layout in [SceneLayout::Grid, SceneLayout::Slideshow] {
        let out = schedule(&base(layout, Cadence::Uniform { total: 5.0 }, 0)).unwrap();
        assert_eq!(ids(&out.timeline), vec!["background"]);
        assert_eq!(out.timeline.duration, 5.0);
        assert!(out.clicks.is_empty());
    }
}

#[test]
fn uniform_cadence_divides_time_evenly() {
    let out = schedule(&base(
        SceneLayout::Slideshow,
        Cadence::Uniform { total: 6.0 },
        3,
    ))
    .unwrap();
    let slides: Vec<_> = out
        .timeline
        .elements
        .iter()
        .filter(|e| e.id.starts_with("slide-"))
        .collect();
    assert_eq!(slides.len(), 3);
    for (i, slide) in slides.iter().enumerate() {
        assert!((slide.span.start - 2.0 * i as f64).abs() < 1e-9);
        assert!((slide.span.duration - 2.0).abs() < 1e-9);
        assert_eq!(slide.opacity, OpacityCurve::opaque());
    }
}

#[test]
fn cyclic_cadence_truncates_and_drops_late_slides() {
    // totalDuration=5, slideDuration=2, 4 images, crossfade=0.5: slides start
    // at 0, 2 and 4; the slide that would start at 6 is dropped entirely.
    let out = schedule(&base(
        SceneLayout::Slideshow,
        Cadence::Cyclic {
            total: 5.0,
            slide: 2.0,
            crossfade: 0.5,
        },
        4,
    ))
    .unwrap();
    let slides: Vec<_> = out
        .timeline
        .elements
        .iter()
        .filter(|e| e.id.starts_with("slide-"))
        .collect();
    assert_eq!(slides.len(), 3);

    assert_eq!(slides[0].span, TimeSpan::new(0.0, 2.5));
    assert_eq!(
        slides[0].opacity,
        OpacityCurve::Fade {
            base: 1.0,
            fade_in: 0.5,
            fade_out: 0.0,
        }
    );
    assert_eq!(slides[1].span, TimeSpan::new(2.0, 2.5));
    assert_eq!(
        slides[1].opacity,
        OpacityCurve::Fade {
            base: 1.0,
            fade_in: 0.5,
            fade_out: 0.5,
        }
    );
    // The tail is clamped at the master duration and only fades out.
    assert_eq!(slides[2].span, TimeSpan::new(4.0, 1.0));
    assert_eq!(
        slides[2].opacity,
        OpacityCurve::Fade {
            base: 1.0,
            fade_in: 0.0,
            fade_out: 0.5,
        }
    );
}

#[test]
fn cyclic_neighbors_overlap_by_exactly_the_crossfade() {
    let out = schedule(&base(
        SceneLayout::Slideshow,
        Cadence::Cyclic {
            total: 13.0,
            slide: 2.0,
            crossfade: 0.5,
        },
        3,
    ))
    .unwrap();
    let slides: Vec<_> = out
        .timeline
        .elements
        .iter()
        .filter(|e| e.id.starts_with("slide-"))
        .collect();
    // Interior neighbors overlap by the crossfade; the truncated tail may
    // overlap less.
    for pair in slides.windows(2).take(slides.len().saturating_sub(2)) {
        assert!((pair[0].span.overlap(pair[1].span) - 0.5).abs() < 1e-9);
    }
    // Images repeat cyclically past one full cycle.
    assert!(slides.len() > 3);
}

#[test]
fn no_element_outlives_the_master_duration() {
    let comps = [
        base(
            SceneLayout::Slideshow,
            Cadence::Cyclic {
                total: 5.0,
                slide: 2.0,
                crossfade: 0.5,
            },
            4,
        ),
        base(SceneLayout::Grid, Cadence::Uniform { total: 7.5 }, 6),
        base(SceneLayout::Hero, Cadence::Uniform { total: 3.0 }, 5),
    ];
    for comp in comps {
        let out = schedule(&comp).unwrap();
        for element in &out.timeline.elements {
            assert!(
                element.span.end() <= out.timeline.duration + 1e-9,
                "{} ends at {}",
                element.id,
                element.span.end()
            );
        }
    }
}

#[test]
fn intro_and_outro_wrap_the_slideshow_window() {
    let mut comp = base(SceneLayout::Slideshow, Cadence::Uniform { total: 10.0 }, 3);
    comp.intro = Some(ImageAsset::new("intro.png", 900, 1600));
    comp.outro = Some(ImageAsset::new("outro.png", 900, 1600));
    let out = schedule(&comp).unwrap();

    assert_eq!(out.timeline.elements[1].id, "intro");
    assert_eq!(out.timeline.elements[1].span, TimeSpan::new(0.0, 2.0));

    let slides: Vec<_> = out
        .timeline
        .elements
        .iter()
        .filter(|e| e.id.starts_with("slide-"))
        .collect();
    assert_eq!(slides.len(), 3);
    assert!((slides[0].span.start - 2.0).abs() < 1e-9);
    assert!((slides[0].span.duration - 2.0).abs() < 1e-9);

    let outro = out.timeline.elements.last().unwrap();
    assert_eq!(outro.id, "outro");
    assert_eq!(outro.span, TimeSpan::new(8.0, 2.0));
}

#[test]
fn voice_over_drives_the_master_duration() {
    let mut comp = base(SceneLayout::Slideshow, Cadence::VoiceOverDriven, 5);
    comp.audio.voice_over = Some(AudioSource {
        source: "vo.wav".to_string(),
        duration: Some(14.0),
    });
    comp.intro = Some(ImageAsset::new("intro.png", 900, 1600));
    comp.outro = Some(ImageAsset::new("outro.png", 900, 1600));
    let out = schedule(&comp).unwrap();

    assert_eq!(out.timeline.duration, 14.0);
    let slides: Vec<_> = out
        .timeline
        .elements
        .iter()
        .filter(|e| e.id.starts_with("slide-"))
        .collect();
    // (14 - 2 - 2) / 5 = 2 seconds per image.
    assert_eq!(slides.len(), 5);
    for slide in &slides {
        assert!((slide.span.duration - 2.0).abs() < 1e-9);
    }
}

#[test]
fn cursor_emits_one_click_per_press() {
    let mut comp = base(SceneLayout::Grid, Cadence::Uniform { total: 10.0 }, 4);
    comp.cursor = Some(CursorSpec { move_duration: 1.0 });
    comp.audio.click = Some(AudioSource {
        source: "click.wav".to_string(),
        duration: None,
    });
    let out = schedule(&comp).unwrap();

    let cursor = out.timeline.elements.last().unwrap();
    assert_eq!(cursor.id, "cursor");
    let ElementKind::Cursor { track, .. } = &cursor.kind else {
        panic!("expected cursor element");
    };
    assert_eq!(track.waypoints.len(), 4);

    // Presses at 1.0, 2.2, ..., 9.4: eight fall inside the 10 s master.
    assert_eq!(out.clicks.len(), 8);
    for (i, click) in out.clicks.iter().enumerate() {
        assert!((click.start - (1.0 + 1.2 * i as f64)).abs() < 1e-9);
        assert_eq!(click.gain, comp.theme.click_gain);
        assert_eq!(click.clip, Some((0.0, comp.theme.press_duration)));
        assert!(click.start < out.timeline.duration);
    }
}

#[test]
fn missing_click_source_keeps_cursor_visuals_identical() {
    let mut with_click = base(SceneLayout::Grid, Cadence::Uniform { total: 10.0 }, 4);
    with_click.cursor = Some(CursorSpec { move_duration: 1.0 });
    with_click.audio.click = Some(AudioSource {
        source: "click.wav".to_string(),
        duration: None,
    });
    let mut without_click = with_click.clone();
    without_click.audio.click = None;

    let a = schedule(&with_click).unwrap();
    let b = schedule(&without_click).unwrap();
    assert_eq!(a.timeline, b.timeline);
    assert!(!a.clicks.is_empty());
    assert!(b.clicks.is_empty());
}

#[test]
fn placeholder_images_do_not_change_element_count() {
    let mut comp = base(SceneLayout::Grid, Cadence::Uniform { total: 5.0 }, 3);
    comp.images[1] = ImageAsset::unavailable("missing.png");
    let out = schedule(&comp).unwrap();
    assert_eq!(out.timeline.elements.len(), 10);

    let degraded = out
        .timeline
        .elements
        .iter()
        .find(|e| e.id == "image-1")
        .unwrap();
    let ElementKind::Image { content } = &degraded.kind else {
        panic!("expected image element");
    };
    assert_eq!(content.state, ContentState::Placeholder);
}
