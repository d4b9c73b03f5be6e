use super::*;

#[test]
fn fit_rect_downscales_and_centers() {
    let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
    let fitted = fit_rect(1000, 500, bounds);
    assert_eq!(fitted, Rect::new(0.0, 50.0, 200.0, 150.0));
}

#[test]
fn fit_rect_never_upscales() {
    let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
    let fitted = fit_rect(50, 40, bounds);
    assert_eq!(fitted.width(), 50.0);
    assert_eq!(fitted.height(), 40.0);
    assert_eq!(fitted.x0, 75.0);
    assert_eq!(fitted.y0, 80.0);
}

#[test]
fn fit_rect_preserves_aspect_ratio() {
    let bounds = Rect::new(10.0, 20.0, 310.0, 170.0);
    for (w, h) in [(1920u32, 1080u32), (640, 480), (333, 777)] {
        let fitted = fit_rect(w, h, bounds);
        let src_ratio = f64::from(w) / f64::from(h);
        let out_ratio = fitted.width() / fitted.height();
        // Integer flooring may cost up to a pixel per axis.
        assert!((src_ratio - out_ratio).abs() < 0.02, "{w}x{h}");
        assert!(fitted.width() <= bounds.width() + 1e-9);
        assert!(fitted.height() <= bounds.height() + 1e-9);
    }
}

#[test]
fn unavailable_source_degrades_to_placeholder() {
    let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
    let missing = ImageContent::resolve("gone.png", None, bounds);
    assert_eq!(missing.state, ContentState::Placeholder);
    assert_eq!(missing.rect, bounds);
    assert_eq!(missing.source, "gone.png");

    let zero_area = ImageContent::resolve("empty.png", Some((0, 400)), bounds);
    assert_eq!(zero_area.state, ContentState::Placeholder);
}

#[test]
fn available_source_resolves() {
    let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
    let content = ImageContent::resolve("ok.png", Some((400, 400)), bounds);
    assert_eq!(content.state, ContentState::Resolved);
    assert_eq!(content.rect, bounds);
}
