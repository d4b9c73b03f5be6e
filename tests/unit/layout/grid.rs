use super::*;

const CANVAS: Canvas = Canvas {
    width: 900,
    height: 1600,
};

#[test]
fn dims_table_matches_reference() {
    let expect = [
        (1, 1, 1),
        (2, 1, 2),
        (3, 1, 3),
        (4, 2, 2),
        (5, 2, 3),
        (6, 2, 3),
        (7, 3, 3),
        (9, 3, 3),
        (10, 3, 4),
        (12, 3, 4),
        (13, 4, 4),
        (16, 4, 4),
    ];
    for (n, cols, rows) in expect {
        assert_eq!(grid_dims(n), GridSpec { cols, rows }, "n={n}");
    }
}

#[test]
fn large_counts_fall_back_to_near_square() {
    let spec = grid_dims(20);
    assert_eq!(spec, GridSpec { cols: 5, rows: 4 });
    for n in 17..=60 {
        let spec = grid_dims(n);
        assert!(spec.capacity() as usize >= n, "n={n}");
    }
}

#[test]
fn capacity_covers_count_for_small_grids() {
    for n in 1..=16 {
        assert!(grid_dims(n).capacity() as usize >= n, "n={n}");
    }
}

#[test]
fn four_cards_are_centered_with_even_margins() {
    let layout = compute_grid(4, CANVAS, &Theme::default());
    assert_eq!(layout.spec, GridSpec { cols: 2, rows: 2 });
    assert_eq!(layout.cells.len(), 4);
    assert!(!layout.overflow);

    let c0 = layout.cells[0];
    assert_eq!(c0.width(), 396.0);
    assert_eq!(c0.height(), 746.0);

    let left = layout.cells[0].x0;
    let right = f64::from(CANVAS.width) - layout.cells[1].x1;
    assert!((left - right).abs() <= 1.0);
    let top = layout.cells[0].y0;
    let bottom = f64::from(CANVAS.height) - layout.cells[3].y1;
    assert!((top - bottom).abs() <= 1.0);
}

#[test]
fn odd_division_still_centers_within_one_pixel() {
    let layout = compute_grid(3, CANVAS, &Theme::default());
    let top = layout.cells[0].y0;
    let bottom = f64::from(CANVAS.height) - layout.cells[2].y1;
    assert!((top - bottom).abs() <= 1.0);
}

#[test]
fn block_fits_padded_canvas_for_small_counts() {
    let theme = Theme::default();
    let padding = theme.base_padding(CANVAS.min_side());
    for n in 1..=16 {
        let layout = compute_grid(n, CANVAS, &theme);
        assert!(!layout.overflow, "n={n}");
        for cell in &layout.cells {
            assert!(cell.x0 >= padding - 1e-9, "n={n}");
            assert!(cell.x1 <= f64::from(CANVAS.width) - padding + 1e-9, "n={n}");
            assert!(cell.y0 >= padding - 1e-9, "n={n}");
            assert!(cell.y1 <= f64::from(CANVAS.height) - padding + 1e-9, "n={n}");
        }
    }
}

#[test]
fn minimum_card_size_overflows_and_is_flagged() {
    let canvas = Canvas {
        width: 300,
        height: 300,
    };
    let layout = compute_grid(49, canvas, &Theme::default());
    assert!(layout.overflow);
    // Raised to the 15% floor instead of being silently clipped.
    assert_eq!(layout.cells[0].width(), 45.0);
    assert_eq!(layout.cells[0].height(), 45.0);
    let block_w = layout.cells[6].x1 - layout.cells[0].x0;
    assert!(block_w > f64::from(canvas.width));
}

#[test]
fn zero_items_yield_empty_layout() {
    let layout = compute_grid(0, CANVAS, &Theme::default());
    assert!(layout.cells.is_empty());
    assert!(!layout.overflow);
    assert_eq!(layout.spec.capacity(), 0);
}
