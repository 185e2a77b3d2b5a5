use super::*;

const DISPLAY: PixelSize = PixelSize::new(300, 200);

#[test]
fn full_covers_the_display() {
    let c = CropRegion::full(DISPLAY);
    assert_eq!(c.to_rect(), Rect::new(0.0, 0.0, 300.0, 200.0));
    assert!(c.is_valid_for(DISPLAY, 10.0));
}

#[test]
fn drag_edges_clamp_to_display() {
    let mut c = CropRegion::full(DISPLAY);
    c.drag_edge(CropEdge::Left, -40.0, DISPLAY, 10.0);
    assert_eq!(c.left, 0.0);
    c.drag_edge(CropEdge::Right, 999.0, DISPLAY, 10.0);
    assert_eq!(c.right, 300.0);
    c.drag_edge(CropEdge::Top, 25.0, DISPLAY, 10.0);
    assert_eq!(c.top, 25.0);
    c.drag_edge(CropEdge::Bottom, 150.0, DISPLAY, 10.0);
    assert_eq!(c.bottom, 150.0);
}

#[test]
fn drag_edges_keep_minimum_size() {
    let mut c = CropRegion::full(DISPLAY);
    c.drag_edge(CropEdge::Left, 295.0, DISPLAY, 10.0);
    assert_eq!(c.left, 290.0);
    c.drag_edge(CropEdge::Right, 0.0, DISPLAY, 10.0);
    assert_eq!(c.right, 300.0);

    c.drag_edge(CropEdge::Bottom, 3.0, DISPLAY, 10.0);
    assert_eq!(c.bottom, 10.0);
    c.drag_edge(CropEdge::Top, 50.0, DISPLAY, 10.0);
    assert_eq!(c.top, 0.0);
    assert!(c.is_valid_for(DISPLAY, 10.0));
}

#[test]
fn non_finite_drag_is_ignored() {
    let mut c = CropRegion::full(DISPLAY);
    c.drag_edge(CropEdge::Left, f64::NAN, DISPLAY, 10.0);
    assert_eq!(c, CropRegion::full(DISPLAY));
}

#[test]
fn clamped_repairs_out_of_range_rectangles() {
    let c = CropRegion {
        left: -5.0,
        top: 190.0,
        right: 400.0,
        bottom: 195.0,
    };
    let fixed = c.clamped(DISPLAY, 10.0);
    assert_eq!(
        fixed,
        CropRegion {
            left: 0.0,
            top: 190.0,
            right: 300.0,
            bottom: 200.0,
        }
    );
    assert!(!c.is_valid_for(DISPLAY, 10.0));
}

#[test]
fn minimum_shrinks_to_tiny_displays() {
    let tiny = PixelSize::new(4, 4);
    let c = CropRegion::full(PixelSize::new(300, 200)).clamped(tiny, 10.0);
    assert_eq!(c, CropRegion::full(tiny));
}

#[test]
fn scaled_multiplies_every_edge() {
    let c = CropRegion {
        left: 10.0,
        top: 20.0,
        right: 110.0,
        bottom: 120.0,
    };
    assert_eq!(c.scaled(0.5), Rect::new(5.0, 10.0, 55.0, 60.0));
}
