use super::*;
use crate::editor::crop::{CropEdge, CropRegion};

fn stripes(w: u32, h: u32) -> RasterImage {
    let mut data = Vec::new();
    for _y in 0..h {
        for x in 0..w {
            let v = if (x / 3) % 2 == 0 { 230 } else { 20 };
            data.extend_from_slice(&[v, v / 2, 255 - v, 255]);
        }
    }
    RasterImage::from_premul_rgba8(w, h, data).unwrap()
}

fn loaded(w: u32, h: u32) -> EditorState {
    let mut s = EditorState::default();
    s.load_source(stripes(w, h)).unwrap();
    s
}

#[test]
fn tiers_map_to_fixed_scales() {
    assert_eq!(ExportTier::Full.scale(), 1.0);
    assert_eq!(ExportTier::Half.scale(), 0.5);
    assert_eq!(ExportTier::Quarter.scale(), 0.25);
}

#[test]
fn export_radius_rounds_up() {
    assert_eq!(export_blur_radius(10, 0.5), 5);
    assert_eq!(export_blur_radius(9, 0.5), 5);
    assert_eq!(export_blur_radius(10, 0.25), 3);
    assert_eq!(export_blur_radius(0, 0.25), 0);
}

#[test]
fn plan_export_halves_geometry() {
    let mut s = loaded(300, 200);
    s.set_blur_radius(10);
    let plan = plan_export(&s, 0.5).unwrap().unwrap();
    assert_eq!(plan.size, PixelSize::new(150, 100));
    assert_eq!(plan.blur_radius, 5);
    assert_eq!(plan.crop, Rect::new(0.0, 0.0, 150.0, 100.0));
}

#[test]
fn plan_export_rejects_bad_scale() {
    let s = loaded(10, 10);
    assert!(plan_export(&s, 0.0).is_err());
    assert!(plan_export(&s, f64::NAN).is_err());
}

#[test]
fn preview_without_source_is_empty() {
    let s = EditorState::default();
    assert!(render_preview(&s).unwrap().is_empty());
    assert!(render_export(&s, 1.0).unwrap().is_none());
}

#[test]
fn preview_into_clears_surface_without_source() {
    let s = EditorState::default();
    let mut surface = RasterImage::filled(3, 3, [1, 2, 3, 4]).unwrap();
    render_preview_into(&s, &mut surface).unwrap();
    assert_eq!(surface, RasterImage::transparent(3, 3).unwrap());
}

#[test]
fn preview_matches_display_size_and_is_idempotent() {
    let s = loaded(40, 30);
    let a = render_preview(&s).unwrap();
    let b = render_preview(&s).unwrap();
    assert_eq!(a.size(), PixelSize::new(40, 30));
    assert_eq!(a, b);

    let mut surface = RasterImage::empty();
    render_preview_into(&s, &mut surface).unwrap();
    assert_eq!(surface, a);
}

#[test]
fn zero_radius_preview_is_the_display_image() {
    let mut s = loaded(24, 12);
    s.set_blur_radius(0);
    let out = render_preview(&s).unwrap();
    assert_eq!(&out, s.source().unwrap().display());
}

#[test]
fn blur_changes_striped_preview() {
    let mut s = loaded(24, 12);
    s.set_blur_radius(6);
    let out = render_preview(&s).unwrap();
    assert_ne!(&out, s.source().unwrap().display());
}

#[test]
fn export_applies_scaled_crop() {
    let mut s = loaded(300, 200);
    s.set_blur_radius(10);
    s.drag_crop_edge(CropEdge::Left, 10.4);
    s.drag_crop_edge(CropEdge::Top, 20.0);
    s.drag_crop_edge(CropEdge::Right, 290.0);
    s.drag_crop_edge(CropEdge::Bottom, 180.0);

    let out = render_export(&s, 0.5).unwrap().unwrap();
    // (5.2, 10, 145, 90) rounds to x 5..145, y 10..90.
    assert_eq!(out.size(), PixelSize::new(140, 80));
}

#[test]
fn full_export_of_uncropped_state_matches_preview() {
    let s = loaded(32, 16);
    let preview = render_preview(&s).unwrap();
    let export = render_export(&s, 1.0).unwrap().unwrap();
    assert_eq!(preview, export);
}

#[test]
fn export_of_tiny_crop_is_at_least_one_pixel() {
    let mut s = loaded(40, 40);
    s.set_crop(CropRegion {
        left: 0.0,
        top: 0.0,
        right: 10.0,
        bottom: 10.0,
    });
    let out = render_export(&s, 0.01).unwrap().unwrap();
    assert_eq!(out.size(), PixelSize::new(1, 1));
}
