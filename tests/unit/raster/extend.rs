use super::*;

fn distinct(w: u32, h: u32) -> RasterImage {
    let mut data = Vec::new();
    for y in 0..h {
        for x in 0..w {
            data.extend_from_slice(&[(10 + x) as u8, (100 + y) as u8, 7, 255]);
        }
    }
    RasterImage::from_premul_rgba8(w, h, data).unwrap()
}

#[test]
fn output_grows_by_twice_the_radius() {
    let src = distinct(5, 3);
    let out = extend_edges(&src, 4).unwrap();
    assert_eq!(out.size(), PixelSize::new(13, 11));
}

#[test]
fn radius_zero_is_a_copy() {
    let src = distinct(3, 3);
    assert_eq!(extend_edges(&src, 0).unwrap(), src);
}

#[test]
fn center_is_an_offset_copy() {
    let src = distinct(4, 3);
    let r = 2;
    let out = extend_edges(&src, r).unwrap();
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(out.pixel(x + r, y + r), src.pixel(x, y));
        }
    }
}

#[test]
fn strips_replicate_nearest_edge() {
    let src = distinct(4, 3);
    let r = 3;
    let out = extend_edges(&src, r).unwrap();

    // Top and bottom strips copy the first/last row.
    for x in 0..4 {
        for k in 0..r {
            assert_eq!(out.pixel(x + r, k), src.pixel(x, 0));
            assert_eq!(out.pixel(x + r, 3 + r + k), src.pixel(x, 2));
        }
    }
    // Left and right strips copy the first/last column.
    for y in 0..3 {
        for k in 0..r {
            assert_eq!(out.pixel(k, y + r), src.pixel(0, y));
            assert_eq!(out.pixel(4 + r + k, y + r), src.pixel(3, y));
        }
    }
}

#[test]
fn corners_take_the_corner_pixel() {
    let src = distinct(4, 3);
    let r = 2;
    let out = extend_edges(&src, r).unwrap();
    let (ow, oh) = (out.width(), out.height());
    for k in 0..r {
        for j in 0..r {
            assert_eq!(out.pixel(k, j), src.pixel(0, 0));
            assert_eq!(out.pixel(ow - 1 - k, j), src.pixel(3, 0));
            assert_eq!(out.pixel(k, oh - 1 - j), src.pixel(0, 2));
            assert_eq!(out.pixel(ow - 1 - k, oh - 1 - j), src.pixel(3, 2));
        }
    }
}

#[test]
fn border_never_introduces_transparency() {
    let src = distinct(2, 2);
    let out = extend_edges(&src, 5).unwrap();
    assert!(out.data().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn single_pixel_source_fills_everything() {
    let src = RasterImage::filled(1, 1, [9, 8, 7, 6]).unwrap();
    let out = extend_edges(&src, 3).unwrap();
    assert_eq!(out.size(), PixelSize::new(7, 7));
    assert!(out.data().chunks_exact(4).all(|px| px == [9, 8, 7, 6]));
}

#[test]
fn empty_source_is_rejected() {
    assert!(extend_edges(&RasterImage::empty(), 2).is_err());
}
