use super::*;

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

fn three_point() -> PathModel {
    PathModel::default()
}

#[test]
fn new_rejects_short_or_invalid_paths() {
    assert!(PathModel::new(200.0, vec![Point::new(1.0, 1.0)]).is_err());
    assert!(PathModel::new(0.0, vec![Point::ZERO, Point::new(1.0, 1.0)]).is_err());
    assert!(PathModel::new(200.0, vec![Point::ZERO, Point::new(f64::NAN, 1.0)]).is_err());
}

#[test]
fn new_clamps_points_into_frame() {
    let m = PathModel::new(100.0, vec![Point::new(-5.0, 50.0), Point::new(150.0, 120.0)]).unwrap();
    assert_eq!(m.canonical_points()[0], Point::new(0.0, 50.0));
    assert_eq!(m.canonical_points()[1], Point::new(100.0, 100.0));
}

#[test]
fn view_points_follow_rotation_about_center() {
    let mut m = three_point();
    assert_eq!(m.view_points(), m.canonical_points());

    m.set_rotation(90.0);
    // (40,160) relative to (100,100) is (-60,60); rotating by +90deg gives (-60,-60).
    assert!(approx(m.view_points()[0], Point::new(40.0, 40.0)));
    assert_eq!(m.canonical_points()[0], Point::new(40.0, 160.0));
}

#[test]
fn view_points_invert_back_to_canonical_for_any_rotation() {
    let mut m = three_point();
    for theta in [-725.0, -90.0, -33.3, 0.0, 12.5, 180.0, 359.0, 1080.0] {
        m.set_rotation(theta);
        for (i, &v) in m.view_points().iter().enumerate() {
            assert!(approx(m.to_canonical(v), m.canonical_points()[i]), "theta {theta}");
        }
    }
}

#[test]
fn rotation_does_not_compound() {
    let mut m = three_point();
    m.set_rotation(30.0);
    m.set_rotation(30.0);
    let once = {
        let mut n = three_point();
        n.set_rotation(30.0);
        n.view_points().to_vec()
    };
    assert_eq!(m.view_points(), once.as_slice());
}

#[test]
fn non_finite_rotation_is_ignored() {
    let mut m = three_point();
    m.set_rotation(45.0);
    m.set_rotation(f64::NAN);
    assert_eq!(m.rotation(), 45.0);
}

#[test]
fn insert_near_existing_point_is_declined() {
    let mut m = three_point();
    assert_eq!(m.insert_point(Point::new(105.0, 45.0)), None);
    assert_eq!(m.len(), 3);
}

#[test]
fn insert_goes_after_first_endpoint_of_nearest_segment() {
    let mut m = three_point();
    // Closest to the second segment (100,40)-(160,160).
    assert_eq!(m.insert_point(Point::new(140.0, 90.0)), Some(2));
    assert_eq!(m.len(), 4);
    assert_eq!(m.canonical_points()[2], Point::new(140.0, 90.0));

    // Closest to the first segment.
    assert_eq!(m.insert_point(Point::new(60.0, 100.0)), Some(1));
    assert_eq!(m.canonical_points()[1], Point::new(60.0, 100.0));
}

#[test]
fn insert_ties_pick_lowest_segment() {
    let mut m = PathModel::new(
        200.0,
        vec![
            Point::new(0.0, 100.0),
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
        ],
    )
    .unwrap();
    // Both segments are 50 units away from (100, 150), through the shared middle point.
    assert_eq!(m.insert_point(Point::new(100.0, 150.0)), Some(1));
    assert_eq!(m.canonical_points()[1], Point::new(100.0, 150.0));
}

#[test]
fn insert_in_rotated_view_writes_canonical_point() {
    let mut m = three_point();
    m.set_rotation(90.0);
    let view_pos = Point::new(150.0, 150.0);
    let idx = m.insert_point(view_pos).unwrap();
    assert!(approx(m.view_points()[idx], view_pos));
    assert!(approx(m.canonical_points()[idx], m.to_canonical(view_pos)));
}

#[test]
fn insert_outside_frame_after_inverse_rotation_is_clamped() {
    let mut m = three_point();
    m.set_rotation(45.0);
    // The view corner maps back to about (240, 100), past the right frame edge.
    let view_pos = Point::new(199.0, 199.0);
    assert!(approx(m.to_canonical(view_pos), Point::new(100.0 + 99.0 * 2f64.sqrt(), 100.0)));

    let idx = m.insert_point(view_pos).unwrap();
    let stored = m.canonical_points()[idx];
    assert_eq!(stored.x, 200.0);
    assert!((stored.y - 100.0).abs() < 1e-9);
}

#[test]
fn remove_respects_two_point_minimum() {
    let mut m = PathModel::new(200.0, vec![Point::new(10.0, 10.0), Point::new(90.0, 90.0)]).unwrap();
    assert!(!m.remove_point(0));
    assert_eq!(m.len(), 2);

    let mut m = three_point();
    assert!(!m.remove_point(3));
    assert!(m.remove_point(1));
    assert_eq!(m.len(), 2);
    assert_eq!(m.view_points().len(), 2);
}

#[test]
fn move_point_clamps_into_frame() {
    let mut m = three_point();
    assert!(m.move_point(0, Point::new(-50.0, 400.0)));
    assert_eq!(m.canonical_points()[0], Point::new(0.0, 200.0));
    assert!(!m.move_point(9, Point::new(1.0, 1.0)));
}

#[test]
fn move_point_in_rotated_view_lands_under_pointer() {
    let mut m = three_point();
    m.set_rotation(45.0);
    let target = Point::new(110.0, 90.0);
    assert!(m.move_point(1, target));
    assert!(approx(m.view_points()[1], target));
}

#[test]
fn find_nearest_uses_per_axis_box() {
    let m = three_point();
    assert_eq!(m.find_nearest(Point::new(107.0, 47.0), 8.0), Some(1));
    assert_eq!(m.find_nearest(Point::new(109.0, 40.0), 8.0), None);
    assert_eq!(m.find_nearest(Point::new(40.0, 160.0), 0.0), Some(0));
}
