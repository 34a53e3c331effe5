use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn wrap_degrees_handles_negative_and_large_inputs() {
    assert!(approx(wrap_degrees(-90.0), 270.0));
    assert!(approx(wrap_degrees(725.0), 5.0));
    assert!(approx(wrap_degrees(360.0), 0.0));
    let tiny = wrap_degrees(-1e-15);
    assert!((0.0..360.0).contains(&tiny));
}

#[test]
fn angular_distance_is_symmetric_and_bounded() {
    assert!(approx(angular_distance_deg(10.0, 350.0), 20.0));
    assert!(approx(angular_distance_deg(350.0, 10.0), 20.0));
    assert!(approx(angular_distance_deg(0.0, 180.0), 180.0));
    assert!(approx(angular_distance_deg(90.0, 93.0), 3.0));
}

#[test]
fn polar_point_uses_screen_orientation() {
    let c = Point::new(100.0, 100.0);
    let east = polar_point(c, 10.0, 0.0);
    assert!(approx(east.x, 110.0) && approx(east.y, 100.0));
    let south = polar_point(c, 10.0, 90.0);
    assert!(approx(south.x, 100.0) && approx(south.y, 110.0));
}
