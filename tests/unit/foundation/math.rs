use super::*;
use crate::foundation::core::Vec2;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn wrap_angle_identity_and_overflow() {
    for i in (0..360).step_by(10) {
        let theta = f64::from(i);
        assert_eq!(wrap_angle(theta), theta);
    }
    assert_eq!(wrap_angle(-60.0), 300.0);
    assert_eq!(wrap_angle(370.0), 10.0);
    assert_eq!(wrap_angle(370.25), 10.25);
    assert_eq!(wrap_angle(-60.25), 299.75);
    assert_eq!(wrap_angle(275.0 + 360.0 * 11.0), 275.0);
    assert_eq!(wrap_angle(275.0 - 360.0 * 11.0), 275.0);
    assert_eq!(wrap_angle(360.0), 0.0);
}

#[test]
fn degree_lerp_matches_plain_lerp_for_close_angles() {
    assert!(approx(degree_lerp(2.0, 8.0, 0.5), 5.0));
    assert!(approx(degree_lerp(2.0, 8.0, 0.0), 2.0));
    assert!(approx(degree_lerp(2.0, 8.0, 1.0), 8.0));
    assert!(approx(degree_lerp(0.0, 170.0, 0.5), 85.0));
}

#[test]
fn degree_lerp_takes_shorter_arc() {
    assert!(approx(degree_lerp(350.0, 10.0, 0.5), 0.0));
    assert!(approx(degree_lerp(-2.0, -8.0, 0.5), 355.0));
    assert!(approx(degree_lerp(-10.0, 30.0, 0.5), 10.0));
    assert!(approx(degree_lerp(10.0, -30.0, 0.5), 350.0));
    assert!(approx(degree_lerp(0.0, 190.0, 0.5), 275.0));
}

#[test]
fn degree_lerp_endpoints_survive_swap() {
    assert!(approx(degree_lerp(350.0, 10.0, 0.0), 350.0));
    assert!(approx(degree_lerp(350.0, 10.0, 1.0), 10.0));
}

#[test]
fn hermite_hits_endpoints() {
    let p0 = Vec2::new(1.0, 2.0);
    let p1 = Vec2::new(4.0, -1.0);
    let t0 = Vec2::new(3.0, 3.0);
    let t1 = Vec2::new(-2.0, 5.0);
    assert_eq!(hermite(p0, t0, p1, t1, 0.0), p0);
    assert_eq!(hermite(p0, t0, p1, t1, 1.0), p1);
    // Scalar form with zero tangents is smoothstep.
    assert!(approx(hermite(0.0, 0.0, 1.0, 0.0, 0.5), 0.5));
    assert!(approx(hermite(0.0, 0.0, 1.0, 0.0, 0.25), 0.15625));
}

#[test]
fn bezier_handles_degenerate_and_quadratic_inputs() {
    assert!(bezier::<f64>(0.5, &[]).is_err());
    assert_eq!(bezier(0.3, &[7.0]).unwrap(), 7.0);
    assert!(approx(bezier(0.25, &[0.0, 4.0]).unwrap(), 1.0));

    let pts = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0), Vec2::new(2.0, 0.0)];
    let mid = bezier(0.5, &pts).unwrap();
    assert!(approx(mid.x, 1.0));
    assert!(approx(mid.y, 1.0));
    assert_eq!(bezier(0.0, &pts).unwrap(), pts[0]);
    assert_eq!(bezier(1.0, &pts).unwrap(), pts[2]);
}

#[test]
fn lerp_between_remaps_parameter() {
    assert!(approx(lerp_between(2.0, 10.0, 4.0, 20.0, 3.0), 15.0));
    assert!(approx(lerp_between(2.0, 10.0, 4.0, 20.0, 2.0), 10.0));
}
