use super::*;
use crate::foundation::core::Affine;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn default_is_identity_placement() {
    let o = Orientation::default();
    assert_eq!(o.position, Vec2::ZERO);
    assert_eq!(o.rotation, 0.0);
    assert_eq!(o.scale, Vec2::new(1.0, 1.0));
    assert_eq!(o.to_affine(), Affine::IDENTITY);
}

#[test]
fn lerp_blends_every_component() {
    let a = Orientation::new(Vec2::new(0.0, 0.0), 350.0, Vec2::new(1.0, 1.0));
    let b = Orientation::new(Vec2::new(10.0, -4.0), 10.0, Vec2::new(3.0, 2.0));
    let mid = Orientation::lerp(&a, &b, 0.5);
    assert_eq!(mid.position, Vec2::new(5.0, -2.0));
    // Plain numeric blend, no shortest-arc handling.
    assert_eq!(mid.rotation, 180.0);
    assert_eq!(mid.scale, Vec2::new(2.0, 1.5));
}

#[test]
fn affine_scales_then_rotates_then_translates() {
    let o = Orientation::new(Vec2::new(5.0, 1.0), 90.0, Vec2::new(2.0, 1.0));
    let p = o.to_affine() * kurbo::Point::new(1.0, 0.0);
    // (1,0) -> scale (2,0) -> rotate (0,2) -> translate (5,3).
    assert!(approx(p.x, 5.0));
    assert!(approx(p.y, 3.0));
}

#[test]
fn serde_uses_field_names() {
    let o = Orientation::new(Vec2::new(1.0, 2.0), 45.0, Vec2::new(1.0, 1.0));
    let json = serde_json::to_value(o).unwrap();
    assert_eq!(json["rotation"], 45.0);
    assert_eq!(json["position"]["x"], 1.0);
    let back: Orientation = serde_json::from_value(json).unwrap();
    assert_eq!(back, o);
}

#[test]
fn from_affine_recovers_the_placement() {
    let o = Orientation::new(Vec2::new(-3.0, 7.5), 120.0, Vec2::new(2.0, 0.5));
    let back = Orientation::from_affine(o.to_affine());
    assert!(approx(back.position.x, -3.0) && approx(back.position.y, 7.5));
    assert!(approx(back.rotation, 120.0));
    assert!(approx(back.scale.x, 2.0) && approx(back.scale.y, 0.5));

    // A flipped y axis survives as a negative y scale.
    let flipped = Orientation::new(Vec2::ZERO, -45.0, Vec2::new(1.0, -3.0));
    let back = Orientation::from_affine(flipped.to_affine());
    assert!(approx(back.rotation, -45.0));
    assert!(approx(back.scale.x, 1.0) && approx(back.scale.y, -3.0));

    assert_eq!(Orientation::from_affine(Affine::IDENTITY), Orientation::default());
}
