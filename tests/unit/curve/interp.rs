use super::*;
use crate::curve::stream::ArrayPointStream;
use crate::curve::wrap::IndexWrapMode;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn at<P: Clone, I: Interpolation<P>>(strategy: &I, t: f64, points: &mut ArrayPointStream<P>) -> P {
    strategy.interpolate(t, points)
}

fn scalars(wrap: IndexWrapMode) -> ArrayPointStream<f64> {
    ArrayPointStream::new(vec![0.0, 1.0, 4.0, 9.0, 16.0], wrap).unwrap()
}

#[test]
fn straight_hits_current_and_next() {
    let mut s = scalars(IndexWrapMode::Clamp);
    s.seek(1);
    assert_eq!(at(&Straight, 0.0, &mut s), 1.0);
    assert_eq!(at(&Straight, 1.0, &mut s), 4.0);
    assert_eq!(at(&Straight, 0.5, &mut s), 2.5);
    assert_eq!(s.index(), 1);
}

#[test]
fn smooth_hits_current_and_next() {
    let mut s = scalars(IndexWrapMode::Clamp);
    for head in 0..5 {
        s.seek(head);
        let current = s.current();
        let next = s.next();
        assert!(approx(at(&Smooth, 0.0, &mut s), current));
        assert!(approx(at(&Smooth, 1.0, &mut s), next));
    }
}

#[test]
fn smooth_reproduces_catmull_rom_midpoint() {
    let mut s = scalars(IndexWrapMode::Clamp);
    s.seek(1);
    // P0..P3 = 0, 1, 4, 9; tangents 2 and 4.
    // h(0.5) = 0.5*1 + 0.125*2 + 0.5*4 - 0.125*4 = 2.25
    assert!(approx(at(&Smooth, 0.5, &mut s), 2.25));
}

#[test]
fn smooth_on_a_line_stays_on_the_line() {
    let mut s = ArrayPointStream::new(
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(3.0, 3.0),
        ],
        IndexWrapMode::Clamp,
    )
    .unwrap();
    s.seek(1);
    let p = at(&Smooth, 0.3, &mut s);
    assert!(approx(p.x, p.y));
    assert!(approx(p.x, 1.3));
}

#[test]
fn short_arrays_resolve_through_wrap_mode() {
    let mut s = ArrayPointStream::new(vec![2.0, 6.0], IndexWrapMode::Clamp).unwrap();
    // With clamp, P0 = P1 and P3 = P2: both tangents are (6-2)/2.
    let v = at(&Smooth, 0.5, &mut s);
    assert!(approx(v, 4.0));

    s.set_wrap_mode(IndexWrapMode::Wrap);
    // With wrap, P0 = 6 and P3 = 2, so both tangents vanish.
    let v = at(&Smooth, 0.25, &mut s);
    assert!(approx(v, hermite(2.0, 0.0, 6.0, 0.0, 0.25)));
}

#[test]
fn kinds_map_to_shared_strategies() {
    let mut s = ArrayPointStream::new(
        vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)],
        IndexWrapMode::Clamp,
    )
    .unwrap();
    let straight = InterpolationKind::Straight.strategy();
    assert_eq!((*straight).interpolate(0.5, &mut s), Vec2::new(5.0, 0.0));
    assert!(Arc::ptr_eq(
        &InterpolationKind::Smooth.strategy(),
        &InterpolationKind::Smooth.strategy()
    ));
    assert_eq!(InterpolationKind::default(), InterpolationKind::Smooth);
}
