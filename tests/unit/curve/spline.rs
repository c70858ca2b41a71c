use super::*;
use crate::curve::interp::{InterpolationKind, Smooth, Straight};
use crate::curve::timing::SpanTime;
use crate::foundation::core::Vec2;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn approx_v(a: Vec2, b: Vec2) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y)
}

fn points() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
    ]
}

#[test]
fn empty_points_are_rejected() {
    assert!(SplineCurve::<f64>::uniform(Straight, IndexWrapMode::Clamp, vec![]).is_err());
}

#[test]
fn endpoints_are_hit_under_clamp_for_both_timings() {
    let first = points()[0];
    let last = points()[3];

    let mut uniform = SplineCurve::uniform(Smooth, IndexWrapMode::Clamp, points()).unwrap();
    uniform.set_time_wrap(TimeWrapMode::Clamp);
    assert!(approx_v(uniform.sample(0.0).unwrap(), first));
    assert!(approx_v(uniform.sample(1.0).unwrap(), last));

    let mut arbitrary = SplineCurve::with_durations(
        Smooth,
        IndexWrapMode::Clamp,
        points(),
        vec![1.0, 2.0, 3.0],
    )
    .unwrap();
    arbitrary.set_time_wrap(TimeWrapMode::Clamp);
    assert!(approx_v(arbitrary.sample(0.0).unwrap(), first));
    assert!(approx_v(arbitrary.sample(1.0).unwrap(), last));
}

#[test]
fn uniform_straight_passes_through_each_point() {
    let mut curve = SplineCurve::uniform(Straight, IndexWrapMode::Clamp, points()).unwrap();
    curve.set_time_wrap(TimeWrapMode::Clamp);
    for (i, p) in points().into_iter().enumerate() {
        let t = i as f64 / 3.0;
        assert!(approx_v(curve.sample(t).unwrap(), p), "t={t}");
    }
    assert!(approx_v(curve.sample(0.5).unwrap(), Vec2::new(10.0, 5.0)));
}

#[test]
fn durations_are_normalized() {
    let mut curve = SplineCurve::with_durations(
        Straight,
        IndexWrapMode::Clamp,
        vec![0.0, 10.0, 20.0],
        vec![1.0, 3.0],
    )
    .unwrap();
    // First span covers [0, 0.25], second [0.25, 1].
    assert!(approx(curve.sample(0.125).unwrap(), 5.0));
    assert!(approx(curve.sample(0.625).unwrap(), 15.0));
}

#[test]
fn non_positive_duration_sums_are_rejected() {
    for durations in [vec![0.0, 0.0], vec![-1.0, 0.5], vec![]] {
        assert!(
            SplineCurve::with_durations(Straight, IndexWrapMode::Clamp, vec![0.0, 1.0], durations)
                .is_err()
        );
    }
}

#[test]
fn default_time_wrap_loops_the_parameter() {
    let mut curve = SplineCurve::uniform(Straight, IndexWrapMode::Clamp, vec![0.0, 10.0]).unwrap();
    assert_eq!(curve.time_wrap(), TimeWrapMode::Wrap);
    assert!(approx(curve.sample(1.25).unwrap(), 2.5));
    assert!(approx(curve.sample(-0.25).unwrap(), 7.5));

    curve.set_time_wrap(TimeWrapMode::Reflect);
    assert!(approx(curve.sample(1.25).unwrap(), 7.5));
}

#[test]
fn sampling_is_order_independent() {
    let mut curve = SplineCurve::uniform(Smooth, IndexWrapMode::Clamp, points()).unwrap();
    let ts = [0.9, 0.1, 0.5, 0.33, 0.0, 0.75];
    let forward: Vec<Vec2> = ts.iter().map(|&t| curve.sample(t).unwrap()).collect();
    let backward: Vec<Vec2> = ts.iter().rev().map(|&t| curve.sample(t).unwrap()).collect();
    for (a, b) in forward.iter().zip(backward.iter().rev()) {
        assert_eq!(a, b);
    }
}

#[test]
fn strategies_and_wraps_swap_live() {
    let mut curve = SplineCurve::uniform(Straight, IndexWrapMode::Clamp, points()).unwrap();
    let straight = curve.sample(0.5).unwrap();
    curve.set_interpolation(InterpolationKind::Smooth.strategy());
    let smooth = curve.sample(0.5).unwrap();
    // The middle span of a square bulges outward under smoothing.
    assert!(smooth.x > straight.x);

    curve.set_index_wrap(IndexWrapMode::Wrap);
    assert_eq!(curve.index_wrap(), IndexWrapMode::Wrap);
    assert_eq!(curve.points().len(), 4);
}

#[test]
fn single_point_curve_is_constant() {
    let mut curve = SplineCurve::uniform(Smooth, IndexWrapMode::Clamp, vec![3.0]).unwrap();
    assert!(approx(curve.sample(0.0).unwrap(), 3.0));
    assert!(approx(curve.sample(0.6).unwrap(), 3.0));
}

#[derive(Debug)]
struct FirstHalfOnly;

impl TimingHandler for FirstHalfOnly {
    fn transform_time(&self, t: f64) -> KeysplineResult<SpanTime> {
        Ok(SpanTime::new(0, t / 2.0))
    }
}

#[test]
fn custom_timing_handlers_are_honoured() {
    let mut curve =
        SplineCurve::with_timing(Straight, IndexWrapMode::Clamp, vec![0.0, 8.0], FirstHalfOnly)
            .unwrap();
    assert!(approx(curve.sample(0.5).unwrap(), 2.0));
    assert!(approx(Curve::sample(&mut curve, 0.5).unwrap(), 2.0));
}

#[test]
fn nan_time_is_rejected_for_both_timings() {
    let uniform = SplineCurve::uniform(Straight, IndexWrapMode::Clamp, vec![0.0, 10.0]).unwrap();
    let arbitrary = SplineCurve::with_durations(
        Straight,
        IndexWrapMode::Clamp,
        vec![0.0, 10.0, 20.0],
        vec![1.0, 3.0],
    )
    .unwrap();

    for mut curve in [uniform, arbitrary] {
        for mode in [TimeWrapMode::Clamp, TimeWrapMode::Wrap, TimeWrapMode::Reflect] {
            curve.set_time_wrap(mode);
            assert!(matches!(
                curve.sample(f64::NAN),
                Err(KeysplineError::Validation(_))
            ));
        }
        curve.set_time_wrap(TimeWrapMode::Wrap);
        assert!(matches!(
            curve.sample(f64::INFINITY),
            Err(KeysplineError::Validation(_))
        ));
        // Clamp still pins infinities to the ends.
        curve.set_time_wrap(TimeWrapMode::Clamp);
        assert!(approx(curve.sample(f64::NEG_INFINITY).unwrap(), 0.0));
    }
}
