use crate::foundation::core::CurvePoint;
use crate::foundation::error::{KeysplineError, KeysplineResult};

/// Cubic Hermite interpolation.
///
/// `P(t) = (2t^3-3t^2+1)P0 + (t^3-2t^2+t)T0 + (-2t^3+3t^2)P1 + (t^3-t^2)T1`
///
/// `P(0) = p0` and `P(1) = p1`; `t0` and `t1` are the tangents at each end.
pub fn hermite<P: CurvePoint>(p0: P, t0: P, p1: P, t1: P, t: f64) -> P {
    let t2 = t * t;
    let t3 = t2 * t;
    p0 * (2.0 * t3 - 3.0 * t2 + 1.0)
        + t0 * (t3 - 2.0 * t2 + t)
        + p1 * (-2.0 * t3 + 3.0 * t2)
        + t1 * (t3 - t2)
}

/// Bezier interpolation over one or more control points (De Casteljau).
///
/// `t = 0` returns the first point and `t = 1` the last.
pub fn bezier<P: CurvePoint>(t: f64, points: &[P]) -> KeysplineResult<P> {
    let Some((&first, rest)) = points.split_first() else {
        return Err(KeysplineError::validation(
            "bezier requires at least one control point",
        ));
    };
    if rest.is_empty() {
        return Ok(first);
    }

    let mut work = points.to_vec();
    for level in (1..work.len()).rev() {
        for i in 0..level {
            work[i] = P::lerp(&work[i], &work[i + 1], t);
        }
    }
    Ok(work[0])
}

/// Lerp which passes through `start` at `t = a` and `end` at `t = b`.
pub fn lerp_between<P: CurvePoint>(a: f64, start: P, b: f64, end: P, t: f64) -> P {
    P::lerp(&start, &end, (t - a) / (b - a))
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_angle(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Interpolate between two angles in degrees along the shorter arc.
///
/// The result is always in `[0, 360)`.
pub fn degree_lerp(from: f64, to: f64, t: f64) -> f64 {
    let mut a = wrap_angle(from);
    let mut b = wrap_angle(to);
    let mut t = t;
    if a > b {
        std::mem::swap(&mut a, &mut b);
        t = 1.0 - t;
    }
    if b - a > 180.0 {
        b -= 360.0;
    }
    wrap_angle(a + (b - a) * t)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
