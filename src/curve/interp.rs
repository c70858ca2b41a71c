use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::curve::stream::PointStream;
use crate::foundation::core::{CurvePoint, Lerp, Vec2};
use crate::foundation::math::hermite;

/// Strategy computing a point between the stream's current and next points.
///
/// `t = 0` must yield `points.current()` and `t = 1` must yield `points.next()`.
/// Strategies may read any offset from the stream but must leave its read head where
/// they found it.
pub trait Interpolation<P>: fmt::Debug + Send + Sync {
    /// Interpolate the span starting at the read head.
    fn interpolate(&self, t: f64, points: &mut dyn PointStream<P>) -> P;
}

impl<P, T> Interpolation<P> for Arc<T>
where
    T: Interpolation<P> + ?Sized,
{
    fn interpolate(&self, t: f64, points: &mut dyn PointStream<P>) -> P {
        (**self).interpolate(t, points)
    }
}

/// Straight-line interpolation between consecutive points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Straight;

impl<P: Lerp> Interpolation<P> for Straight {
    fn interpolate(&self, t: f64, points: &mut dyn PointStream<P>) -> P {
        P::lerp(&points.current(), &points.next(), t)
    }
}

/// Catmull-Rom style cubic Hermite through the current and next points.
///
/// Tangents come from the neighbours: `(P2 - P0) / 2` at the start and
/// `(P3 - P1) / 2` at the end, so the stream must resolve one point before and two
/// after the current one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Smooth;

impl<P: CurvePoint> Interpolation<P> for Smooth {
    fn interpolate(&self, t: f64, points: &mut dyn PointStream<P>) -> P {
        let p0 = points.get(-1);
        let p1 = points.get(0);
        let p2 = points.get(1);
        let p3 = points.get(2);
        hermite(p1, (p2 - p0) * 0.5, p2, (p3 - p1) * 0.5, t)
    }
}

/// Built-in interpolation strategies, selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationKind {
    /// [`Straight`].
    Straight,
    /// [`Smooth`].
    #[default]
    Smooth,
}

static STRAIGHT: LazyLock<Arc<dyn Interpolation<Vec2>>> = LazyLock::new(|| Arc::new(Straight));
static SMOOTH: LazyLock<Arc<dyn Interpolation<Vec2>>> = LazyLock::new(|| Arc::new(Smooth));

impl InterpolationKind {
    /// Shared strategy instance for 2D points.
    pub fn strategy(self) -> Arc<dyn Interpolation<Vec2>> {
        match self {
            Self::Straight => Arc::clone(&STRAIGHT),
            Self::Smooth => Arc::clone(&SMOOTH),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/interp.rs"]
mod tests;
