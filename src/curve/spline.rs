use crate::curve::Curve;
use crate::curve::interp::Interpolation;
use crate::curve::stream::{ArrayPointStream, PointStream};
use crate::curve::timing::{ArbitraryTiming, TimingHandler, UniformTiming};
use crate::curve::wrap::{IndexWrapMode, TimeWrapMode};
use crate::foundation::error::{KeysplineError, KeysplineResult};

/// Piecewise parametric curve through a list of points.
///
/// Sampling wraps the parameter with the time-wrap policy, asks the timing handler
/// which span it falls into, moves the point stream's read head there and lets the
/// interpolation strategy produce the point. The read head is the only state touched
/// and it is overwritten on every call, so samples are independent of call order.
#[derive(Debug)]
pub struct SplineCurve<P> {
    points: ArrayPointStream<P>,
    interpolation: Box<dyn Interpolation<P>>,
    timing: Box<dyn TimingHandler>,
    time_wrap: TimeWrapMode,
}

impl<P: Clone> SplineCurve<P> {
    /// Spline passing through point `i` at time `i / (n - 1)`.
    pub fn uniform(
        interpolation: impl Interpolation<P> + 'static,
        index_wrap: IndexWrapMode,
        points: Vec<P>,
    ) -> KeysplineResult<Self> {
        let timing = UniformTiming::new(points.len());
        Self::with_timing(interpolation, index_wrap, points, timing)
    }

    /// Spline where moving from `points[i]` to `points[i + 1]` takes `durations[i]`.
    ///
    /// Durations are normalized to sum to 1 when they do not already.
    #[tracing::instrument(skip_all, fields(points = points.len(), spans = durations.len()))]
    pub fn with_durations(
        interpolation: impl Interpolation<P> + 'static,
        index_wrap: IndexWrapMode,
        points: Vec<P>,
        durations: Vec<f64>,
    ) -> KeysplineResult<Self> {
        let sum: f64 = durations.iter().sum();
        let durations = if sum == 1.0 {
            durations
        } else {
            if sum.is_nan() || sum <= 0.0 {
                return Err(KeysplineError::validation(
                    "spline durations must sum to a positive number",
                ));
            }
            tracing::debug!(sum, "normalizing spline durations");
            durations.into_iter().map(|d| d / sum).collect()
        };
        let timing = ArbitraryTiming::new(durations)?;
        Self::with_timing(interpolation, index_wrap, points, timing)
    }

    /// Spline driven by a caller-supplied timing handler.
    pub fn with_timing(
        interpolation: impl Interpolation<P> + 'static,
        index_wrap: IndexWrapMode,
        points: Vec<P>,
        timing: impl TimingHandler + 'static,
    ) -> KeysplineResult<Self> {
        Ok(Self {
            points: ArrayPointStream::new(points, index_wrap)?,
            interpolation: Box::new(interpolation),
            timing: Box::new(timing),
            time_wrap: TimeWrapMode::default(),
        })
    }

    /// Sample the curve at parameter `t`, nominally in `[0, 1]`.
    ///
    /// Fails with `Validation` when `t` is NaN, or infinite under a wrapping policy.
    pub fn sample(&mut self, t: f64) -> KeysplineResult<P> {
        let t = self.time_wrap.handle(t, 1.0);
        // Wrap maps infinities to NaN as well.
        if t.is_nan() {
            return Err(KeysplineError::validation("curve time must not be NaN"));
        }
        let span = self.timing.transform_time(t)?;
        self.points.seek(span.index);
        Ok(self.interpolation.interpolate(span.time, &mut self.points))
    }
}

impl<P> SplineCurve<P> {
    /// Control points in order.
    pub fn points(&self) -> &[P] {
        self.points.points()
    }

    /// Replace the interpolation strategy.
    pub fn set_interpolation(&mut self, interpolation: impl Interpolation<P> + 'static) {
        self.interpolation = Box::new(interpolation);
    }

    /// Policy for point indices outside the array.
    pub fn index_wrap(&self) -> IndexWrapMode {
        self.points.wrap_mode()
    }

    /// Replace the policy for point indices outside the array.
    pub fn set_index_wrap(&mut self, mode: IndexWrapMode) {
        self.points.set_wrap_mode(mode);
    }

    /// Policy for parameters outside `[0, 1]`.
    pub fn time_wrap(&self) -> TimeWrapMode {
        self.time_wrap
    }

    /// Replace the policy for parameters outside `[0, 1]`.
    pub fn set_time_wrap(&mut self, mode: TimeWrapMode) {
        self.time_wrap = mode;
    }
}

impl<P: Clone> Curve<P> for SplineCurve<P> {
    fn sample(&mut self, t: f64) -> KeysplineResult<P> {
        SplineCurve::sample(self, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/spline.rs"]
mod tests;
