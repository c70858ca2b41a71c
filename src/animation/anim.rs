use crate::animation::Animation;
use crate::animation::builder::KeyframeAnimationBuilder;
use crate::animation::keyframe::Keyframe;
use crate::animation::orientation::Orientation;
use crate::curve::Curve;
use crate::curve::spline::SplineCurve;
use crate::curve::wrap::{IndexWrapMode, TimeWrapMode};
use crate::foundation::error::KeysplineResult;

/// Animation through a fixed list of keyframes, produced by [`KeyframeAnimationBuilder`].
///
/// Only the wrap policies can change after construction.
#[derive(Debug)]
pub struct KeyframeAnimation {
    pub(crate) duration: f64,
    pub(crate) curve: SplineCurve<Keyframe>,
}

impl KeyframeAnimation {
    pub fn builder() -> KeyframeAnimationBuilder {
        KeyframeAnimationBuilder::new()
    }

    /// Seconds in one pass, closing span included for circular animations.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Frozen keyframes; durations are fractions of [`KeyframeAnimation::duration`].
    pub fn keyframes(&self) -> &[Keyframe] {
        self.curve.points()
    }

    /// Orientation `seconds` after the animation started.
    pub fn sample(&mut self, seconds: f64) -> KeysplineResult<Orientation> {
        self.sample_normalized(seconds / self.duration)
    }

    fn sample_normalized(&mut self, t: f64) -> KeysplineResult<Orientation> {
        Ok(self.curve.sample(t)?.orientation)
    }

    pub fn index_wrap(&self) -> IndexWrapMode {
        self.curve.index_wrap()
    }

    pub fn time_wrap(&self) -> TimeWrapMode {
        self.curve.time_wrap()
    }
}

impl Animation for KeyframeAnimation {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn sample(&mut self, seconds: f64) -> KeysplineResult<Orientation> {
        KeyframeAnimation::sample(self, seconds)
    }

    fn set_index_wrap(&mut self, mode: IndexWrapMode) {
        self.curve.set_index_wrap(mode);
    }

    fn set_time_wrap(&mut self, mode: TimeWrapMode) {
        self.curve.set_time_wrap(mode);
    }
}

/// Samples over the normalized parameter, `t = 1` being one full pass.
impl Curve<Orientation> for KeyframeAnimation {
    fn sample(&mut self, t: f64) -> KeysplineResult<Orientation> {
        self.sample_normalized(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
