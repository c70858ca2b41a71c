use std::sync::Arc;

use crate::animation::anim::KeyframeAnimation;
use crate::animation::keyframe::{Keyframe, KeyframeInterpolation};
use crate::animation::orientation::Orientation;
use crate::curve::interp::{Interpolation, InterpolationKind};
use crate::curve::spline::SplineCurve;
use crate::curve::wrap::IndexWrapMode;
use crate::foundation::core::{Vec2, mul_componentwise};
use crate::foundation::error::{KeysplineError, KeysplineResult};

/// Accumulates keyframes and resolves their durations into a [`KeyframeAnimation`].
///
/// Edits apply to an in-progress keyframe. [`add_keyframe`](Self::add_keyframe) freezes
/// it and starts the next one from the same orientation and strategy, so consecutive
/// keyframes only need to state what changes.
///
/// ```
/// use keyspline::{InterpolationKind, KeyframeAnimation, Vec2};
///
/// let mut anim = KeyframeAnimation::builder()
///     .set_interpolation(InterpolationKind::Straight)
///     .add_keyframe(1.0)
///     .move_by(Vec2::new(10.0, 0.0))
///     .add_untimed_keyframe()
///     .build()
///     .unwrap();
/// assert_eq!(anim.duration(), 1.0);
/// assert_eq!(anim.sample(0.5).unwrap().position, Vec2::new(5.0, 0.0));
/// ```
#[derive(Debug, Default)]
pub struct KeyframeAnimationBuilder {
    keyframes: Vec<Keyframe>,
    building: Keyframe,
    total_duration: Option<f64>,
    circular: bool,
}

impl KeyframeAnimationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_position(mut self, position: Vec2) -> Self {
        self.building.orientation.position = position;
        self
    }

    pub fn move_by(mut self, translation: Vec2) -> Self {
        self.building.orientation.position += translation;
        self
    }

    /// Rotation in degrees.
    pub fn set_rotation(mut self, degrees: f64) -> Self {
        self.building.orientation.rotation = degrees;
        self
    }

    pub fn rotate_by(mut self, degrees: f64) -> Self {
        self.building.orientation.rotation += degrees;
        self
    }

    /// `(1, 1)` is unscaled.
    pub fn set_scale(mut self, scale: Vec2) -> Self {
        self.building.orientation.scale = scale;
        self
    }

    /// Multiply the current scale component-wise.
    pub fn scale_by(mut self, factor: Vec2) -> Self {
        let scale = &mut self.building.orientation.scale;
        *scale = mul_componentwise(*scale, factor);
        self
    }

    pub fn set_orientation(mut self, orientation: Orientation) -> Self {
        self.building.orientation = orientation;
        self
    }

    /// Built-in strategy for the spans starting at this and later keyframes.
    pub fn set_interpolation(self, kind: InterpolationKind) -> Self {
        self.set_interpolation_shared(kind.strategy())
    }

    /// Custom strategy for the spans starting at this and later keyframes.
    pub fn set_interpolation_strategy(
        self,
        strategy: impl Interpolation<Vec2> + 'static,
    ) -> Self {
        self.set_interpolation_shared(Arc::new(strategy))
    }

    fn set_interpolation_shared(mut self, strategy: Arc<dyn Interpolation<Vec2>>) -> Self {
        self.building.interpolation = strategy;
        self
    }

    /// Freeze the in-progress keyframe with `duration` seconds until the next one.
    ///
    /// A duration of 0 or less leaves the span to be filled in from
    /// [`set_total_duration`](Self::set_total_duration). The final keyframe's duration
    /// is ignored.
    pub fn add_keyframe(mut self, duration: f64) -> Self {
        let mut frozen = self.building.clone();
        frozen.duration = duration;
        self.keyframes.push(frozen);
        self.building.duration = 0.0;
        self
    }

    /// Freeze the in-progress keyframe with its duration left to be resolved.
    pub fn add_untimed_keyframe(self) -> Self {
        self.add_keyframe(0.0)
    }

    /// Request that one pass, excluding any closing span, lasts `seconds`.
    ///
    /// Must be positive; checked by [`build`](Self::build).
    pub fn set_total_duration(mut self, seconds: f64) -> Self {
        self.total_duration = Some(seconds);
        self
    }

    /// Close the loop with a span from the last keyframe back to the first.
    pub fn set_circular(mut self, circular: bool) -> Self {
        self.circular = circular;
        self
    }

    #[tracing::instrument(skip(self), fields(
        keyframes = self.keyframes.len(),
        total = ?self.total_duration,
        circular = self.circular,
    ))]
    pub fn build(self) -> KeysplineResult<KeyframeAnimation> {
        let Self {
            mut keyframes,
            total_duration,
            circular,
            ..
        } = self;

        if keyframes.is_empty() {
            return Err(KeysplineError::animation(
                "cannot build a keyframe animation without keyframes; add one with add_keyframe",
            ));
        }
        if let Some(total) = total_duration
            && (!total.is_finite() || total <= 0.0)
        {
            return Err(KeysplineError::animation(format!(
                "total animation duration must be a positive number (got {total})"
            )));
        }

        // A lone keyframe has no open span, so it ends up with a duration of 0 or 1/0.
        resolve_durations(&mut keyframes, total_duration)?;
        let last = keyframes.len() - 1;
        let open: f64 = keyframes[..last].iter().map(|k| k.duration).sum();
        let closing = if circular { 1.0 / open } else { 0.0 };
        keyframes[last].duration = closing;
        let duration = open + closing;
        if !duration.is_finite() || duration <= 0.0 {
            return Err(KeysplineError::animation(format!(
                "total duration of the animation must be positive (got {duration})"
            )));
        }

        let durations: Vec<f64> = keyframes
            .iter_mut()
            .map(|k| {
                k.duration /= duration;
                k.duration
            })
            .collect();
        tracing::debug!(duration, ?durations, "resolved keyframe durations");

        let index_wrap = if circular {
            IndexWrapMode::Wrap
        } else {
            IndexWrapMode::Clamp
        };
        let curve =
            SplineCurve::with_durations(KeyframeInterpolation, index_wrap, keyframes, durations)?;
        Ok(KeyframeAnimation { duration, curve })
    }
}

fn is_timed(duration: f64) -> bool {
    duration > 0.0
}

/// Fill in or rescale the durations of every keyframe but the last.
fn resolve_durations(keyframes: &mut [Keyframe], total: Option<f64>) -> KeysplineResult<()> {
    let count = keyframes.len();
    let spans = &mut keyframes[..count - 1];

    let Some(total) = total else {
        if let Some(i) = spans.iter().position(|k| !is_timed(k.duration)) {
            return Err(KeysplineError::animation(format!(
                "keyframe {i} has no positive duration and no total duration was set"
            )));
        }
        return Ok(());
    };

    let fixed: f64 = spans.iter().map(|k| k.duration).filter(|d| is_timed(*d)).sum();
    let timeless = spans.iter().filter(|k| !is_timed(k.duration)).count();

    if timeless == 0 {
        tracing::debug!(fixed, total, "rescaling keyframe durations");
        for k in spans.iter_mut() {
            k.duration *= total / fixed;
        }
    } else if total > fixed {
        let fill = (total - fixed) / timeless as f64;
        tracing::debug!(fixed, total, timeless, fill, "filling untimed keyframes");
        for k in spans.iter_mut().filter(|k| !is_timed(k.duration)) {
            k.duration = fill;
        }
    } else {
        // Timed spans already use up the total: give every untimed span an even share of
        // the total and squeeze the timed ones into what remains.
        let gap = total / (count - 1) as f64;
        let factor = (total - gap * timeless as f64) / fixed;
        tracing::debug!(fixed, total, timeless, gap, factor, "squeezing keyframe durations");
        for k in spans.iter_mut() {
            if is_timed(k.duration) {
                k.duration *= factor;
            } else {
                k.duration = gap;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/builder.rs"]
mod tests;
