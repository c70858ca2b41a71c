use std::sync::Arc;

use crate::animation::orientation::Orientation;
use crate::curve::interp::{Interpolation, InterpolationKind};
use crate::curve::stream::{AdaptedPointStream, PointStream};
use crate::foundation::core::Vec2;
use crate::foundation::math::degree_lerp;

/// Orientation frozen by the builder, plus the timing and strategy of the span it starts.
#[derive(Clone, Debug)]
pub struct Keyframe {
    pub orientation: Orientation,
    /// Time to the next keyframe. Stored as a fraction of the whole animation once built;
    /// the final keyframe holds 0, or the closing span when the animation is circular.
    pub duration: f64,
    /// Strategy for position and scale over the span starting here.
    pub interpolation: Arc<dyn Interpolation<Vec2>>,
}

impl Keyframe {
    pub fn new(orientation: Orientation, duration: f64) -> Self {
        Self {
            orientation,
            duration,
            interpolation: InterpolationKind::default().strategy(),
        }
    }
}

impl Default for Keyframe {
    fn default() -> Self {
        Self::new(Orientation::default(), 0.0)
    }
}

/// Interpolates whole keyframes.
///
/// Position and scale each go through a projection of the keyframe stream using the
/// strategy of the span's first keyframe. Rotation takes the shorter arc between the
/// current and next keyframe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyframeInterpolation;

impl Interpolation<Keyframe> for KeyframeInterpolation {
    fn interpolate(&self, t: f64, points: &mut dyn PointStream<Keyframe>) -> Keyframe {
        let current = points.current();
        let next_rotation = points.next().orientation.rotation;
        let strategy = &current.interpolation;

        let mut positions = AdaptedPointStream::new(&mut *points, |k: Keyframe| {
            k.orientation.position
        });
        let position = strategy.interpolate(t, &mut positions);

        let mut scales =
            AdaptedPointStream::new(&mut *points, |k: Keyframe| k.orientation.scale);
        let scale = strategy.interpolate(t, &mut scales);

        Keyframe {
            orientation: Orientation {
                position,
                rotation: degree_lerp(current.orientation.rotation, next_rotation, t),
                scale,
            },
            duration: current.duration,
            interpolation: Arc::clone(&current.interpolation),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframe.rs"]
mod tests;
