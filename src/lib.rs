//! Keyframe spline animation for 2D transforms.
//!
//! An animation is authored as an ordered list of keyframes, each an [`Orientation`]
//! (position, rotation in degrees, non-uniform scale) plus the time to the next one.
//! [`KeyframeAnimationBuilder`] resolves the durations and freezes the keyframes into a
//! [`KeyframeAnimation`], which samples a piecewise [`SplineCurve`] at any elapsed time.
//!
//! The curve layer is generic over any [`CurvePoint`] and usable on its own:
//!
//! - [`IndexWrapMode`] / [`TimeWrapMode`] resolve out-of-range indices and times
//! - [`PointStream`] gives interpolation strategies relative access to neighbours
//! - [`Interpolation`] strategies ([`Straight`], [`Smooth`]) fill in each span
//! - [`TimingHandler`]s map a normalized time onto a span
//!
//! [`Player`] drives an animation from a tick loop and reports playback transitions.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod curve;

pub use crate::foundation::core::{Affine, CurvePoint, Lerp, Vec2};
pub use crate::foundation::error::{KeysplineError, KeysplineResult};
pub use crate::foundation::math::{bezier, degree_lerp, hermite, lerp_between, wrap_angle};

pub use crate::curve::Curve;
pub use crate::curve::interp::{Interpolation, InterpolationKind, Smooth, Straight};
pub use crate::curve::spline::SplineCurve;
pub use crate::curve::stream::{AdaptedPointStream, ArrayPointStream, PointStream};
pub use crate::curve::timing::{ArbitraryTiming, SpanTime, TimingHandler, UniformTiming};
pub use crate::curve::wrap::{IndexWrapMode, TimeWrapMode};

pub use crate::animation::Animation;
pub use crate::animation::anim::KeyframeAnimation;
pub use crate::animation::builder::KeyframeAnimationBuilder;
pub use crate::animation::keyframe::{Keyframe, KeyframeInterpolation};
pub use crate::animation::orientation::Orientation;
pub use crate::animation::playback::{
    AnimationEvent, AnimationListener, DispatchListener, LoopCount, Player,
};
