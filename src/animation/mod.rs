pub(crate) mod anim;
pub(crate) mod builder;
pub(crate) mod keyframe;
pub(crate) mod orientation;
pub(crate) mod playback;

use std::fmt;

use crate::animation::orientation::Orientation;
use crate::curve::wrap::{IndexWrapMode, TimeWrapMode};
use crate::foundation::error::KeysplineResult;

/// Something that maps elapsed seconds to an [`Orientation`].
pub trait Animation: fmt::Debug + Send {
    /// Seconds in one pass.
    fn duration(&self) -> f64;

    /// Orientation `seconds` after the animation started.
    fn sample(&mut self, seconds: f64) -> KeysplineResult<Orientation>;

    fn set_index_wrap(&mut self, mode: IndexWrapMode);

    fn set_time_wrap(&mut self, mode: TimeWrapMode);
}
