pub(crate) mod interp;
pub(crate) mod spline;
pub(crate) mod stream;
pub(crate) mod timing;
pub(crate) mod wrap;

use crate::foundation::error::KeysplineResult;

/// A parametric curve: `t = 0` is its start and `t = 1` its end.
pub trait Curve<P> {
    /// Sample the curve at parameter `t`.
    fn sample(&mut self, t: f64) -> KeysplineResult<P>;
}
