use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::curve::wrap::IndexWrapMode;
use crate::foundation::error::{KeysplineError, KeysplineResult};

/// Relative-indexable view over a logically infinite sequence of points.
///
/// Implementations must make [`PointStream::get_absolute`] total over every `i32`,
/// which lets interpolation strategies look one point back and two ahead without
/// bounds checks.
pub trait PointStream<P> {
    /// Point at absolute `index`, with out-of-range indices resolved by the stream.
    fn get_absolute(&self, index: i32) -> P;

    /// Position of the read head.
    fn index(&self) -> i32;

    /// Move the read head to `index`.
    fn seek(&mut self, index: i32);

    /// Point at `offset` from the read head.
    fn get(&self, offset: i32) -> P {
        self.get_absolute(self.index().saturating_add(offset))
    }

    /// Point under the read head.
    fn current(&self) -> P {
        self.get(0)
    }

    /// Point just before the read head.
    fn previous(&self) -> P {
        self.get(-1)
    }

    /// Point just after the read head.
    fn next(&self) -> P {
        self.get(1)
    }
}

impl<P, S> PointStream<P> for &mut S
where
    S: PointStream<P> + ?Sized,
{
    fn get_absolute(&self, index: i32) -> P {
        (**self).get_absolute(index)
    }

    fn index(&self) -> i32 {
        (**self).index()
    }

    fn seek(&mut self, index: i32) {
        (**self).seek(index);
    }
}

/// Point stream backed by a fixed, non-empty array.
#[derive(Clone, Debug)]
pub struct ArrayPointStream<P> {
    points: Vec<P>,
    wrap: IndexWrapMode,
    index: i32,
}

impl<P> ArrayPointStream<P> {
    /// Create a stream over `points`, resolving out-of-range indices with `wrap`.
    pub fn new(points: Vec<P>, wrap: IndexWrapMode) -> KeysplineResult<Self> {
        if points.is_empty() {
            return Err(KeysplineError::validation(
                "point stream requires at least one point",
            ));
        }
        Ok(Self {
            points,
            wrap,
            index: 0,
        })
    }

    /// Number of backing points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; construction rejects empty arrays.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Backing points in order.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Strategy used for out-of-range indices.
    pub fn wrap_mode(&self) -> IndexWrapMode {
        self.wrap
    }

    /// Replace the strategy used for out-of-range indices.
    pub fn set_wrap_mode(&mut self, wrap: IndexWrapMode) {
        self.wrap = wrap;
    }
}

impl<P: Clone> PointStream<P> for ArrayPointStream<P> {
    fn get_absolute(&self, index: i32) -> P {
        self.points[self.wrap.handle(index, self.points.len())].clone()
    }

    fn index(&self) -> i32 {
        self.index
    }

    fn seek(&mut self, index: i32) {
        self.index = index;
    }
}

/// Point stream that converts the points of another stream on the fly.
///
/// Keeps its read head aligned with the inner stream: it starts wherever the inner
/// head is and every `seek` is forwarded.
pub struct AdaptedPointStream<A, S, F> {
    inner: S,
    convert: F,
    index: i32,
    _source: PhantomData<fn(A)>,
}

impl<A, S, F> AdaptedPointStream<A, S, F>
where
    S: PointStream<A>,
{
    /// Adapt `inner` through `convert`.
    pub fn new<B>(inner: S, convert: F) -> Self
    where
        F: Fn(A) -> B,
    {
        let index = inner.index();
        Self {
            inner,
            convert,
            index,
            _source: PhantomData,
        }
    }

    /// Give back the inner stream.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<A, B, S, F> PointStream<B> for AdaptedPointStream<A, S, F>
where
    S: PointStream<A>,
    F: Fn(A) -> B,
{
    fn get_absolute(&self, index: i32) -> B {
        (self.convert)(self.inner.get_absolute(index))
    }

    fn index(&self) -> i32 {
        self.index
    }

    fn seek(&mut self, index: i32) {
        self.index = index;
        self.inner.seek(index);
    }
}

impl<A, S: fmt::Debug, F> fmt::Debug for AdaptedPointStream<A, S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdaptedPointStream")
            .field("inner", &self.inner)
            .field("convert", &type_name::<F>())
            .field("index", &self.index)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/stream.rs"]
mod tests;
