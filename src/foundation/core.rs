use std::ops::{Add, Mul, Sub};

pub use kurbo::{Affine, Vec2};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Blend from `a` (`t = 0`) to `b` (`t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Vector-like value a spline can pass through.
///
/// Curves only need copy, add/subtract, scaling by a scalar, linear interpolation
/// and a dot product; the Hermite basis is evaluated as a linear combination so it
/// applies component-wise for free.
pub trait CurvePoint:
    Lerp + Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self>
{
    /// Dot product with `other`.
    fn dot(self, other: Self) -> f64;
}

impl CurvePoint for f64 {
    fn dot(self, other: Self) -> f64 {
        self * other
    }
}

impl CurvePoint for Vec2 {
    fn dot(self, other: Self) -> f64 {
        Vec2::dot(self, other)
    }
}

/// Component-wise product, used for relative scaling.
pub(crate) fn mul_componentwise(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x * b.x, a.y * b.y)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
