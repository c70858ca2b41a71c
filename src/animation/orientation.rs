use crate::foundation::core::{Affine, Lerp, Vec2};

/// 2D placement of an animated object: position, rotation in degrees, non-uniform scale.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Orientation {
    pub position: Vec2,
    /// Degrees, counter-clockwise in a y-up frame.
    pub rotation: f64,
    pub scale: Vec2,
}

impl Orientation {
    pub fn new(position: Vec2, rotation: f64, scale: Vec2) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// `translate * rotate * scale`, so scale applies first and translation last.
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.position)
            * Affine::rotate(self.rotation.to_radians())
            * Affine::scale_non_uniform(self.scale.x, self.scale.y)
    }

    /// Decompose a `translate * rotate * scale` affine back into an orientation.
    ///
    /// The x scale comes back non-negative, with a mirrored x axis folded into the
    /// rotation. A shear has no counterpart and is dropped.
    pub fn from_affine(affine: Affine) -> Self {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        let sx = a.hypot(b);
        let sy = if sx == 0.0 {
            c.hypot(d)
        } else {
            (a * d - b * c) / sx
        };
        Self {
            position: Vec2::new(e, f),
            rotation: b.atan2(a).to_degrees(),
            scale: Vec2::new(sx, sy),
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl Lerp for Orientation {
    /// Component-wise blend; rotation is blended numerically with no angular wrap.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            position: <Vec2 as Lerp>::lerp(&a.position, &b.position, t),
            rotation: <f64 as Lerp>::lerp(&a.rotation, &b.rotation, t),
            scale: <Vec2 as Lerp>::lerp(&a.scale, &b.scale, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/orientation.rs"]
mod tests;
