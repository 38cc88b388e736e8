//! Coordinate maps between points of one curve

use crate::ec::{AffinePoint, Curve, Field};
use crate::error::Result;

/// A map sending points of `C` to points of `C`.
pub trait PointMap<C: Curve> {
    /// # Errors
    /// `InvalidPoint` when the image is not a valid point of the curve.
    fn map(&self, p: &AffinePoint<C>) -> Result<AffinePoint<C>>;
}

/// `(x, y) ↦ (s·x, −y)`; the identity maps to itself.
///
/// With `s` a non-trivial cube root of unity on an `a = 0` curve this is
/// the negated GLV endomorphism.
#[derive(Clone, Copy, Debug)]
pub struct ScaleXNegateYPointMap<C: Curve> {
    scale: C::Field,
}

impl<C: Curve> ScaleXNegateYPointMap<C> {
    pub fn new(scale: C::Field) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> &C::Field {
        &self.scale
    }
}

impl<C: Curve> PointMap<C> for ScaleXNegateYPointMap<C> {
    fn map(&self, p: &AffinePoint<C>) -> Result<AffinePoint<C>> {
        if bool::from(p.is_identity()) {
            return Ok(*p);
        }
        let image = AffinePoint::from_coordinates_unchecked(p.x.mul(&self.scale), p.y.negate());
        image.validate()?;
        Ok(image)
    }
}
