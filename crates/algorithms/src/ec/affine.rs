//! Points in affine coordinates

use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::ec::{Curve, Field, ProjectivePoint};
use crate::error::{Error, Result};

/// A curve point in affine coordinates (x, y), or the point at infinity.
///
/// The coordinates of the identity are unspecified and never inspected.
#[derive(Clone, Copy)]
pub struct AffinePoint<C: Curve> {
    pub(crate) x: C::Field,
    pub(crate) y: C::Field,
    pub(crate) infinity: Choice,
}

impl<C: Curve> AffinePoint<C> {
    /// The point at infinity
    pub fn identity() -> Self {
        Self {
            x: C::Field::ZERO,
            y: C::Field::ZERO,
            infinity: Choice::from(1),
        }
    }

    /// The curve's base point G
    pub fn generator() -> Self {
        Self {
            x: C::GENERATOR.0,
            y: C::GENERATOR.1,
            infinity: Choice::from(0),
        }
    }

    /// Build a point from coordinates, checking the curve equation and the
    /// subgroup.
    pub fn from_coordinates(x: C::Field, y: C::Field) -> Result<Self> {
        let p = Self::from_coordinates_unchecked(x, y);
        p.validate()?;
        Ok(p)
    }

    pub(crate) fn from_coordinates_unchecked(x: C::Field, y: C::Field) -> Self {
        Self {
            x,
            y,
            infinity: Choice::from(0),
        }
    }

    pub fn x(&self) -> &C::Field {
        &self.x
    }

    pub fn y(&self) -> &C::Field {
        &self.y
    }

    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// `y² == x³ + a·x + b`; the identity passes.
    pub fn is_on_curve(&self) -> Choice {
        let lhs = self.y.square();
        let rhs = curve_rhs::<C>(&self.x);
        lhs.ct_eq(&rhs) | self.infinity
    }

    /// Reject points off the curve and, for curves with a cofactor, points
    /// outside the prime-order subgroup.
    pub fn validate(&self) -> Result<()> {
        if !bool::from(self.is_on_curve()) {
            return Err(Error::point(C::NAME, "point is not on the curve"));
        }
        if C::COFACTOR != 1 && !bool::from(self.to_projective().is_torsion_free()) {
            return Err(Error::point(C::NAME, "point is not in the prime-order subgroup"));
        }
        Ok(())
    }

    pub fn negate(&self) -> Self {
        Self {
            x: self.x,
            y: self.y.negate(),
            infinity: self.infinity,
        }
    }

    pub fn to_projective(&self) -> ProjectivePoint<C> {
        ProjectivePoint::from(*self)
    }

    /// Affine group law, one inversion per call.
    ///
    /// This is the reference formulation the Jacobian arithmetic must agree
    /// with; it branches on the special cases.
    pub fn add(&self, other: &Self) -> Self {
        if bool::from(self.infinity) {
            return *other;
        }
        if bool::from(other.infinity) {
            return *self;
        }
        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            }
            // P + (−P)
            return Self::identity();
        }
        let dx = other.x.sub(&self.x);
        let lambda = match dx.invert() {
            Ok(inv) => other.y.sub(&self.y).mul(&inv),
            Err(_) => return Self::identity(),
        };
        self.chord(&lambda, &other.x)
    }

    /// Affine doubling; a point with y = 0 doubles to the identity.
    pub fn double(&self) -> Self {
        if bool::from(self.infinity | self.y.is_zero()) {
            return Self::identity();
        }
        let xx = self.x.square();
        let num = xx.double().add(&xx).add(&C::A);
        let lambda = match self.y.double().invert() {
            Ok(inv) => num.mul(&inv),
            Err(_) => return Self::identity(),
        };
        self.chord(&lambda, &self.x)
    }

    fn chord(&self, lambda: &C::Field, other_x: &C::Field) -> Self {
        let x3 = lambda.square().sub(&self.x).sub(other_x);
        let y3 = lambda.mul(&self.x.sub(&x3)).sub(&self.y);
        Self::from_coordinates_unchecked(x3, y3)
    }
}

/// x³ + a·x + b
pub(crate) fn curve_rhs<C: Curve>(x: &C::Field) -> C::Field {
    x.square().add(&C::A).mul(x).add(&C::B)
}

impl<C: Curve> Default for AffinePoint<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: Curve> ConditionallySelectable for AffinePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::Field::conditional_select(&a.x, &b.x, choice),
            y: C::Field::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<C: Curve> ConstantTimeEq for AffinePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let both_identity = self.infinity & other.infinity;
        let neither = !self.infinity & !other.infinity;
        both_identity | (neither & self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y))
    }
}

impl<C: Curve> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: Curve> Eq for AffinePoint<C> {}

impl<C: Curve> fmt::Debug for AffinePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if bool::from(self.infinity) {
            return write!(f, "AffinePoint<{}>(infinity)", C::NAME);
        }
        f.debug_struct("AffinePoint")
            .field("curve", &C::NAME)
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}
