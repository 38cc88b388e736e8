//! Points in Jacobian projective coordinates

use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::ec::{AffinePoint, CombMultiplier, Curve, Field, Scalar};
use crate::error::Result;

/// A curve point (X : Y : Z) with x = X/Z², y = Y/Z³.
///
/// The identity is any point with Z = 0. Addition and doubling are written
/// so that the special cases of the group law are resolved by constant-time
/// selection instead of branches.
#[derive(Clone, Copy)]
pub struct ProjectivePoint<C: Curve> {
    pub(crate) x: C::Field,
    pub(crate) y: C::Field,
    pub(crate) z: C::Field,
}

impl<C: Curve> ProjectivePoint<C> {
    pub fn identity() -> Self {
        Self {
            x: C::Field::ONE,
            y: C::Field::ONE,
            z: C::Field::ZERO,
        }
    }

    pub fn generator() -> Self {
        AffinePoint::<C>::generator().into()
    }

    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// True when `Z = 1` or the point is the identity, i.e. the coordinates
    /// are already the affine ones.
    pub fn is_normalized(&self) -> Choice {
        self.z.ct_eq(&C::Field::ONE) | self.is_identity()
    }

    /// Y² = X³ + a·X·Z⁴ + b·Z⁶; the identity passes.
    pub fn is_on_curve(&self) -> Choice {
        let zz = self.z.square();
        let z4 = zz.square();
        let z6 = z4.mul(&zz);
        let lhs = self.y.square();
        let rhs = self
            .x
            .square()
            .add(&C::A.mul(&z4))
            .mul(&self.x)
            .add(&C::B.mul(&z6));
        lhs.ct_eq(&rhs) | self.is_identity()
    }

    /// `n·P == identity`
    pub fn is_torsion_free(&self) -> Choice {
        if C::COFACTOR == 1 {
            return Choice::from(1);
        }
        match CombMultiplier::new(self).multiply_bytes(C::ORDER) {
            Ok(p) => p.is_identity(),
            Err(_) => Choice::from(0),
        }
    }

    pub fn negate(&self) -> Self {
        Self {
            x: self.x,
            y: self.y.negate(),
            z: self.z,
        }
    }

    /// Jacobian doubling for arbitrary `a`.
    ///
    /// The identity (Z = 0) and 2-torsion points (Y = 0) both yield Z₃ = 0.
    pub fn double(&self) -> Self {
        let xx = self.x.square();
        let yy = self.y.square();
        let yyyy = yy.square();
        let zz = self.z.square();
        // S = 4·X·Y²
        let s = self.x.mul(&yy).double().double();
        // M = 3·X² + a·Z⁴
        let m = xx.double().add(&xx).add(&C::A.mul(&zz.square()));
        let x3 = m.square().sub(&s.double());
        let y3 = m.mul(&s.sub(&x3)).sub(&yyyy.double().double().double());
        let z3 = self.y.mul(&self.z).double();
        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    pub fn double_n(&self, n: usize) -> Self {
        let mut r = *self;
        for _ in 0..n {
            r = r.double();
        }
        r
    }

    /// Jacobian addition with H = U₂ − U₁ and R = S₂ − S₁.
    pub fn add(&self, other: &Self) -> Self {
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x.mul(&z2z2);
        let u2 = other.x.mul(&z1z1);
        let s1 = self.y.mul(&other.z).mul(&z2z2);
        let s2 = other.y.mul(&self.z).mul(&z1z1);
        let h = u2.sub(&u1);
        let r = s2.sub(&s1);

        let hh = h.square();
        let hhh = hh.mul(&h);
        let v = u1.mul(&hh);
        let x3 = r.square().sub(&hhh).sub(&v.double());
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&hhh));
        // H = 0 with R ≠ 0 means P + (−P): Z₃ = 0 already encodes the identity
        let z3 = h.mul(&self.z).mul(&other.z);
        let sum = Self {
            x: x3,
            y: y3,
            z: z3,
        };

        let same = h.is_zero() & r.is_zero() & !self.is_identity() & !other.is_identity();
        let mut out = Self::conditional_select(&sum, &self.double(), same);
        out.conditional_assign(other, self.is_identity());
        out.conditional_assign(self, other.is_identity());
        out
    }

    /// Mixed addition with an affine point (Z₂ = 1).
    pub fn add_mixed(&self, other: &AffinePoint<C>) -> Self {
        let z1z1 = self.z.square();
        let u2 = other.x.mul(&z1z1);
        let s2 = other.y.mul(&self.z).mul(&z1z1);
        let h = u2.sub(&self.x);
        let r = s2.sub(&self.y);

        let hh = h.square();
        let hhh = hh.mul(&h);
        let v = self.x.mul(&hh);
        let x3 = r.square().sub(&hhh).sub(&v.double());
        let y3 = r.mul(&v.sub(&x3)).sub(&self.y.mul(&hhh));
        let z3 = self.z.mul(&h);
        let sum = Self {
            x: x3,
            y: y3,
            z: z3,
        };

        let same = h.is_zero() & r.is_zero() & !self.is_identity() & !other.infinity;
        let mut out = Self::conditional_select(&sum, &self.double(), same);
        out.conditional_assign(&Self::from(*other), self.is_identity());
        out.conditional_assign(self, other.infinity);
        out
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    /// `k·self` through a comb built for this point.
    pub fn mul(&self, k: &Scalar<C>) -> Self {
        CombMultiplier::new(self).multiply(k)
    }

    /// `k·G`
    pub fn mul_generator(k: &Scalar<C>) -> Self {
        C::generator_comb().multiply(k)
    }

    /// Affine form; a single inversion.
    pub fn to_affine(&self) -> AffinePoint<C> {
        let zinv = self.z.invert().unwrap_or(C::Field::ZERO);
        self.with_z_inverse(&zinv)
    }

    fn with_z_inverse(&self, zinv: &C::Field) -> AffinePoint<C> {
        let zinv2 = zinv.square();
        let x = self.x.mul(&zinv2);
        let y = self.y.mul(&zinv2.mul(zinv));
        let identity = self.is_identity();
        AffinePoint::conditional_select(
            &AffinePoint::from_coordinates_unchecked(x, y),
            &AffinePoint::identity(),
            identity,
        )
    }

    /// Normalize a batch with one shared inversion.
    ///
    /// Montgomery's trick: accumulate the running product of all non-zero
    /// Z coordinates, invert it once, then peel off each inverse walking
    /// backwards. Identities contribute a factor of one and come out as the
    /// affine identity, so the result matches `to_affine` element-wise.
    pub fn normalize_all(points: &[Self]) -> Vec<AffinePoint<C>> {
        let one = C::Field::ONE;
        let mut prefix = Vec::with_capacity(points.len());
        let mut acc = one;
        for p in points {
            prefix.push(acc);
            let z = C::Field::conditional_select(&p.z, &one, p.is_identity());
            acc = acc.mul(&z);
        }

        // every factor is non-zero, so the product is invertible
        let mut inv = acc.invert().unwrap_or(C::Field::ZERO);

        let mut out = vec![AffinePoint::identity(); points.len()];
        for (i, p) in points.iter().enumerate().rev() {
            let zinv = inv.mul(&prefix[i]);
            let z = C::Field::conditional_select(&p.z, &one, p.is_identity());
            inv = inv.mul(&z);
            out[i] = p.with_z_inverse(&zinv);
        }
        out
    }

    /// Normalize and validate, returning the canonical Z = 1 form (or the identity).
    ///
    /// Every point crossing a protocol boundary goes through here.
    pub fn clean(&self) -> Result<Self> {
        let affine = self.to_affine();
        affine.validate()?;
        Ok(affine.into())
    }
}

impl<C: Curve> From<AffinePoint<C>> for ProjectivePoint<C> {
    fn from(p: AffinePoint<C>) -> Self {
        let finite = Self {
            x: p.x,
            y: p.y,
            z: C::Field::ONE,
        };
        Self::conditional_select(&finite, &Self::identity(), p.infinity)
    }
}

impl<C: Curve> From<&ProjectivePoint<C>> for AffinePoint<C> {
    fn from(p: &ProjectivePoint<C>) -> Self {
        p.to_affine()
    }
}

impl<C: Curve> Default for ProjectivePoint<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: Curve> ConditionallySelectable for ProjectivePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::Field::conditional_select(&a.x, &b.x, choice),
            y: C::Field::conditional_select(&a.y, &b.y, choice),
            z: C::Field::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: Curve> ConstantTimeEq for ProjectivePoint<C> {
    /// Cross-multiplied comparison: X₁·Z₂² = X₂·Z₁² and Y₁·Z₂³ = Y₂·Z₁³.
    fn ct_eq(&self, other: &Self) -> Choice {
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let x_eq = self.x.mul(&z2z2).ct_eq(&other.x.mul(&z1z1));
        let y_eq = self
            .y
            .mul(&z2z2.mul(&other.z))
            .ct_eq(&other.y.mul(&z1z1.mul(&self.z)));

        let id1 = self.is_identity();
        let id2 = other.is_identity();
        (id1 & id2) | (!id1 & !id2 & x_eq & y_eq)
    }
}

impl<C: Curve> PartialEq for ProjectivePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: Curve> Eq for ProjectivePoint<C> {}

impl<C: Curve> fmt::Debug for ProjectivePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProjectivePoint<{}>({:?})", C::NAME, self.to_affine())
    }
}

