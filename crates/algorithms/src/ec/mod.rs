//! Elliptic Curve Primitives
//!
//! Short Weierstrass curves `y² = x³ + a·x + b` over prime fields. Each curve
//! is a zero-sized marker type implementing [`Curve`]; points, scalars and
//! keys are generic over it, so a curve descriptor is shared immutable data
//! that points refer to through their type rather than through a pointer.
//!
//! Built-in curves: NIST P-224, NIST P-256, SM2 P-256 and secp256k1. The
//! `dev` feature adds a curve over `F_17` small enough to check by hand.

pub(crate) mod nat;

pub mod field;

mod affine;
mod comb;
mod keys;
mod map;
mod projective;
mod scalar;
mod sec1;

#[cfg(feature = "p224")]
pub mod p224;
#[cfg(feature = "p256")]
pub mod p256;
#[cfg(feature = "sm2")]
pub mod sm2;
#[cfg(feature = "k256")]
pub mod k256;

#[cfg(any(test, feature = "dev"))]
pub mod dev;

pub use affine::AffinePoint;
pub use comb::CombMultiplier;
pub use field::Field;
pub use keys::{generate_keypair, KeyParameters, PrivateKey, PublicKey};
pub use map::{PointMap, ScaleXNegateYPointMap};
pub use projective::ProjectivePoint;
pub use scalar::Scalar;
pub use sec1::PointFormat;

use core::fmt::Debug;

/// Coordinate systems a curve can carry out its group law in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CoordinateSystem {
    /// Affine coordinates (x, y)
    Affine,
    /// Jacobian projective coordinates (X : Y : Z) where x = X/Z² and y = Y/Z³
    Jacobian,
}

/// Domain parameters of a short Weierstrass curve.
///
/// Implementors are zero-sized markers; all parameters are associated
/// constants fixed at compile time.
pub trait Curve: Copy + Clone + Debug + Default + PartialEq + Eq + Send + Sync + 'static {
    /// Base field `F_p`
    type Field: Field;

    const NAME: &'static str;

    /// Coefficient `a`
    const A: Self::Field;

    /// Coefficient `b`
    const B: Self::Field;

    /// Affine coordinates of the base point `G`
    const GENERATOR: (Self::Field, Self::Field);

    /// Prime order `n` of `G`, big-endian. Its length is the scalar width.
    const ORDER: &'static [u8];

    /// Ratio of the full group order to `n`
    const COFACTOR: u32;

    const COORDINATE_SYSTEMS: &'static [CoordinateSystem];

    fn supports_coordinate_system(system: CoordinateSystem) -> bool {
        Self::COORDINATE_SYSTEMS.contains(&system)
    }

    /// Bit length of the group order; also the comb size.
    fn order_bits() -> usize {
        nat::be_bit_length(Self::ORDER)
    }

    /// Length of a big-endian scalar encoding.
    fn scalar_bytes() -> usize {
        Self::ORDER.len()
    }

    /// The comb over `G`, built once per curve and shared.
    fn generator_comb() -> &'static CombMultiplier<Self>;
}
