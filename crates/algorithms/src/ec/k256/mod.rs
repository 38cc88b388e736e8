//! secp256k1 Elliptic Curve Primitives
//!
//! The Koblitz curve y² = x³ + 7 over F_p, p = 2^256 − 2^32 − 977.

mod constants;
mod field;

pub use constants::{
    K256_FIELD_ELEMENT_SIZE, K256_POINT_COMPRESSED_SIZE, K256_POINT_UNCOMPRESSED_SIZE,
    K256_SCALAR_SIZE,
};
pub use field::FieldElement;

use constants::{K256_BETA_HEX, K256_B_HEX, K256_GX_HEX, K256_GY_HEX};
use hex_literal::hex;

use crate::ec::comb::cached_generator_comb;
use crate::ec::{CoordinateSystem, Curve, Field, ScaleXNegateYPointMap};

/// The secp256k1 curve
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Secp256k1;

impl Curve for Secp256k1 {
    type Field = FieldElement;

    const NAME: &'static str = "secp256k1";
    const A: FieldElement = FieldElement::ZERO;
    const B: FieldElement = FieldElement::from_be_hex(K256_B_HEX);
    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_be_hex(K256_GX_HEX),
        FieldElement::from_be_hex(K256_GY_HEX),
    );
    const ORDER: &'static [u8] =
        &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
    const COFACTOR: u32 = 1;
    const COORDINATE_SYSTEMS: &'static [CoordinateSystem] =
        &[CoordinateSystem::Affine, CoordinateSystem::Jacobian];

    cached_generator_comb!(Secp256k1);
}

impl Secp256k1 {
    /// The scalar λ with λ·(x, y) = (β·x, y), β a cube root of unity mod p
    pub const LAMBDA: [u8; 32] =
        hex!("5363ad4cc05c30e0a5261c028812645a122e22ea20816678df02967c1b23bd72");

    /// `P ↦ −λ·P`, evaluated as `(β·x, −y)` without a multiplication.
    pub fn negated_endomorphism() -> ScaleXNegateYPointMap<Secp256k1> {
        ScaleXNegateYPointMap::new(FieldElement::from_be_hex(K256_BETA_HEX))
    }
}

/// A secp256k1 point in Jacobian coordinates
pub type Point = crate::ec::ProjectivePoint<Secp256k1>;

/// A secp256k1 scalar modulo n
pub type Scalar = crate::ec::Scalar<Secp256k1>;

#[cfg(test)]
mod tests;
