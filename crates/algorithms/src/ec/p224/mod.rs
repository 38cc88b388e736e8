//! NIST P-224 Elliptic Curve Primitives
//!
//! y² = x³ − 3x + b over F_p with p = 2^224 − 2^96 + 1.

mod constants;
mod field;

pub use constants::{
    P224_FIELD_ELEMENT_SIZE, P224_POINT_COMPRESSED_SIZE, P224_POINT_UNCOMPRESSED_SIZE,
    P224_SCALAR_SIZE,
};
pub use field::FieldElement;

use constants::{P224_A_HEX, P224_B_HEX, P224_GX_HEX, P224_GY_HEX};
use hex_literal::hex;

use crate::ec::comb::cached_generator_comb;
use crate::ec::{CoordinateSystem, Curve};

/// The NIST P-224 curve (secp224r1)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NistP224;

impl Curve for NistP224 {
    type Field = FieldElement;

    const NAME: &'static str = "P-224";
    const A: FieldElement = FieldElement::from_be_hex(P224_A_HEX);
    const B: FieldElement = FieldElement::from_be_hex(P224_B_HEX);
    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_be_hex(P224_GX_HEX),
        FieldElement::from_be_hex(P224_GY_HEX),
    );
    const ORDER: &'static [u8] =
        &hex!("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d");
    const COFACTOR: u32 = 1;
    const COORDINATE_SYSTEMS: &'static [CoordinateSystem] =
        &[CoordinateSystem::Affine, CoordinateSystem::Jacobian];

    cached_generator_comb!(NistP224);
}

/// A P-224 point in Jacobian coordinates
pub type Point = crate::ec::ProjectivePoint<NistP224>;

/// A P-224 scalar modulo n
pub type Scalar = crate::ec::Scalar<NistP224>;

#[cfg(test)]
mod tests;
