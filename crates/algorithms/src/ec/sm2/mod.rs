//! SM2 recommended 256-bit curve
//!
//! y² = x³ − 3x + b over F_p with p = 2^256 − 2^224 − 2^96 + 2^64 − 1. The
//! prime resembles the NIST shape with different signs, so it gets its own
//! word-table reduction.

mod constants;
mod field;

pub use constants::{
    SM2_FIELD_ELEMENT_SIZE, SM2_POINT_COMPRESSED_SIZE, SM2_POINT_UNCOMPRESSED_SIZE,
    SM2_SCALAR_SIZE,
};
pub use field::FieldElement;

use constants::{SM2_A_HEX, SM2_B_HEX, SM2_GX_HEX, SM2_GY_HEX};
use hex_literal::hex;

use crate::ec::comb::cached_generator_comb;
use crate::ec::{CoordinateSystem, Curve};

/// The SM2 P-256 curve (sm2p256v1)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sm2P256;

impl Curve for Sm2P256 {
    type Field = FieldElement;

    const NAME: &'static str = "SM2";
    const A: FieldElement = FieldElement::from_be_hex(SM2_A_HEX);
    const B: FieldElement = FieldElement::from_be_hex(SM2_B_HEX);
    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_be_hex(SM2_GX_HEX),
        FieldElement::from_be_hex(SM2_GY_HEX),
    );
    const ORDER: &'static [u8] =
        &hex!("fffffffeffffffffffffffffffffffff7203df6b21c6052b53bbf40939d54123");
    const COFACTOR: u32 = 1;
    const COORDINATE_SYSTEMS: &'static [CoordinateSystem] =
        &[CoordinateSystem::Affine, CoordinateSystem::Jacobian];

    cached_generator_comb!(Sm2P256);
}

/// An SM2 point in Jacobian coordinates
pub type Point = crate::ec::ProjectivePoint<Sm2P256>;

/// An SM2 scalar modulo n
pub type Scalar = crate::ec::Scalar<Sm2P256>;

#[cfg(test)]
mod tests;
