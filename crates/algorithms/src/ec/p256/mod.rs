//! NIST P-256 Elliptic Curve Primitives
//!
//! The curve equation is y² = x³ − 3x + b over the prime field F_p where:
//! - p = 2^256 − 2^224 + 2^192 + 2^96 − 1 (NIST P-256 prime)
//! - the group order n = 0xFFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551
//!
//! Field multiplication reduces with the NIST word-table routine; the group
//! law runs in Jacobian coordinates.

mod constants;
mod field;

pub use constants::{
    P256_FIELD_ELEMENT_SIZE, P256_POINT_COMPRESSED_SIZE, P256_POINT_UNCOMPRESSED_SIZE,
    P256_SCALAR_SIZE,
};
pub use field::FieldElement;

use constants::{P256_A_HEX, P256_B_HEX, P256_GX_HEX, P256_GY_HEX};
use hex_literal::hex;

use crate::ec::comb::cached_generator_comb;
use crate::ec::{CoordinateSystem, Curve};

/// The NIST P-256 curve (secp256r1)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NistP256;

impl Curve for NistP256 {
    type Field = FieldElement;

    const NAME: &'static str = "P-256";
    const A: FieldElement = FieldElement::from_be_hex(P256_A_HEX);
    const B: FieldElement = FieldElement::from_be_hex(P256_B_HEX);
    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_be_hex(P256_GX_HEX),
        FieldElement::from_be_hex(P256_GY_HEX),
    );
    const ORDER: &'static [u8] =
        &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");
    const COFACTOR: u32 = 1;
    const COORDINATE_SYSTEMS: &'static [CoordinateSystem] =
        &[CoordinateSystem::Affine, CoordinateSystem::Jacobian];

    cached_generator_comb!(NistP256);
}

/// A P-256 point in Jacobian coordinates
pub type Point = crate::ec::ProjectivePoint<NistP256>;

/// A P-256 scalar modulo n
pub type Scalar = crate::ec::Scalar<NistP256>;
