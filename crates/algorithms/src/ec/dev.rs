//! A toy curve for tests and worked examples
//!
//! y² = x³ + 2x + 2 over F₁₇. The group has prime order 19, so every point
//! other than the identity generates it; G = (5, 1). Small enough that every
//! multiple of G can be checked by hand. Never use it for real keys.

use subtle::ConstantTimeEq;

use crate::ec::field::impl_field_element;
use crate::ec::comb::cached_generator_comb;
use crate::ec::{CoordinateSystem, Curve, Field};

const TOY17_MODULUS: u64 = 17;

impl_field_element!(
    /// Element of F₁₇
    Toy17Field,
    limbs: 1,
    wide: 2,
    bytes: 1,
    modulus: "00000011",
    sqrt: tonelli_shanks,
);

impl Toy17Field {
    // a modulus this small has no special shape to exploit
    pub(crate) fn reduce_wide(c: &[u32; 2]) -> [u32; 1] {
        let v = ((c[1] as u64) << 32) | c[0] as u64;
        [(v % TOY17_MODULUS) as u32]
    }
}

/// y² = x³ + 2x + 2 over F₁₇
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Toy17;

impl Curve for Toy17 {
    type Field = Toy17Field;

    const NAME: &'static str = "toy-17";
    const A: Toy17Field = Toy17Field::from_be_hex("00000002");
    const B: Toy17Field = Toy17Field::from_be_hex("00000002");
    const GENERATOR: (Toy17Field, Toy17Field) = (
        Toy17Field::from_be_hex("00000005"),
        Toy17Field::from_be_hex("00000001"),
    );
    const ORDER: &'static [u8] = &[19];
    const COFACTOR: u32 = 1;
    const COORDINATE_SYSTEMS: &'static [CoordinateSystem] =
        &[CoordinateSystem::Affine, CoordinateSystem::Jacobian];

    cached_generator_comb!(Toy17);
}

impl Toy17Field {
    /// The residue of a small integer, for readable test vectors.
    pub fn small(v: u8) -> Self {
        <Self as Field>::from_u64(v as u64)
    }
}
