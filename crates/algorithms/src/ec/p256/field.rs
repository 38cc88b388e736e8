//! P-256 field arithmetic
//!
//! p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1, stored as 8 little-endian 32-bit limbs.

use subtle::ConstantTimeEq;

use super::constants::P256_MODULUS_HEX;
use crate::ec::field::impl_field_element;
use crate::ec::nat;

impl_field_element!(
    /// P-256 field element representing values in F_p
    FieldElement,
    limbs: 8,
    wide: 16,
    bytes: 32,
    modulus: P256_MODULUS_HEX,
    sqrt: p3mod4,
);

impl FieldElement {
    /// NIST fast reduction of a 512-bit product (FIPS 186-4, D.2.3).
    ///
    /// With cᵢ the 32-bit words of the input, the residue is
    /// T + 2S₁ + 2S₂ + S₃ + S₄ − D₁ − D₂ − D₃ − D₄; the word sums below are
    /// that combination written out column by column. The signed carry out of
    /// the top word is folded back with 2²⁵⁶ ≡ 2²²⁴ − 2¹⁹² − 2⁹⁶ + 1.
    pub(crate) fn reduce_wide(c: &[u32; 16]) -> [u32; 8] {
        let c: [i64; 16] = c.map(|w| w as i64);

        let w = [
            c[0] + c[8] + c[9] - c[11] - c[12] - c[13] - c[14],
            c[1] + c[9] + c[10] - c[12] - c[13] - c[14] - c[15],
            c[2] + c[10] + c[11] - c[13] - c[14] - c[15],
            c[3] + 2 * (c[11] + c[12]) + c[13] - c[15] - c[8] - c[9],
            c[4] + 2 * (c[12] + c[13]) + c[14] - c[9] - c[10],
            c[5] + 2 * (c[13] + c[14]) + c[15] - c[10] - c[11],
            c[6] + 3 * c[14] + 2 * c[15] + c[13] - c[8] - c[9],
            c[7] + 3 * c[15] + c[8] - c[10] - c[11] - c[12] - c[13],
        ];

        let (limbs, carry) = nat::propagate(w);
        let (limbs, carry) = nat::propagate(Self::fold(&limbs, carry));
        nat::finish(&limbs, carry, &Self::MODULUS)
    }

    #[inline(always)]
    fn fold(limbs: &[u32; 8], k: i64) -> [i64; 8] {
        let mut w = limbs.map(|l| l as i64);
        w[0] += k;
        w[3] -= k;
        w[6] -= k;
        w[7] += k;
        w
    }
}
