//! SM2 field arithmetic
//!
//! p = 2²⁵⁶ − 2²²⁴ − 2⁹⁶ + 2⁶⁴ − 1, stored as 8 little-endian 32-bit limbs.

use subtle::ConstantTimeEq;

use super::constants::SM2_MODULUS_HEX;
use crate::ec::field::impl_field_element;
use crate::ec::nat;

impl_field_element!(
    /// SM2 field element representing values in F_p
    FieldElement,
    limbs: 8,
    wide: 16,
    bytes: 32,
    modulus: SM2_MODULUS_HEX,
    sqrt: p3mod4,
);

impl FieldElement {
    /// Reduce a 512-bit product modulo p.
    ///
    /// Each upper word c₈‥c₁₅ stands for 2^(256 + 32k); expanding those powers
    /// with 2²⁵⁶ ≡ 2²²⁴ + 2⁹⁶ − 2⁶⁴ + 1 gives the per-column coefficients
    /// below. The same congruence folds the final carry.
    pub(crate) fn reduce_wide(c: &[u32; 16]) -> [u32; 8] {
        let c: [i64; 16] = c.map(|w| w as i64);

        let w = [
            c[0] + c[8] + c[9] + c[10] + c[11] + c[12] + 2 * (c[13] + c[14] + c[15]),
            c[1] + c[9] + c[10] + c[11] + c[12] + c[13] + 2 * (c[14] + c[15]),
            c[2] - c[8] - c[9] - c[13] - c[14],
            c[3] + c[8] + c[11] + c[12] + 2 * c[13] + c[14] + c[15],
            c[4] + c[9] + c[12] + c[13] + 2 * c[14] + c[15],
            c[5] + c[10] + c[13] + c[14] + 2 * c[15],
            c[6] + c[11] + c[14] + c[15],
            c[7] + c[8] + c[9] + c[10] + c[11] + 2 * (c[12] + c[13] + c[14]) + 3 * c[15],
        ];

        let (limbs, carry) = nat::propagate(w);
        let (limbs, carry) = nat::propagate(Self::fold(&limbs, carry));
        nat::finish(&limbs, carry, &Self::MODULUS)
    }

    #[inline(always)]
    fn fold(limbs: &[u32; 8], k: i64) -> [i64; 8] {
        let mut w = limbs.map(|l| l as i64);
        w[0] += k;
        w[2] -= k;
        w[3] += k;
        w[7] += k;
        w
    }
}
