//! P-224 field arithmetic implementation
//!
//! p = 2²²⁴ − 2⁹⁶ + 1 is congruent to 1 mod 4, so square roots go through
//! Tonelli-Shanks (p − 1 = (2¹²⁸ − 1)·2⁹⁶).

use subtle::ConstantTimeEq;

use super::constants::P224_MODULUS_HEX;
use crate::ec::field::impl_field_element;
use crate::ec::nat;

impl_field_element!(
    /// P-224 field element representing values in F_p
    ///
    /// Internally stored as 7 little-endian 32-bit limbs.
    FieldElement,
    limbs: 7,
    wide: 14,
    bytes: 28,
    modulus: P224_MODULUS_HEX,
    sqrt: tonelli_shanks,
);

impl FieldElement {
    /// Reduce a 448-bit value (14 little-endian limbs) modulo p.
    ///
    /// Solinas reduction (FIPS 186-4, D.2.2): T + S₁ + S₂ − D₁ − D₂ written
    /// out per word. The carry out of bit 224 is folded back with
    /// 2²²⁴ ≡ 2⁹⁶ − 1.
    pub(crate) fn reduce_wide(c: &[u32; 14]) -> [u32; 7] {
        let c: [i64; 14] = c.map(|w| w as i64);

        let w = [
            c[0] - c[7] - c[11],
            c[1] - c[8] - c[12],
            c[2] - c[9] - c[13],
            c[3] + c[7] + c[11] - c[10],
            c[4] + c[8] + c[12] - c[11],
            c[5] + c[9] + c[13] - c[12],
            c[6] + c[10] - c[13],
        ];

        let (limbs, carry) = nat::propagate(w);
        let (limbs, carry) = nat::propagate(Self::fold(&limbs, carry));
        nat::finish(&limbs, carry, &Self::MODULUS)
    }

    #[inline(always)]
    fn fold(limbs: &[u32; 7], k: i64) -> [i64; 7] {
        let mut w = limbs.map(|l| l as i64);
        w[0] -= k;
        w[3] += k;
        w
    }
}
