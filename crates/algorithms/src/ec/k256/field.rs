//! secp256k1 field arithmetic
//!
//! p = 2²⁵⁶ − 2³² − 977. The modulus is so close to a power of two that
//! the upper half of a product folds back with one multiply-by-constant
//! pass: 2²⁵⁶ ≡ 2³² + 977 (mod p).

use subtle::ConstantTimeEq;

use super::constants::K256_MODULUS_HEX;
use crate::ec::field::impl_field_element;
use crate::ec::nat;

/// 2²⁵⁶ − p − 2³²
const R_LOW: i64 = 977;

impl_field_element!(
    /// secp256k1 field element representing values in F_p
    FieldElement,
    limbs: 8,
    wide: 16,
    bytes: 32,
    modulus: K256_MODULUS_HEX,
    sqrt: p3mod4,
);

impl FieldElement {
    /// Reduce a 512-bit product modulo p.
    pub(crate) fn reduce_wide(c: &[u32; 16]) -> [u32; 8] {
        // hi·2²⁵⁶ ≡ hi·977 + hi·2³²; the second term shifts every upper
        // word up one position, so c₁₅ lands on 2²⁵⁶ again
        let mut w = [0i64; 8];
        for i in 0..8 {
            w[i] = c[i] as i64 + R_LOW * c[i + 8] as i64;
            if i > 0 {
                w[i] += c[i + 7] as i64;
            }
        }

        let (limbs, carry) = nat::propagate(w);
        let carry = carry + c[15] as i64;
        let (limbs, carry) = nat::propagate(Self::fold(&limbs, carry));
        nat::finish(&limbs, carry, &Self::MODULUS)
    }

    #[inline(always)]
    fn fold(limbs: &[u32; 8], k: i64) -> [i64; 8] {
        let mut w = limbs.map(|l| l as i64);
        w[0] += R_LOW * k;
        w[1] += k;
        w
    }
}
