//! Prime-field element abstraction
//!
//! Every curve module instantiates [`impl_field_element!`] for its own limb
//! newtype and supplies a `reduce_wide` routine tailored to the shape of its
//! modulus. The macro derives everything else: canonical add/sub with one
//! conditional correction, multiplication through the curve's reduction,
//! halving, Fermat inversion and square roots.

use core::fmt::Debug;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use crate::error::Result;

/// An element of a prime field `F_p`, always held in canonical form `[0, p)`.
///
/// Arithmetic is exposed through named methods rather than operator
/// overloads so that every call site reads as the field operation it is.
pub trait Field:
    Copy
    + Clone
    + Debug
    + Default
    + PartialEq
    + Eq
    + ConditionallySelectable
    + ConstantTimeEq
    + Zeroize
    + Send
    + Sync
    + 'static
{
    /// Length of the fixed-width big-endian encoding, `ceil(bitlength(p) / 8)`.
    const BYTES: usize;

    const ZERO: Self;
    const ONE: Self;

    /// Decode a big-endian encoding of exactly [`Field::BYTES`] bytes.
    ///
    /// # Errors
    /// `InvalidLength` for a wrong length, `InvalidEncoding` for a value `>= p`.
    fn from_be_bytes(bytes: &[u8]) -> Result<Self>;

    /// Write the big-endian encoding into `out[..Self::BYTES]`.
    fn write_be_bytes(&self, out: &mut [u8]);

    fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; Self::BYTES];
        self.write_be_bytes(&mut out);
        out
    }

    /// The residue of `v` modulo `p`.
    fn from_u64(v: u64) -> Self;

    fn add(&self, rhs: &Self) -> Self;
    fn sub(&self, rhs: &Self) -> Self;
    fn negate(&self) -> Self;
    fn mul(&self, rhs: &Self) -> Self;
    fn square(&self) -> Self;
    fn double(&self) -> Self;

    /// `self / 2 mod p`.
    fn half(&self) -> Self;

    /// `self^(2^n)`.
    fn square_n(&self, n: usize) -> Self {
        let mut r = *self;
        for _ in 0..n {
            r = r.square();
        }
        r
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    /// `NotInvertible` for zero.
    fn invert(&self) -> Result<Self>;

    /// A square root, if one exists.
    fn sqrt(&self) -> Option<Self>;

    fn is_zero(&self) -> Choice;

    /// Parity of the canonical representative.
    fn is_odd(&self) -> Choice;
}

/// Generate a field element newtype over `$limbs` little-endian `u32` words.
///
/// The invoking module must provide, on the generated type:
///
/// ```text
/// fn reduce_wide(c: &[u32; $wide]) -> [u32; $limbs]
/// ```
///
/// returning the canonical residue of the double-width value `c`, and must
/// have `subtle::ConstantTimeEq` in scope. `Field` is named by path.
/// `sqrt` selects the square-root strategy: `p3mod4` computes
/// `a^((p+1)/4)`, `tonelli_shanks` handles any odd prime.
macro_rules! impl_field_element {
    (
        $(#[$attr:meta])*
        $name:ident,
        limbs: $limbs:literal,
        wide: $wide:literal,
        bytes: $bytes:literal,
        modulus: $modulus:expr,
        sqrt: $sqrt:ident $(,)?
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Default)]
        pub struct $name(pub(crate) [u32; $limbs]);

        impl $name {
            /// The field modulus `p`
            pub(crate) const MODULUS: [u32; $limbs] = $crate::ec::nat::from_be_hex($modulus);

            const P_MINUS_2: [u32; $limbs] = $crate::ec::nat::sub_small(&Self::MODULUS, 2);

            /// Parse a constant from `8 * limbs` big-endian hex digits.
            ///
            /// Panics at compile time when the value is not below `p`.
            pub const fn from_be_hex(hex: &str) -> Self {
                let limbs = $crate::ec::nat::from_be_hex::<$limbs>(hex);
                assert!(
                    $crate::ec::nat::const_lt(&limbs, &Self::MODULUS),
                    "field constant must be below the modulus"
                );
                Self(limbs)
            }

            /// Square-and-multiply with a public exponent.
            pub(crate) fn pow_vartime(&self, exp: &[u32; $limbs]) -> Self {
                let mut result = <Self as $crate::ec::Field>::ONE;
                for i in (0..$limbs).rev() {
                    for bit in (0..32).rev() {
                        result = $crate::ec::Field::square(&result);
                        if (exp[i] >> bit) & 1 == 1 {
                            result = $crate::ec::Field::mul(&result, self);
                        }
                    }
                }
                result
            }

            $crate::ec::field::impl_field_element!(@sqrt_helper $sqrt, $limbs);
        }

        impl $crate::ec::Field for $name {
            const BYTES: usize = $bytes;
            const ZERO: Self = Self([0; $limbs]);
            const ONE: Self = {
                let mut one = [0u32; $limbs];
                one[0] = 1;
                Self(one)
            };

            fn from_be_bytes(bytes: &[u8]) -> $crate::error::Result<Self> {
                $crate::error::validate::length("field element", bytes.len(), $bytes)?;
                let limbs = $crate::ec::nat::from_be_bytes::<$limbs>(bytes);
                let (_, borrow) = $crate::ec::nat::sbb(&limbs, &Self::MODULUS);
                if borrow == 0 {
                    return Err($crate::error::Error::encoding(
                        "field element",
                        "value is not below the field modulus",
                    ));
                }
                Ok(Self(limbs))
            }

            fn write_be_bytes(&self, out: &mut [u8]) {
                $crate::ec::nat::write_be_bytes(&self.0, &mut out[..$bytes]);
            }

            fn from_u64(v: u64) -> Self {
                let mut wide = [0u32; $wide];
                wide[0] = v as u32;
                wide[1] = (v >> 32) as u32;
                Self(Self::reduce_wide(&wide))
            }

            #[inline(always)]
            fn add(&self, rhs: &Self) -> Self {
                let (sum, carry) = $crate::ec::nat::adc(&self.0, &rhs.0);
                let (reduced, borrow) = $crate::ec::nat::sbb(&sum, &Self::MODULUS);
                // keep `sum` only when it did not overflow and lies below p
                let keep = subtle::Choice::from(((carry ^ 1) & borrow) as u8);
                Self($crate::ec::nat::select(&reduced, &sum, keep))
            }

            #[inline(always)]
            fn sub(&self, rhs: &Self) -> Self {
                let (diff, borrow) = $crate::ec::nat::sbb(&self.0, &rhs.0);
                let (wrapped, _) = $crate::ec::nat::adc(&diff, &Self::MODULUS);
                Self($crate::ec::nat::select(&diff, &wrapped, subtle::Choice::from(borrow as u8)))
            }

            fn negate(&self) -> Self {
                Self::ZERO.sub(self)
            }

            #[inline(always)]
            fn mul(&self, rhs: &Self) -> Self {
                let wide = $crate::ec::nat::mul_wide::<$limbs, $wide>(&self.0, &rhs.0);
                Self(Self::reduce_wide(&wide))
            }

            #[inline(always)]
            fn square(&self) -> Self {
                self.mul(self)
            }

            fn double(&self) -> Self {
                self.add(self)
            }

            fn half(&self) -> Self {
                let odd = self.is_odd();
                let (plus_p, carry) = $crate::ec::nat::adc(&self.0, &Self::MODULUS);
                let v = $crate::ec::nat::select(&self.0, &plus_p, odd);
                let top = subtle::ConditionallySelectable::conditional_select(&0u32, &carry, odd);
                let mut out = [0u32; $limbs];
                for i in 0..$limbs {
                    let next = if i + 1 < $limbs { v[i + 1] } else { top };
                    out[i] = (v[i] >> 1) | (next << 31);
                }
                Self(out)
            }

            fn invert(&self) -> $crate::error::Result<Self> {
                if bool::from(self.is_zero()) {
                    return Err($crate::error::Error::NotInvertible {
                        context: "field inversion",
                    });
                }
                Ok(self.pow_vartime(&Self::P_MINUS_2))
            }

            fn sqrt(&self) -> Option<Self> {
                self.sqrt_candidate()
                    .filter(|root| bool::from(root.square().ct_eq(self)))
            }

            fn is_zero(&self) -> subtle::Choice {
                self.ct_eq(&Self::ZERO)
            }

            fn is_odd(&self) -> subtle::Choice {
                subtle::Choice::from((self.0[0] & 1) as u8)
            }
        }

        impl subtle::ConditionallySelectable for $name {
            fn conditional_select(a: &Self, b: &Self, choice: subtle::Choice) -> Self {
                Self($crate::ec::nat::select(&a.0, &b.0, choice))
            }
        }

        impl subtle::ConstantTimeEq for $name {
            fn ct_eq(&self, other: &Self) -> subtle::Choice {
                subtle::ConstantTimeEq::ct_eq(&self.0[..], &other.0[..])
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.ct_eq(other).into()
            }
        }

        impl Eq for $name {}

        impl zeroize::Zeroize for $name {
            fn zeroize(&mut self) {
                zeroize::Zeroize::zeroize(&mut self.0);
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let bytes = $crate::ec::Field::to_be_bytes(self);
                write!(f, "{}(0x{})", stringify!($name), hex::encode(bytes))
            }
        }
    };

    (@sqrt_helper p3mod4, $limbs:literal) => {
        const SQRT_EXP: [u32; $limbs] = $crate::ec::nat::shr(
            &$crate::ec::nat::add_small(&Self::MODULUS, 1),
            2,
        );

        /// `a^((p+1)/4)`, a root whenever `a` is a square and `p = 3 mod 4`.
        fn sqrt_candidate(&self) -> Option<Self> {
            Some(self.pow_vartime(&Self::SQRT_EXP))
        }
    };

    (@sqrt_helper tonelli_shanks, $limbs:literal) => {
        const P_MINUS_1: [u32; $limbs] = $crate::ec::nat::sub_small(&Self::MODULUS, 1);
        const LEGENDRE_EXP: [u32; $limbs] = $crate::ec::nat::shr(&Self::P_MINUS_1, 1);
        /// `p - 1 = q * 2^s` with `q` odd
        const TS_S: usize = $crate::ec::nat::trailing_zeros(&Self::P_MINUS_1);
        const TS_Q: [u32; $limbs] = $crate::ec::nat::shr(&Self::P_MINUS_1, Self::TS_S);
        const TS_Q_PLUS_1_HALF: [u32; $limbs] =
            $crate::ec::nat::shr(&$crate::ec::nat::add_small(&Self::TS_Q, 1), 1);

        fn is_quadratic_residue(&self) -> bool {
            let e = self.pow_vartime(&Self::LEGENDRE_EXP);
            bool::from($crate::ec::Field::is_zero(&e)) || e == <Self as $crate::ec::Field>::ONE
        }

        fn sqrt_candidate(&self) -> Option<Self> {
            use $crate::ec::Field;

            if bool::from(self.is_zero()) {
                return Some(Self::ZERO);
            }
            if !self.is_quadratic_residue() {
                return None;
            }

            // smallest non-residue; the search only touches public values
            let mut z = Self::ONE.double();
            while z.is_quadratic_residue() {
                z = z.add(&Self::ONE);
            }

            let mut m = Self::TS_S;
            let mut c = z.pow_vartime(&Self::TS_Q);
            let mut t = self.pow_vartime(&Self::TS_Q);
            let mut r = self.pow_vartime(&Self::TS_Q_PLUS_1_HALF);

            while t != Self::ONE {
                let mut i = 1;
                let mut t2i = t.square();
                while t2i != Self::ONE {
                    t2i = t2i.square();
                    i += 1;
                    if i == m {
                        return None;
                    }
                }
                let b = c.square_n(m - i - 1);
                r = r.mul(&b);
                c = b.square();
                t = t.mul(&c);
                m = i;
            }
            Some(r)
        }
    };
}

pub(crate) use impl_field_element;
