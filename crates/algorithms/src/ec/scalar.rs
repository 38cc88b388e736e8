//! Scalars modulo the group order

use core::fmt;
use core::marker::PhantomData;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use eccore_common::SecretVec;
use eccore_internal::ct_lt_be;

use crate::ec::{nat, Curve};
use crate::error::{validate, Error, Result};

/// An integer in `[0, n)`, held as fixed-width big-endian bytes.
///
/// The encoding lives in a [`SecretVec`], so every scalar is wiped on drop.
#[derive(Clone)]
pub struct Scalar<C: Curve> {
    bytes: SecretVec,
    _curve: PhantomData<C>,
}

impl<C: Curve> Scalar<C> {
    pub fn zero() -> Self {
        Self {
            bytes: SecretVec::zeroed(C::scalar_bytes()),
            _curve: PhantomData,
        }
    }

    /// Decode a big-endian scalar of exactly `scalar_bytes()` bytes.
    ///
    /// # Errors
    /// `InvalidLength` for a wrong length, `InvalidScalar` when the value is
    /// not below the group order.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("scalar", bytes.len(), C::scalar_bytes())?;
        if !bool::from(ct_lt_be(bytes, C::ORDER)) {
            return Err(Error::scalar(C::NAME, "scalar must be below the group order"));
        }
        Ok(Self {
            bytes: SecretVec::from_slice(bytes),
            _curve: PhantomData,
        })
    }

    /// A small constant; fails when it does not fit below `n`.
    pub fn from_u64(v: u64) -> Result<Self> {
        let len = C::scalar_bytes();
        let mut bytes = SecretVec::zeroed(len);
        let be = v.to_be_bytes();
        let out = bytes.as_mut_slice();
        for (i, b) in be.iter().rev().enumerate() {
            if i < len {
                out[len - 1 - i] = *b;
            } else if *b != 0 {
                return Err(Error::scalar(C::NAME, "scalar must be below the group order"));
            }
        }
        Self::from_be_bytes(bytes.as_slice())
    }

    /// Draw uniformly from `[1, n − 1]`.
    ///
    /// Candidates are masked to the bit length of `n` and rejected when zero
    /// or not below `n`, so no modular bias is introduced. Each attempt
    /// succeeds with probability above one half.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let len = C::scalar_bytes();
        let top_mask = 0xffu8 >> C::ORDER[0].leading_zeros();
        let mut candidate = SecretVec::zeroed(len);
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            rng.fill_bytes(candidate.as_mut_slice());
            candidate.as_mut_slice()[0] &= top_mask;

            let below_order = ct_lt_be(candidate.as_slice(), C::ORDER);
            let zero = candidate.as_slice().ct_eq(&vec![0u8; len][..]);
            if bool::from(below_order & !zero) {
                if attempts > 1 {
                    log::trace!("{} scalar sampled after {} attempts", C::NAME, attempts);
                }
                return Self {
                    bytes: candidate,
                    _curve: PhantomData,
                };
            }
        }
    }

    pub fn is_zero(&self) -> Choice {
        let zero = vec![0u8; self.bytes.len()];
        self.bytes.as_slice().ct_eq(&zero[..])
    }

    /// Position of the highest set bit plus one; zero for the zero scalar.
    ///
    /// Not constant time.
    pub fn bit_length(&self) -> usize {
        nat::be_bit_length(self.bytes.as_slice())
    }

    /// Big-endian encoding, `scalar_bytes()` long.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    pub fn to_secret_bytes(&self) -> SecretVec {
        self.bytes.clone()
    }
}

impl<C: Curve> Zeroize for Scalar<C> {
    fn zeroize(&mut self) {
        self.bytes.as_mut_slice().zeroize();
    }
}

impl<C: Curve> ConstantTimeEq for Scalar<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.as_slice().ct_eq(other.bytes.as_slice())
    }
}

impl<C: Curve> PartialEq for Scalar<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: Curve> Eq for Scalar<C> {}

impl<C: Curve> fmt::Debug for Scalar<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar<{}>([REDACTED])", C::NAME)
    }
}
