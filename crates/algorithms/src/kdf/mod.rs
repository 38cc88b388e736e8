//! Digest-based key derivation
//!
//! Two block layouts are supported, both iterating a hash over the shared
//! secret and a 32-bit big-endian counter:
//!
//! - counter mode (BSI TR-03111): `D(z ‖ BE32(counter) ‖ nonce)`, starting at
//!   a caller-chosen counter and continuing across calls
//! - KDF2 (ANSI X9.63): `D(z ‖ BE32(counter) ‖ shared_info)`, counter from 1
//!   on every call

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use eccore_common::SecretVec;

mod counter;

pub use counter::CounterKdf;

/// Parameters for counter-mode derivation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CounterParameters {
    pub(crate) z: SecretVec,
    pub(crate) nonce: Option<Vec<u8>>,
    pub(crate) start_counter: u32,
}

impl CounterParameters {
    pub fn new(z: &[u8], nonce: Option<&[u8]>, start_counter: u32) -> Self {
        Self {
            z: SecretVec::from_slice(z),
            nonce: nonce.map(<[u8]>::to_vec),
            start_counter,
        }
    }
}

impl fmt::Debug for CounterParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterParameters")
            .field("z", &self.z)
            .field("nonce_len", &self.nonce.as_ref().map(Vec::len))
            .field("start_counter", &self.start_counter)
            .finish()
    }
}

/// Parameters for ANSI X9.63 / KDF2 derivation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Kdf2Parameters {
    pub(crate) z: SecretVec,
    pub(crate) shared_info: Vec<u8>,
}

impl Kdf2Parameters {
    pub fn new(z: &[u8], shared_info: &[u8]) -> Self {
        Self {
            z: SecretVec::from_slice(z),
            shared_info: shared_info.to_vec(),
        }
    }
}

impl fmt::Debug for Kdf2Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kdf2Parameters")
            .field("z", &self.z)
            .field("shared_info_len", &self.shared_info.len())
            .finish()
    }
}

/// Every parameter kind a derivation function may be initialised with
#[derive(Clone, Debug)]
pub enum DerivationParameters {
    Counter(CounterParameters),
    Kdf2(Kdf2Parameters),
}

impl From<CounterParameters> for DerivationParameters {
    fn from(p: CounterParameters) -> Self {
        DerivationParameters::Counter(p)
    }
}

impl From<Kdf2Parameters> for DerivationParameters {
    fn from(p: Kdf2Parameters) -> Self {
        DerivationParameters::Kdf2(p)
    }
}

#[cfg(test)]
mod tests;
