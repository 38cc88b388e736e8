//! Trait definition for key derivation functions

use crate::Result;

/// A stateful generator expanding a shared secret into key material.
pub trait DerivationFunction {
    /// Parameter sum type accepted by [`DerivationFunction::init`]
    type Parameters;

    /// Installs the secret and derivation state. Any previous state is wiped.
    fn init(&mut self, params: Self::Parameters) -> Result<()>;

    /// Fills `out[offset..offset + len]` with the next `len` bytes of output.
    ///
    /// Output continues from where the previous call stopped at block
    /// granularity: every call starts a fresh block with the current counter.
    /// Returns the number of bytes written.
    ///
    /// # Errors
    /// `BufferTooSmall` when `offset + len` exceeds `out.len()`; in that case
    /// nothing is written.
    fn generate_bytes(&mut self, out: &mut [u8], offset: usize, len: usize) -> Result<usize>;

    /// Wipes all derivation state.
    fn reset(&mut self);
}
