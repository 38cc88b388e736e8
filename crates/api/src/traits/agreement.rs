//! Trait definition for raw key agreement

use crate::Result;

/// A Diffie-Hellman style agreement producing a fixed-length secret.
///
/// Implementations are stateful: `init` installs the local private material
/// and `calculate_agreement` combines it with a peer's public material.
/// Parameter kinds are modelled by the implementor's own sum type; passing a
/// variant the instance does not accept yields `ParameterTypeMismatch`.
pub trait RawAgreement {
    /// Local key material accepted by [`RawAgreement::init`]
    type Parameters;

    /// Peer key material accepted by [`RawAgreement::calculate_agreement`]
    type PublicParameters;

    /// Installs the local private material.
    fn init(&mut self, params: &Self::Parameters) -> Result<()>;

    /// Length in bytes of one agreement value.
    fn agreement_size(&self) -> usize;

    /// Writes `agreement_size()` bytes into `out` starting at `offset`.
    ///
    /// # Errors
    /// `Uninitialized` before `init`, `BufferTooSmall` when the output does
    /// not fit, `InvalidPoint` when the peer point or the result is unusable.
    fn calculate_agreement(
        &mut self,
        public: &Self::PublicParameters,
        out: &mut [u8],
        offset: usize,
    ) -> Result<()>;

    /// Drops the installed private material; `calculate_agreement` then
    /// fails with `Uninitialized` until the next `init`.
    fn reset(&mut self);
}
