//! Raw ECDH (SEC 1 v2, section 3.3.1)

use eccore_algorithms::{Curve, Field, KeyParameters, PrivateKey, PublicKey};
use eccore_api::error::validate;
use eccore_api::{Error, RawAgreement, Result};
use eccore_common::SecretVec;

const CONTEXT: &str = "EC basic agreement";

/// The x-coordinate of `d·Q` as `Field::BYTES` big-endian bytes.
///
/// The peer point is re-normalized before use and must not be the identity;
/// a shared point at infinity is rejected as well.
pub fn agree<C: Curve>(private: &PrivateKey<C>, peer: &PublicKey<C>) -> Result<SecretVec> {
    let q = peer.to_projective().clean()?;
    validate::point(
        !bool::from(q.is_identity()),
        CONTEXT,
        "peer public key is the point at infinity",
    )?;

    let shared = q.mul(private.scalar()).to_affine();
    if bool::from(shared.is_identity()) {
        log::debug!("{} agreement produced the point at infinity", C::NAME);
        return Err(Error::point(CONTEXT, "shared point is the point at infinity"));
    }

    let mut out = SecretVec::zeroed(C::Field::BYTES);
    shared.x().write_be_bytes(out.as_mut_slice());
    Ok(out)
}

/// Basic ECDH agreement bound to one private key.
#[derive(Clone, Debug)]
pub struct EcdhBasicAgreement<C: Curve> {
    key: Option<PrivateKey<C>>,
}

impl<C: Curve> EcdhBasicAgreement<C> {
    pub fn new() -> Self {
        Self { key: None }
    }
}

impl<C: Curve> Default for EcdhBasicAgreement<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Curve> RawAgreement for EcdhBasicAgreement<C> {
    type Parameters = KeyParameters<C>;
    type PublicParameters = KeyParameters<C>;

    fn init(&mut self, params: &KeyParameters<C>) -> Result<()> {
        match params {
            KeyParameters::Private(key) => {
                self.key = Some(key.clone());
                Ok(())
            }
            other => {
                log::debug!("{} rejected {}", CONTEXT, other.kind());
                Err(Error::ParameterTypeMismatch {
                    context: CONTEXT,
                    expected: "EC private key parameters",
                })
            }
        }
    }

    fn agreement_size(&self) -> usize {
        C::Field::BYTES
    }

    fn calculate_agreement(
        &mut self,
        public: &KeyParameters<C>,
        out: &mut [u8],
        offset: usize,
    ) -> Result<()> {
        let key = validate::initialized(self.key.as_ref(), CONTEXT)?;
        let KeyParameters::Public(peer) = public else {
            return Err(Error::ParameterTypeMismatch {
                context: CONTEXT,
                expected: "EC public key parameters",
            });
        };
        let size = self.agreement_size();
        validate::output_capacity(CONTEXT, offset, size, out.len())?;

        let secret = agree(key, peer)?;
        out[offset..offset + size].copy_from_slice(secret.as_slice());
        Ok(())
    }

    fn reset(&mut self) {
        // PrivateKey wipes itself on drop
        self.key = None;
    }
}

#[cfg(test)]
mod tests;
