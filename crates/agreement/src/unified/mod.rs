//! Unified (ephemeral + static) agreement
//!
//! The output is `agree(ephemeral) ‖ agree(static)`, always in that order,
//! computed by one raw agreement instance re-initialised between halves.

use zeroize::Zeroize;

use eccore_algorithms::{Curve, KeyParameters, PrivateKey};
use eccore_api::error::validate;
use eccore_api::{Error, RawAgreement, Result};
use eccore_common::{SecretVec, ZeroizeGuard};

use crate::ecdh::EcdhBasicAgreement;

const CONTEXT: &str = "EC unified agreement";

struct LocalKeys<C: Curve> {
    ephemeral: PrivateKey<C>,
    static_key: PrivateKey<C>,
}

/// Unified agreement over any raw agreement that accepts [`KeyParameters`].
pub struct UnifiedAgreement<C: Curve, A = EcdhBasicAgreement<C>>
where
    A: RawAgreement<Parameters = KeyParameters<C>, PublicParameters = KeyParameters<C>>,
{
    inner: A,
    keys: Option<LocalKeys<C>>,
}

impl<C: Curve> UnifiedAgreement<C> {
    pub fn new() -> Self {
        Self::with_agreement(EcdhBasicAgreement::new())
    }
}

impl<C: Curve> Default for UnifiedAgreement<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, A> UnifiedAgreement<C, A>
where
    C: Curve,
    A: RawAgreement<Parameters = KeyParameters<C>, PublicParameters = KeyParameters<C>>,
{
    pub fn with_agreement(inner: A) -> Self {
        Self { inner, keys: None }
    }
}

impl<C, A> RawAgreement for UnifiedAgreement<C, A>
where
    C: Curve,
    A: RawAgreement<Parameters = KeyParameters<C>, PublicParameters = KeyParameters<C>>,
{
    type Parameters = KeyParameters<C>;
    type PublicParameters = KeyParameters<C>;

    fn init(&mut self, params: &KeyParameters<C>) -> Result<()> {
        let KeyParameters::UnifiedPrivate {
            ephemeral,
            static_key,
        } = params
        else {
            log::debug!("{} rejected {}", CONTEXT, params.kind());
            return Err(Error::ParameterTypeMismatch {
                context: CONTEXT,
                expected: "unified private key parameters",
            });
        };
        self.keys = Some(LocalKeys {
            ephemeral: ephemeral.clone(),
            static_key: static_key.clone(),
        });
        Ok(())
    }

    fn agreement_size(&self) -> usize {
        2 * self.inner.agreement_size()
    }

    fn calculate_agreement(
        &mut self,
        public: &KeyParameters<C>,
        out: &mut [u8],
        offset: usize,
    ) -> Result<()> {
        let keys = validate::initialized(self.keys.as_ref(), CONTEXT)?;
        let KeyParameters::UnifiedPublic {
            ephemeral: peer_ephemeral,
            static_key: peer_static,
        } = public
        else {
            return Err(Error::ParameterTypeMismatch {
                context: CONTEXT,
                expected: "unified public key parameters",
            });
        };
        let half = self.inner.agreement_size();
        validate::output_capacity(CONTEXT, offset, 2 * half, out.len())?;

        // both halves land in scratch first so a failing static half leaves
        // `out` untouched
        let mut scratch = SecretVec::zeroed(2 * half);
        let mut buf = ZeroizeGuard::new(&mut scratch);

        let halves = [
            (&keys.ephemeral, peer_ephemeral, 0),
            (&keys.static_key, peer_static, half),
        ];
        let computed = halves.iter().try_for_each(|(key, peer, at)| {
            self.inner.init(&KeyParameters::Private((*key).clone()))?;
            let peer = KeyParameters::Public(**peer);
            self.inner.calculate_agreement(&peer, buf.as_mut_slice(), *at)
        });
        // the inner instance never keeps a key past one run
        self.inner.reset();
        computed?;

        out[offset..offset + 2 * half].copy_from_slice(buf.as_slice());
        buf.as_mut_slice().zeroize();
        Ok(())
    }

    fn reset(&mut self) {
        self.keys = None;
        self.inner.reset();
    }
}
