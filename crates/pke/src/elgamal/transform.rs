//! Ciphertext transforms that need only the public key

use eccore_algorithms::{Curve, Scalar};
use eccore_api::error::validate;
use eccore_api::{PairFactorTransform, PairTransform, Result};

use super::{EcPair, PublicContext, TransformParameters};

const NEW_KEY_CONTEXT: &str = "EC new public key transform";
const NEW_RANDOMNESS_CONTEXT: &str = "EC new randomness transform";

/// `(gamma, phi) → (k·G, k·Q + phi)`
///
/// The incoming `gamma` is replaced rather than combined, so the result is
/// only decryptable by a party that still holds the original `gamma`.
#[derive(Default)]
pub struct NewPublicKeyTransform<C: Curve> {
    ctx: Option<PublicContext<C>>,
}

impl<C: Curve> NewPublicKeyTransform<C> {
    pub fn new() -> Self {
        Self { ctx: None }
    }
}

impl<C: Curve> PairTransform for NewPublicKeyTransform<C> {
    type Parameters = TransformParameters<C>;
    type Pair = EcPair<C>;

    fn init(&mut self, params: TransformParameters<C>) -> Result<()> {
        self.ctx = Some(PublicContext::from_parameters(params, NEW_KEY_CONTEXT)?);
        Ok(())
    }

    fn transform(&mut self, pair: &EcPair<C>) -> Result<EcPair<C>> {
        let ctx = validate::initialized(self.ctx.as_mut(), NEW_KEY_CONTEXT)?;
        // validated, then dropped
        pair.gamma().clean()?;
        let phi = pair.phi().clean()?;

        let (_k, kg, kq) = ctx.blind();
        log::trace!("{} applied on {}", NEW_KEY_CONTEXT, C::NAME);
        Ok(EcPair::normalized(kg, kq.add(&phi)))
    }
}

/// `(gamma, phi) → (k·G + gamma, k·Q + phi)`, keeping the last `k`.
#[derive(Default)]
pub struct NewRandomnessTransform<C: Curve> {
    ctx: Option<PublicContext<C>>,
    last_k: Option<Scalar<C>>,
}

impl<C: Curve> NewRandomnessTransform<C> {
    pub fn new() -> Self {
        Self {
            ctx: None,
            last_k: None,
        }
    }
}

impl<C: Curve> PairTransform for NewRandomnessTransform<C> {
    type Parameters = TransformParameters<C>;
    type Pair = EcPair<C>;

    fn init(&mut self, params: TransformParameters<C>) -> Result<()> {
        self.ctx = Some(PublicContext::from_parameters(params, NEW_RANDOMNESS_CONTEXT)?);
        self.last_k = None;
        Ok(())
    }

    fn transform(&mut self, pair: &EcPair<C>) -> Result<EcPair<C>> {
        let ctx = validate::initialized(self.ctx.as_mut(), NEW_RANDOMNESS_CONTEXT)?;
        let gamma = pair.gamma().clean()?;
        let phi = pair.phi().clean()?;

        let (k, kg, kq) = ctx.blind();
        self.last_k = Some(k);
        log::trace!("{} applied on {}", NEW_RANDOMNESS_CONTEXT, C::NAME);
        Ok(EcPair::normalized(kg.add(&gamma), kq.add(&phi)))
    }
}

impl<C: Curve> PairFactorTransform for NewRandomnessTransform<C> {
    type Value = Scalar<C>;

    fn transform_value(&self) -> Option<&Scalar<C>> {
        self.last_k.as_ref()
    }
}
