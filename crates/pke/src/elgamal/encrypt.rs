use eccore_algorithms::{Curve, KeyParameters, PrivateKey, ProjectivePoint};
use eccore_api::error::validate;
use eccore_api::pke::{PointDecryptor, PointEncryptor};
use eccore_api::{Error, Result};

use super::{EcPair, PublicContext, TransformParameters};

const ENCRYPT_CONTEXT: &str = "EC ElGamal encryptor";
const DECRYPT_CONTEXT: &str = "EC ElGamal decryptor";

/// Encrypts message points under a public key.
#[derive(Default)]
pub struct ElGamalEncryptor<C: Curve> {
    ctx: Option<PublicContext<C>>,
}

impl<C: Curve> ElGamalEncryptor<C> {
    pub fn new() -> Self {
        Self { ctx: None }
    }
}

impl<C: Curve> PointEncryptor for ElGamalEncryptor<C> {
    type Parameters = TransformParameters<C>;
    type Point = ProjectivePoint<C>;
    type Pair = EcPair<C>;

    fn init(&mut self, params: TransformParameters<C>) -> Result<()> {
        self.ctx = Some(PublicContext::from_parameters(params, ENCRYPT_CONTEXT)?);
        Ok(())
    }

    /// `(k·G, k·Q + M)`
    fn encrypt(&mut self, m: &ProjectivePoint<C>) -> Result<EcPair<C>> {
        let ctx = validate::initialized(self.ctx.as_mut(), ENCRYPT_CONTEXT)?;
        let m = m.clean()?;
        let (_k, kg, kq) = ctx.blind();
        Ok(EcPair::normalized(kg, kq.add(&m)))
    }
}

/// Recovers message points with the private key.
#[derive(Default)]
pub struct ElGamalDecryptor<C: Curve> {
    key: Option<PrivateKey<C>>,
}

impl<C: Curve> ElGamalDecryptor<C> {
    pub fn new() -> Self {
        Self { key: None }
    }
}

impl<C: Curve> PointDecryptor for ElGamalDecryptor<C> {
    type Parameters = KeyParameters<C>;
    type Point = ProjectivePoint<C>;
    type Pair = EcPair<C>;

    fn init(&mut self, params: KeyParameters<C>) -> Result<()> {
        match params {
            KeyParameters::Private(key) => {
                self.key = Some(key);
                Ok(())
            }
            _ => Err(Error::ParameterTypeMismatch {
                context: DECRYPT_CONTEXT,
                expected: "EC private key parameters",
            }),
        }
    }

    /// `phi − d·gamma`
    fn decrypt(&self, pair: &EcPair<C>) -> Result<ProjectivePoint<C>> {
        let d = validate::initialized(self.key.as_ref(), DECRYPT_CONTEXT)?;
        let gamma = pair.gamma().clean()?;
        let phi = pair.phi().clean()?;
        Ok(phi.sub(&gamma.mul(d.scalar())).to_affine().into())
    }
}
