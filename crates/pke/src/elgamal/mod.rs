//! EC-ElGamal over the eccore curves

use core::fmt;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use eccore_algorithms::{CombMultiplier, Curve, KeyParameters, ProjectivePoint, PublicKey, Scalar};
use eccore_api::{Error, Result};

mod encrypt;
mod transform;

pub use encrypt::{ElGamalDecryptor, ElGamalEncryptor};
pub use transform::{NewPublicKeyTransform, NewRandomnessTransform};

/// A random source usable for blinding scalars.
pub trait SecureRandom: RngCore + CryptoRng + Send {}

impl<T: RngCore + CryptoRng + Send> SecureRandom for T {}

/// An EC-ElGamal ciphertext `(gamma, phi)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcPair<C: Curve> {
    gamma: ProjectivePoint<C>,
    phi: ProjectivePoint<C>,
}

impl<C: Curve> EcPair<C> {
    pub fn new(gamma: ProjectivePoint<C>, phi: ProjectivePoint<C>) -> Self {
        Self { gamma, phi }
    }

    /// `k·G`
    pub fn gamma(&self) -> &ProjectivePoint<C> {
        &self.gamma
    }

    /// `k·Q + M`
    pub fn phi(&self) -> &ProjectivePoint<C> {
        &self.phi
    }

    /// Both points sharing one field inversion.
    fn normalized(gamma: ProjectivePoint<C>, phi: ProjectivePoint<C>) -> Self {
        let affine = ProjectivePoint::normalize_all(&[gamma, phi]);
        Self {
            gamma: affine[0].into(),
            phi: affine[1].into(),
        }
    }
}

/// Initialisation parameters for the encryptor and the transforms.
///
/// Without an explicit random source the operating system generator is used.
pub enum TransformParameters<C: Curve> {
    Key(KeyParameters<C>),
    WithRandom {
        key: KeyParameters<C>,
        random: Box<dyn SecureRandom>,
    },
}

impl<C: Curve> TransformParameters<C> {
    pub fn with_random<R: SecureRandom + 'static>(key: KeyParameters<C>, random: R) -> Self {
        TransformParameters::WithRandom {
            key,
            random: Box::new(random),
        }
    }
}

impl<C: Curve> From<KeyParameters<C>> for TransformParameters<C> {
    fn from(key: KeyParameters<C>) -> Self {
        TransformParameters::Key(key)
    }
}

impl<C: Curve> From<PublicKey<C>> for TransformParameters<C> {
    fn from(key: PublicKey<C>) -> Self {
        TransformParameters::Key(KeyParameters::Public(key))
    }
}

impl<C: Curve> fmt::Debug for TransformParameters<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformParameters::Key(key) => f.debug_tuple("Key").field(key).finish(),
            TransformParameters::WithRandom { key, .. } => f
                .debug_struct("WithRandom")
                .field("key", key)
                .finish_non_exhaustive(),
        }
    }
}

enum RandomSource {
    Os,
    Injected(Box<dyn SecureRandom>),
}

impl RandomSource {
    fn scalar<C: Curve>(&mut self) -> Scalar<C> {
        match self {
            RandomSource::Os => Scalar::random(&mut OsRng),
            RandomSource::Injected(rng) => {
                let mut rng = rng.as_mut();
                Scalar::random(&mut rng)
            }
        }
    }
}

/// Combs for `G` and a public key `Q`, plus the blinding source.
struct PublicContext<C: Curve> {
    base: &'static CombMultiplier<C>,
    public: CombMultiplier<C>,
    random: RandomSource,
}

impl<C: Curve> PublicContext<C> {
    fn from_parameters(params: TransformParameters<C>, context: &'static str) -> Result<Self> {
        let (key, random) = match params {
            TransformParameters::Key(key) => (key, RandomSource::Os),
            TransformParameters::WithRandom { key, random } => {
                (key, RandomSource::Injected(random))
            }
        };
        let kind = key.kind();
        let KeyParameters::Public(q) = key else {
            log::debug!("{} rejected {}", context, kind);
            return Err(Error::ParameterTypeMismatch {
                context,
                expected: "EC public key parameters",
            });
        };
        log::debug!("{} initialised for {}", context, C::NAME);
        Ok(Self {
            base: C::generator_comb(),
            public: CombMultiplier::new(&q.to_projective()),
            random,
        })
    }

    /// Fresh `k` with `(k·G, k·Q)`.
    fn blind(&mut self) -> (Scalar<C>, ProjectivePoint<C>, ProjectivePoint<C>) {
        let k = self.random.scalar::<C>();
        let kg = self.base.multiply(&k);
        let kq = self.public.multiply(&k);
        (k, kg, kq)
    }
}
