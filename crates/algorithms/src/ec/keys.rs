//! Key types and the key-parameter sum type consumed by protocol layers

use core::fmt;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ec::{AffinePoint, Curve, ProjectivePoint, Scalar};
use crate::error::{Error, Result};

/// A private scalar `d` in `[1, n − 1]`.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey<C: Curve> {
    scalar: Scalar<C>,
}

impl<C: Curve> PrivateKey<C> {
    /// # Errors
    /// `InvalidScalar` for zero.
    pub fn from_scalar(scalar: Scalar<C>) -> Result<Self> {
        if bool::from(scalar.is_zero()) {
            return Err(Error::scalar(C::NAME, "private key must be non-zero"));
        }
        Ok(Self { scalar })
    }

    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_scalar(Scalar::from_be_bytes(bytes)?)
    }

    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self {
            scalar: Scalar::random(rng),
        }
    }

    pub fn scalar(&self) -> &Scalar<C> {
        &self.scalar
    }

    /// `Q = d·G`
    pub fn public_key(&self) -> PublicKey<C> {
        PublicKey {
            point: ProjectivePoint::mul_generator(&self.scalar).to_affine(),
        }
    }
}

impl<C: Curve> Zeroize for PrivateKey<C> {
    fn zeroize(&mut self) {
        self.scalar.zeroize();
    }
}

impl<C: Curve> ZeroizeOnDrop for PrivateKey<C> {}

impl<C: Curve> fmt::Debug for PrivateKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey<{}>([REDACTED])", C::NAME)
    }
}

/// A validated public point, never the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey<C: Curve> {
    point: AffinePoint<C>,
}

impl<C: Curve> PublicKey<C> {
    /// # Errors
    /// `InvalidPoint` for the identity or a point failing validation.
    pub fn from_affine(point: AffinePoint<C>) -> Result<Self> {
        if bool::from(point.is_identity()) {
            return Err(Error::point(C::NAME, "public key is the point at infinity"));
        }
        point.validate()?;
        Ok(Self { point })
    }

    pub fn from_sec1(bytes: &[u8]) -> Result<Self> {
        Self::from_affine(AffinePoint::from_sec1(bytes)?)
    }

    pub fn to_sec1(&self, compress: bool) -> Vec<u8> {
        self.point.to_sec1(compress)
    }

    pub fn as_affine(&self) -> &AffinePoint<C> {
        &self.point
    }

    pub fn to_projective(&self) -> ProjectivePoint<C> {
        self.point.into()
    }
}

/// Generate `(d, d·G)`.
pub fn generate_keypair<C: Curve, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> (PrivateKey<C>, PublicKey<C>) {
    let sk = PrivateKey::random(rng);
    let pk = sk.public_key();
    log::debug!("generated {} key pair", C::NAME);
    (sk, pk)
}

/// Every kind of key material an algorithm instance may be initialised with.
///
/// Consumers match exhaustively and reject the kinds they do not accept
/// with `ParameterTypeMismatch`.
#[derive(Clone, Debug)]
pub enum KeyParameters<C: Curve> {
    Private(PrivateKey<C>),
    Public(PublicKey<C>),
    /// Local ephemeral and static private keys for a unified agreement
    UnifiedPrivate {
        ephemeral: PrivateKey<C>,
        static_key: PrivateKey<C>,
    },
    /// Peer ephemeral and static public keys for a unified agreement
    UnifiedPublic {
        ephemeral: PublicKey<C>,
        static_key: PublicKey<C>,
    },
}

impl<C: Curve> KeyParameters<C> {
    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            KeyParameters::Private(_) => "private key",
            KeyParameters::Public(_) => "public key",
            KeyParameters::UnifiedPrivate { .. } => "unified private keys",
            KeyParameters::UnifiedPublic { .. } => "unified public keys",
        }
    }
}

impl<C: Curve> From<PrivateKey<C>> for KeyParameters<C> {
    fn from(key: PrivateKey<C>) -> Self {
        KeyParameters::Private(key)
    }
}

impl<C: Curve> From<PublicKey<C>> for KeyParameters<C> {
    fn from(key: PublicKey<C>) -> Self {
        KeyParameters::Public(key)
    }
}
