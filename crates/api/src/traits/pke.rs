//! Trait definitions for EC-ElGamal style point encryption and transforms

use crate::Result;

/// Encrypts a group element into a two-element ciphertext.
pub trait PointEncryptor {
    type Parameters;
    type Point;
    type Pair;

    fn init(&mut self, params: Self::Parameters) -> Result<()>;

    fn encrypt(&mut self, point: &Self::Point) -> Result<Self::Pair>;
}

/// Recovers the group element carried by a two-element ciphertext.
pub trait PointDecryptor {
    type Parameters;
    type Point;
    type Pair;

    fn init(&mut self, params: Self::Parameters) -> Result<()>;

    fn decrypt(&self, pair: &Self::Pair) -> Result<Self::Point>;
}

/// Transforms a ciphertext pair without decrypting it.
pub trait PairTransform {
    /// Parameter sum type accepted by [`PairTransform::init`]
    type Parameters;

    /// Ciphertext representation
    type Pair;

    /// Installs the public key and, optionally, a random source.
    fn init(&mut self, params: Self::Parameters) -> Result<()>;

    /// Returns the transformed ciphertext.
    ///
    /// # Errors
    /// `Uninitialized` before `init`; `InvalidPoint` for malformed input points.
    fn transform(&mut self, pair: &Self::Pair) -> Result<Self::Pair>;
}

/// A [`PairTransform`] that also exposes the blinding factor it used.
pub trait PairFactorTransform: PairTransform {
    type Value;

    /// The blinding value used by the most recent `transform`, if any.
    fn transform_value(&self) -> Option<&Self::Value>;
}
