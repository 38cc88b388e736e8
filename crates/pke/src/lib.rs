//! EC-ElGamal point encryption and ciphertext transforms
//!
//! A ciphertext is a pair `(gamma, phi) = (k·G, k·Q + M)` for a message point
//! `M`, public key `Q` and blinding scalar `k`. Pairs can be re-randomized or
//! rebuilt without access to the private key.

#![forbid(unsafe_code)]

pub mod elgamal;

pub use elgamal::{
    EcPair, ElGamalDecryptor, ElGamalEncryptor, NewPublicKeyTransform, NewRandomnessTransform,
    SecureRandom, TransformParameters,
};
pub use eccore_api::pke::{PairFactorTransform, PairTransform, PointDecryptor, PointEncryptor};
pub use eccore_api::{Error, Result};
