//! # eccore
//!
//! Elliptic-curve arithmetic and the protocols built directly on it.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! eccore = "0.3"
//! ```
//!
//! ## Features
//!
//! - `agreement` (default): raw and unified ECDH
//! - `pke` (default): EC-ElGamal encryption and ciphertext transforms
//! - `dev`: the F₁₇ toy curve used in tests and worked examples
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`eccore-api`]: error type and protocol traits
//! - [`eccore-common`]: zeroizing containers
//! - [`eccore-algorithms`]: fields, curves, points, scalars, key derivation
//! - [`eccore-agreement`]: Diffie-Hellman agreement
//! - [`eccore-pke`]: EC-ElGamal

#![forbid(unsafe_code)]

pub use eccore_algorithms as algorithms;
pub use eccore_api as api;
pub use eccore_common as common;
pub use eccore_internal as internal;

#[cfg(feature = "agreement")]
pub use eccore_agreement as agreement;

#[cfg(feature = "pke")]
pub use eccore_pke as pke;

pub use rand;
pub use sha2;
pub use subtle;
pub use zeroize;

/// Common imports for eccore users
pub mod prelude {
    pub use crate::api::{Error, Result};

    pub use crate::api::{DerivationFunction, PairFactorTransform, PairTransform, RawAgreement};

    pub use crate::api::pke::{PointDecryptor, PointEncryptor};

    pub use crate::algorithms::{
        generate_keypair, AffinePoint, CombMultiplier, Curve, Field, KeyParameters, PointMap,
        PrivateKey, ProjectivePoint, PublicKey, Scalar, ScaleXNegateYPointMap,
    };

    pub use crate::algorithms::{
        CounterKdf, CounterParameters, DerivationParameters, Kdf2Parameters,
    };

    pub use crate::common::{SecretVec, ZeroizeGuard};

    #[cfg(feature = "agreement")]
    pub use crate::agreement::{agree, EcdhBasicAgreement, UnifiedAgreement};

    #[cfg(feature = "pke")]
    pub use crate::pke::{
        EcPair, ElGamalDecryptor, ElGamalEncryptor, NewPublicKeyTransform, NewRandomnessTransform,
        TransformParameters,
    };
}
