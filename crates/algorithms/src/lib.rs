//! Elliptic-curve primitives with constant-structure arithmetic
//!
//! This crate provides the mathematical core of eccore:
//!
//! - prime-field arithmetic with a dedicated reduction routine per modulus
//! - the short Weierstrass group law in affine and Jacobian coordinates
//! - fixed-point comb scalar multiplication
//! - SEC1 point encoding
//! - the counter-mode key derivation function consumed by agreement protocols
//!
//! Secret material (scalars, private keys, derivation state) is wiped on drop.

#![forbid(unsafe_code)]

pub use eccore_api::error;
pub use error::{validate, Error, Result};

pub mod ec;
pub mod kdf;

pub use ec::{
    generate_keypair, AffinePoint, CombMultiplier, CoordinateSystem, Curve, Field, KeyParameters,
    PointFormat, PointMap, PrivateKey, ProjectivePoint, PublicKey, Scalar, ScaleXNegateYPointMap,
};

#[cfg(feature = "p224")]
pub use ec::p224::NistP224;
#[cfg(feature = "p256")]
pub use ec::p256::NistP256;
#[cfg(feature = "sm2")]
pub use ec::sm2::Sm2P256;
#[cfg(feature = "k256")]
pub use ec::k256::Secp256k1;

pub use kdf::{CounterKdf, CounterParameters, DerivationParameters, Kdf2Parameters};
