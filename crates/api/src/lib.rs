//! Public API traits and error types for the eccore library
//!
//! This crate provides the contract shared by every eccore component: the
//! unified error type and the protocol traits implemented by the agreement,
//! derivation and EC-ElGamal layers.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{DerivationFunction, PairFactorTransform, PairTransform, RawAgreement};

// Re-export trait modules for direct access
pub use traits::{agreement, kdf, pke};
