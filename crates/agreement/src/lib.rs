//! Elliptic-curve Diffie-Hellman agreement
//!
//! [`EcdhBasicAgreement`] computes the raw shared secret `x(d·Q)`.
//! [`UnifiedAgreement`] runs two of those, one over ephemeral keys and one
//! over static keys, and concatenates the results.
//!
//! Both are initialised with [`KeyParameters`] and reject the variants they
//! do not accept with `ParameterTypeMismatch`.

#![forbid(unsafe_code)]

pub mod ecdh;
pub mod unified;

pub use ecdh::{agree, EcdhBasicAgreement};
pub use eccore_algorithms::KeyParameters;
pub use eccore_api::{Error, RawAgreement, Result};
pub use unified::UnifiedAgreement;
