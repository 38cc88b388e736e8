//! Protocol traits implemented by the eccore algorithm crates

pub mod agreement;
pub mod kdf;
pub mod pke;

pub use agreement::RawAgreement;
pub use kdf::DerivationFunction;
pub use pke::{PairFactorTransform, PairTransform, PointDecryptor, PointEncryptor};
