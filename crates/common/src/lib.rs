//! Shared secret-holding types for the eccore library
//!
//! Everything that carries secret bytes across crate boundaries (agreement
//! outputs, scalar encodings, digest scratch blocks) goes through these
//! wrappers so that zeroization happens on every exit path.

pub mod security;

pub use security::{SecretVec, ZeroizeGuard};
