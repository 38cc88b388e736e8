//! Error type definitions for elliptic-curve operations

use thiserror::Error as ThisError;

/// Primary error type for every eccore operation
///
/// Each variant names the operation that failed in `context`. None of these
/// conditions is transient: they signal malformed input or misuse of an
/// algorithm instance and abort only the current operation.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Coordinates fail the curve equation or the identity was supplied where disallowed
    #[error("{context}: invalid point: {reason}")]
    InvalidPoint {
        context: &'static str,
        reason: &'static str,
    },

    /// Operation invoked before its keys or parameters were set
    #[error("{context}: not initialised")]
    Uninitialized { context: &'static str },

    /// Wrong parameter kind for the selected algorithm instance
    #[error("{context}: {expected} are required")]
    ParameterTypeMismatch {
        context: &'static str,
        expected: &'static str,
    },

    /// Requested output exceeds the provided capacity
    #[error("{context}: output buffer too small (needed {needed}, available {available})")]
    BufferTooSmall {
        context: &'static str,
        needed: usize,
        available: usize,
    },

    /// Scalar outside the range required by the operation
    #[error("{context}: invalid scalar: {reason}")]
    InvalidScalar {
        context: &'static str,
        reason: &'static str,
    },

    /// Fixed-width input of the wrong length
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Malformed field or point encoding
    #[error("{context}: invalid encoding: {reason}")]
    InvalidEncoding {
        context: &'static str,
        reason: &'static str,
    },

    /// Inversion of the zero field element
    #[error("{context}: zero has no inverse")]
    NotInvertible { context: &'static str },

    /// The 32-bit block counter of a derivation function would wrap
    #[error("{context}: block counter exhausted")]
    CounterExhausted { context: &'static str },
}

impl Error {
    /// Shorthand for an [`Error::InvalidPoint`]
    pub fn point(context: &'static str, reason: &'static str) -> Self {
        Error::InvalidPoint { context, reason }
    }

    /// Shorthand for an [`Error::InvalidEncoding`]
    pub fn encoding(context: &'static str, reason: &'static str) -> Self {
        Error::InvalidEncoding { context, reason }
    }

    /// Shorthand for an [`Error::InvalidScalar`]
    pub fn scalar(context: &'static str, reason: &'static str) -> Self {
        Error::InvalidScalar { context, reason }
    }

    /// Returns the operation context carried by every variant
    pub fn context(&self) -> &'static str {
        match self {
            Error::InvalidPoint { context, .. }
            | Error::Uninitialized { context }
            | Error::ParameterTypeMismatch { context, .. }
            | Error::BufferTooSmall { context, .. }
            | Error::InvalidScalar { context, .. }
            | Error::InvalidLength { context, .. }
            | Error::InvalidEncoding { context, .. }
            | Error::NotInvertible { context }
            | Error::CounterExhausted { context } => context,
        }
    }
}

/// Result type for eccore operations
pub type Result<T> = core::result::Result<T, Error>;
