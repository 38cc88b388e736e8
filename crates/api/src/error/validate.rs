//! Validation utilities shared by the eccore crates

use super::{Error, Result};

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that `offset + len` fits in a buffer of `available` bytes
#[inline(always)]
pub fn output_capacity(
    context: &'static str,
    offset: usize,
    len: usize,
    available: usize,
) -> Result<()> {
    match offset.checked_add(len) {
        Some(needed) if needed <= available => Ok(()),
        Some(needed) => Err(Error::BufferTooSmall {
            context,
            needed,
            available,
        }),
        None => Err(Error::BufferTooSmall {
            context,
            needed: usize::MAX,
            available,
        }),
    }
}

/// Validate that a required value has been set
#[inline(always)]
pub fn initialized<T>(value: Option<T>, context: &'static str) -> Result<T> {
    value.ok_or(Error::Uninitialized { context })
}

/// Validate a point condition
#[inline(always)]
pub fn point(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::point(context, reason));
    }
    Ok(())
}
