//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Slices of different lengths compare unequal; the length itself is not
/// treated as secret.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time `a < b` for equal-length big-endian byte strings
///
/// Computed as the borrow out of the byte-wise subtraction `a - b`.
pub fn ct_lt_be(a: &[u8], b: &[u8]) -> Choice {
    debug_assert_eq!(a.len(), b.len());
    let mut borrow = 0u16;
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        let diff = (*x as u16).wrapping_sub(*y as u16).wrapping_sub(borrow);
        borrow = (diff >> 8) & 1;
    }
    Choice::from(borrow as u8)
}
