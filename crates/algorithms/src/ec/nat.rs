//! Fixed-width natural-number helpers over little-endian `u32` limbs
//!
//! These are the building blocks shared by every field implementation. Limb 0
//! is the least significant word. Nothing here reduces modulo anything; the
//! per-curve `reduce_wide` routines and [`finish`] take care of that.

use subtle::{Choice, ConditionallySelectable};

/* ------------------------------------------------------------------------ */
/*  Compile-time constructors                                               */
/* ------------------------------------------------------------------------ */

const fn hex_digit(c: u8) -> u32 {
    match c {
        b'0'..=b'9' => (c - b'0') as u32,
        b'a'..=b'f' => (c - b'a' + 10) as u32,
        b'A'..=b'F' => (c - b'A' + 10) as u32,
        _ => panic!("invalid hex digit"),
    }
}

/// Parse exactly `8 * N` big-endian hex digits into `N` limbs.
pub(crate) const fn from_be_hex<const N: usize>(hex: &str) -> [u32; N] {
    let bytes = hex.as_bytes();
    assert!(bytes.len() == N * 8, "hex literal must have 8 digits per limb");
    let mut out = [0u32; N];
    let mut i = 0;
    while i < N * 8 {
        let limb = N - 1 - i / 8;
        out[limb] = (out[limb] << 4) | hex_digit(bytes[i]);
        i += 1;
    }
    out
}

/// `a < b`, evaluated at compile time.
pub(crate) const fn const_lt<const N: usize>(a: &[u32; N], b: &[u32; N]) -> bool {
    let mut i = N;
    while i > 0 {
        i -= 1;
        if a[i] != b[i] {
            return a[i] < b[i];
        }
    }
    false
}

/// `a + v`, wrapping at `2^(32N)`.
pub(crate) const fn add_small<const N: usize>(a: &[u32; N], v: u32) -> [u32; N] {
    let mut out = *a;
    let mut carry = v as u64;
    let mut i = 0;
    while i < N {
        let t = out[i] as u64 + carry;
        out[i] = t as u32;
        carry = t >> 32;
        i += 1;
    }
    out
}

/// `a - v`, wrapping at zero.
pub(crate) const fn sub_small<const N: usize>(a: &[u32; N], v: u32) -> [u32; N] {
    let mut out = *a;
    let mut borrow = v as u64;
    let mut i = 0;
    while i < N {
        let t = (out[i] as u64).wrapping_sub(borrow);
        out[i] = t as u32;
        borrow = (t >> 63) & 1;
        i += 1;
    }
    out
}

/// `a >> bits` for `bits < 32N`.
pub(crate) const fn shr<const N: usize>(a: &[u32; N], bits: usize) -> [u32; N] {
    let words = bits / 32;
    let rem = bits % 32;
    let mut out = [0u32; N];
    let mut i = 0;
    while i + words < N {
        let lo = a[i + words] >> rem;
        let hi = if rem != 0 && i + words + 1 < N {
            a[i + words + 1] << (32 - rem)
        } else {
            0
        };
        out[i] = lo | hi;
        i += 1;
    }
    out
}

/// Number of trailing zero bits; `32N` for zero.
pub(crate) const fn trailing_zeros<const N: usize>(a: &[u32; N]) -> usize {
    let mut i = 0;
    while i < N {
        if a[i] != 0 {
            return i * 32 + a[i].trailing_zeros() as usize;
        }
        i += 1;
    }
    N * 32
}

/* ------------------------------------------------------------------------ */
/*  Runtime arithmetic                                                      */
/* ------------------------------------------------------------------------ */

/// Limb-wise addition, returning the sum and the carry-out (0 or 1).
#[inline(always)]
pub(crate) fn adc<const N: usize>(a: &[u32; N], b: &[u32; N]) -> ([u32; N], u32) {
    let mut out = [0u32; N];
    let mut carry = 0u64;
    for i in 0..N {
        let t = a[i] as u64 + b[i] as u64 + carry;
        out[i] = t as u32;
        carry = t >> 32;
    }
    (out, carry as u32)
}

/// Limb-wise subtraction, returning the difference and the borrow-out (0 or 1).
#[inline(always)]
pub(crate) fn sbb<const N: usize>(a: &[u32; N], b: &[u32; N]) -> ([u32; N], u32) {
    let mut out = [0u32; N];
    let mut borrow = 0u64;
    for i in 0..N {
        let t = (a[i] as u64).wrapping_sub(b[i] as u64).wrapping_sub(borrow);
        out[i] = t as u32;
        borrow = (t >> 63) & 1;
    }
    (out, borrow as u32)
}

/// Schoolbook product into `W = 2N` limbs.
#[inline(always)]
pub(crate) fn mul_wide<const N: usize, const W: usize>(a: &[u32; N], b: &[u32; N]) -> [u32; W] {
    debug_assert_eq!(W, 2 * N);
    let mut out = [0u32; W];
    for i in 0..N {
        let mut carry = 0u64;
        for j in 0..N {
            let t = out[i + j] as u64 + (a[i] as u64) * (b[j] as u64) + carry;
            out[i + j] = t as u32;
            carry = t >> 32;
        }
        out[i + N] = carry as u32;
    }
    out
}

#[inline(always)]
pub(crate) fn select<const N: usize>(a: &[u32; N], b: &[u32; N], choice: Choice) -> [u32; N] {
    let mut out = [0u32; N];
    for i in 0..N {
        out[i] = u32::conditional_select(&a[i], &b[i], choice);
    }
    out
}

/// Subtract `m` once if `a >= m`.
#[inline(always)]
pub(crate) fn sub_if_gte<const N: usize>(a: &[u32; N], m: &[u32; N]) -> [u32; N] {
    let (diff, borrow) = sbb(a, m);
    select(&diff, a, Choice::from(borrow as u8))
}

/// Signed carry propagation of the word sums produced by a Solinas reduction.
///
/// Returns the low limbs and the signed carry out of the top limb, so that the
/// input equals `limbs + carry * 2^(32N)`.
#[inline(always)]
pub(crate) fn propagate<const N: usize>(w: [i64; N]) -> ([u32; N], i64) {
    let mut out = [0u32; N];
    let mut carry = 0i64;
    for i in 0..N {
        let t = w[i] + carry;
        out[i] = t as u32;
        carry = t >> 32;
    }
    (out, carry)
}

/// Bring `limbs + carry * 2^(32N)` into `[0, m)` where `carry` is in `{-1, 0, 1}`.
#[inline(always)]
pub(crate) fn finish<const N: usize>(limbs: &[u32; N], carry: i64, m: &[u32; N]) -> [u32; N] {
    debug_assert!((-1..=1).contains(&carry));
    let (down, _) = sbb(limbs, m);
    let (up, _) = adc(limbs, m);
    let mut out = select(limbs, &down, Choice::from((carry > 0) as u8));
    out = select(&out, &up, Choice::from((carry < 0) as u8));
    sub_if_gte(&out, m)
}

/// Load big-endian bytes (at most `4N` of them) into limbs.
pub(crate) fn from_be_bytes<const N: usize>(bytes: &[u8]) -> [u32; N] {
    debug_assert!(bytes.len() <= 4 * N);
    let mut out = [0u32; N];
    for (k, byte) in bytes.iter().rev().enumerate() {
        out[k / 4] |= (*byte as u32) << (8 * (k % 4));
    }
    out
}

/// Store the low `out.len()` bytes of `a` in big-endian order.
pub(crate) fn write_be_bytes<const N: usize>(a: &[u32; N], out: &mut [u8]) {
    let len = out.len();
    for (k, byte) in out.iter_mut().rev().enumerate() {
        *byte = (a[k / 4] >> (8 * (k % 4))) as u8;
    }
    debug_assert!(len <= 4 * N);
}

/* ------------------------------------------------------------------------ */
/*  Big-endian byte-string scalars                                          */
/* ------------------------------------------------------------------------ */

/// Bit `pos` (0 = least significant) of a big-endian integer.
#[inline(always)]
pub(crate) fn be_bit(bytes: &[u8], pos: usize) -> u8 {
    let idx = pos / 8;
    if idx >= bytes.len() {
        return 0;
    }
    (bytes[bytes.len() - 1 - idx] >> (pos % 8)) & 1
}

/// Position of the highest set bit plus one; zero for the zero integer.
pub(crate) fn be_bit_length(bytes: &[u8]) -> usize {
    for (i, byte) in bytes.iter().enumerate() {
        if *byte != 0 {
            return (bytes.len() - i) * 8 - byte.leading_zeros() as usize;
        }
    }
    0
}
