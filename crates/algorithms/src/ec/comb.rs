//! Fixed-point comb scalar multiplication
//!
//! For a comb of `width` teeth spaced `d` bits apart, the table holds every
//! combination `Σ bⱼ·2^(j·d)·P` for `j < width`. Multiplying then takes `d`
//! rounds of one doubling and one mixed addition, regardless of the scalar.
//! Table lookups scan the whole table with constant-time selection so the
//! memory access pattern does not depend on the scalar bits either.

use subtle::{ConditionallySelectable, ConstantTimeEq};

use crate::ec::{nat, AffinePoint, Curve, ProjectivePoint, Scalar};
use crate::error::{Error, Result};

/// Implements [`Curve::generator_comb`] with a table built on first use and
/// shared for the life of the process.
macro_rules! cached_generator_comb {
    ($curve:ty) => {
        fn generator_comb() -> &'static $crate::ec::CombMultiplier<$curve> {
            // item statics cannot name `Self`
            static COMB: ::once_cell::sync::OnceCell<$crate::ec::CombMultiplier<$curve>> =
                ::once_cell::sync::OnceCell::new();
            COMB.get_or_init($crate::ec::CombMultiplier::for_generator)
        }
    };
}

pub(crate) use cached_generator_comb;

/// A comb precomputed for one base point.
#[derive(Clone, Debug)]
pub struct CombMultiplier<C: Curve> {
    table: Vec<AffinePoint<C>>,
    width: usize,
    spacing: usize,
    size: usize,
}

impl<C: Curve> CombMultiplier<C> {
    /// Comb sizing follows the group order: `size = bitlength(n)`, five teeth
    /// (six above 257 bits), `spacing = ceil(size / width)`.
    pub fn new(base: &ProjectivePoint<C>) -> Self {
        let size = C::order_bits();
        let width = if size > 257 { 6 } else { 5 };
        let spacing = (size + width - 1) / width;

        let mut pow2 = Vec::with_capacity(width);
        pow2.push(*base);
        for j in 1..width {
            let prev = pow2[j - 1];
            pow2.push(prev.double_n(spacing));
        }

        let n = 1usize << width;
        let mut table = Vec::with_capacity(n);
        table.push(ProjectivePoint::identity());
        for (j, tooth) in pow2.iter().enumerate() {
            let stride = 1usize << j;
            for i in 0..stride {
                let entry = table[i].add(tooth);
                debug_assert_eq!(table.len(), stride + i);
                table.push(entry);
            }
        }

        log::trace!(
            "built {} comb: width {}, spacing {}, {} entries",
            C::NAME,
            width,
            spacing,
            n
        );

        Self {
            table: ProjectivePoint::normalize_all(&table),
            width,
            spacing,
            size,
        }
    }

    /// A fresh comb over the curve's base point; [`Curve::generator_comb`]
    /// hands out a shared one.
    pub fn for_generator() -> Self {
        Self::new(&ProjectivePoint::generator())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn spacing(&self) -> usize {
        self.spacing
    }

    /// `k·P` for a reduced scalar.
    pub fn multiply(&self, k: &Scalar<C>) -> ProjectivePoint<C> {
        self.multiply_unchecked(k.as_bytes())
    }

    /// `k·P` for any big-endian integer of at most `bitlength(n)` bits.
    ///
    /// Unlike [`CombMultiplier::multiply`] this accepts `k = n`, which the
    /// subgroup check relies on.
    pub fn multiply_bytes(&self, k: &[u8]) -> Result<ProjectivePoint<C>> {
        if nat::be_bit_length(k) > self.size {
            return Err(Error::scalar(
                "comb multiplier",
                "scalar exceeds the comb size",
            ));
        }
        Ok(self.multiply_unchecked(k))
    }

    fn multiply_unchecked(&self, k: &[u8]) -> ProjectivePoint<C> {
        let mut r = ProjectivePoint::identity();
        for i in (0..self.spacing).rev() {
            r = r.double();
            let mut index = 0usize;
            for j in 0..self.width {
                index |= (nat::be_bit(k, i + j * self.spacing) as usize) << j;
            }
            r = r.add_mixed(&self.lookup(index));
        }
        r
    }

    fn lookup(&self, index: usize) -> AffinePoint<C> {
        let mut out = AffinePoint::identity();
        for (i, entry) in self.table.iter().enumerate() {
            out.conditional_assign(entry, (i as u64).ct_eq(&(index as u64)));
        }
        out
    }
}
