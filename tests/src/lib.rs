//! Shared helpers for the eccore integration tests

use eccore_algorithms::{Curve, ProjectivePoint, Scalar};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

pub use eccore_algorithms;

/// Deterministic generator for a proptest-supplied seed.
pub fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// A uniformly random non-identity point of the prime-order subgroup.
pub fn random_point<C: Curve>(rng: &mut ChaCha20Rng) -> ProjectivePoint<C> {
    ProjectivePoint::mul_generator(&Scalar::random(rng))
}

/// Runs a generic property body against every built-in curve.
#[macro_export]
macro_rules! for_each_curve {
    ($f:ident, $($arg:expr),*) => {{
        $f::<$crate::eccore_algorithms::ec::p224::NistP224>($($arg),*);
        $f::<$crate::eccore_algorithms::ec::p256::NistP256>($($arg),*);
        $f::<$crate::eccore_algorithms::ec::sm2::Sm2P256>($($arg),*);
        $f::<$crate::eccore_algorithms::ec::k256::Secp256k1>($($arg),*);
        $f::<$crate::eccore_algorithms::ec::dev::Toy17>($($arg),*);
    }};
}
