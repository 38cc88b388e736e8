//! Property-based tests for the group law and scalar multiplication

use eccore_algorithms::{CombMultiplier, Curve, ProjectivePoint, Scalar};
use eccore_tests::{for_each_curve, random_point, rng};
use proptest::prelude::*;

fn addition_commutes<C: Curve>(seed: u64) {
    let mut rng = rng(seed);
    let (p, q) = (random_point::<C>(&mut rng), random_point::<C>(&mut rng));
    assert_eq!(p.add(&q), q.add(&p));
    assert_eq!(p.add_mixed(&q.to_affine()), q.add_mixed(&p.to_affine()));
}

fn addition_associates<C: Curve>(seed: u64) {
    let mut rng = rng(seed);
    let p = random_point::<C>(&mut rng);
    let q = random_point::<C>(&mut rng);
    let r = random_point::<C>(&mut rng);
    assert_eq!(p.add(&q).add(&r), p.add(&q.add(&r)));
}

fn multiples_stay_on_curve<C: Curve>(seed: u64) {
    let mut rng = rng(seed);
    let p = random_point::<C>(&mut rng);
    let k = Scalar::<C>::random(&mut rng);
    let kp = p.mul(&k);
    assert!(bool::from(kp.is_on_curve()));
    assert!(bool::from(p.mul(&Scalar::zero()).is_identity()));
    assert_eq!(p.mul(&Scalar::from_u64(1).unwrap()), p);

    let comb = CombMultiplier::new(&p);
    assert!(bool::from(comb.multiply_bytes(C::ORDER).unwrap().is_identity()));
}

fn scalar_multiplication_distributes<C: Curve>(seed: u64) {
    let mut rng = rng(seed);
    let p = random_point::<C>(&mut rng);
    let a = Scalar::<C>::random(&mut rng);
    let b = Scalar::<C>::random(&mut rng);
    // a·(b·P) = b·(a·P)
    assert_eq!(p.mul(&b).mul(&a), p.mul(&a).mul(&b));
}

fn batch_normalization_matches<C: Curve>(seed: u64) {
    let mut rng = rng(seed);
    let points: Vec<ProjectivePoint<C>> = (0..6)
        .map(|i| {
            if i == 2 {
                ProjectivePoint::identity()
            } else {
                random_point::<C>(&mut rng).double()
            }
        })
        .collect();
    let affine = ProjectivePoint::normalize_all(&points);
    for (p, a) in points.iter().zip(affine.iter()) {
        assert_eq!(p.to_affine(), *a);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn point_addition_is_commutative(seed in any::<u64>()) {
        for_each_curve!(addition_commutes, seed);
    }

    #[test]
    fn point_addition_is_associative(seed in any::<u64>()) {
        for_each_curve!(addition_associates, seed);
    }

    #[test]
    fn scalar_multiples_are_valid(seed in any::<u64>()) {
        for_each_curve!(multiples_stay_on_curve, seed);
    }

    #[test]
    fn scalar_multiplication_commutes(seed in any::<u64>()) {
        for_each_curve!(scalar_multiplication_distributes, seed);
    }

    #[test]
    fn normalize_all_agrees_with_to_affine(seed in any::<u64>()) {
        for_each_curve!(batch_normalization_matches, seed);
    }
}
