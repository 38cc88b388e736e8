//! EC-ElGamal: message preservation across transforms

use eccore_algorithms::{generate_keypair, Curve, KeyParameters, ProjectivePoint};
use eccore_pke::{
    ElGamalDecryptor, ElGamalEncryptor, NewPublicKeyTransform, NewRandomnessTransform,
    PairFactorTransform, PairTransform, PointDecryptor, PointEncryptor, TransformParameters,
};
use eccore_tests::{for_each_curve, random_point, rng};
use proptest::prelude::*;

fn rerandomization_preserves_message<C: Curve>(seed: u64) {
    let mut rng = rng(seed);
    let (sk, pk) = generate_keypair::<C, _>(&mut rng);
    let m = random_point::<C>(&mut rng);

    let mut enc = ElGamalEncryptor::<C>::new();
    enc.init(TransformParameters::with_random(pk.into(), eccore_tests::rng(seed ^ 1)))
        .unwrap();
    let pair = enc.encrypt(&m).unwrap();

    let mut transform = NewRandomnessTransform::<C>::new();
    transform
        .init(TransformParameters::with_random(pk.into(), eccore_tests::rng(seed ^ 2)))
        .unwrap();
    let out = transform.transform(&pair).unwrap();
    let k = transform.transform_value().unwrap();

    let d = sk.scalar();
    assert_eq!(
        out.phi().sub(&out.gamma().mul(d)),
        pair.phi().sub(&pair.gamma().mul(d))
    );
    assert_eq!(
        *out.gamma(),
        pair.gamma().add(&ProjectivePoint::mul_generator(k))
    );

    let mut dec = ElGamalDecryptor::<C>::new();
    dec.init(KeyParameters::Private(sk)).unwrap();
    assert_eq!(dec.decrypt(&out).unwrap(), m);
}

fn new_public_key_transform_keeps_old_blinding<C: Curve>(seed: u64) {
    let mut rng = rng(seed);
    let (sk, pk) = generate_keypair::<C, _>(&mut rng);
    let m = random_point::<C>(&mut rng);

    let mut enc = ElGamalEncryptor::<C>::new();
    enc.init(TransformParameters::with_random(pk.into(), eccore_tests::rng(seed ^ 3)))
        .unwrap();
    let pair = enc.encrypt(&m).unwrap();

    let mut transform = NewPublicKeyTransform::<C>::new();
    transform
        .init(TransformParameters::with_random(pk.into(), eccore_tests::rng(seed ^ 4)))
        .unwrap();
    let out = transform.transform(&pair).unwrap();

    let d = sk.scalar();
    let recovered = out
        .phi()
        .sub(&out.gamma().mul(d))
        .sub(&pair.gamma().mul(d));
    assert_eq!(recovered, m);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn new_randomness_transform_round_trip(seed in any::<u64>()) {
        for_each_curve!(rerandomization_preserves_message, seed);
    }

    #[test]
    fn new_public_key_transform_round_trip(seed in any::<u64>()) {
        for_each_curve!(new_public_key_transform_keeps_old_blinding, seed);
    }
}
