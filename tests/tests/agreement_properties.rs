//! Diffie-Hellman symmetry and unified agreement composition

use eccore_agreement::{agree, KeyParameters, RawAgreement, UnifiedAgreement};
use eccore_algorithms::ec::p256::NistP256;
use eccore_algorithms::{
    generate_keypair, CounterKdf, CounterParameters, Curve, Field, PrivateKey, PublicKey,
};
use eccore_api::DerivationFunction;
use eccore_common::SecretVec;
use eccore_tests::{for_each_curve, rng};
use hex_literal::hex;
use proptest::prelude::*;
use sha2::{Digest, Sha256};

fn agreement_is_symmetric<C: Curve>(seed: u64) {
    let mut rng = rng(seed);
    let (a, a_pub) = generate_keypair::<C, _>(&mut rng);
    let (b, b_pub) = generate_keypair::<C, _>(&mut rng);
    let ab = agree(&a, &b_pub).unwrap();
    let ba = agree(&b, &a_pub).unwrap();
    assert_eq!(ab, ba);
    assert_eq!(ab.len(), C::Field::BYTES);
}

fn unified_is_concatenation<C: Curve>(seed: u64) {
    let mut rng = rng(seed);
    let (eph, _) = generate_keypair::<C, _>(&mut rng);
    let (st, _) = generate_keypair::<C, _>(&mut rng);
    let (_, peer_eph) = generate_keypair::<C, _>(&mut rng);
    let (_, peer_st) = generate_keypair::<C, _>(&mut rng);

    let mut unified = UnifiedAgreement::<C>::new();
    unified
        .init(&KeyParameters::UnifiedPrivate {
            ephemeral: eph.clone(),
            static_key: st.clone(),
        })
        .unwrap();
    let mut out = vec![0u8; unified.agreement_size()];
    unified
        .calculate_agreement(
            &KeyParameters::UnifiedPublic {
                ephemeral: peer_eph,
                static_key: peer_st,
            },
            &mut out,
            0,
        )
        .unwrap();

    let mut expected = agree(&eph, &peer_eph).unwrap();
    expected.extend_from_slice(agree(&st, &peer_st).unwrap().as_slice());
    assert_eq!(out.len(), 2 * C::Field::BYTES);
    assert_eq!(out.as_slice(), expected.as_slice());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn diffie_hellman_symmetry(seed in any::<u64>()) {
        for_each_curve!(agreement_is_symmetric, seed);
    }

    #[test]
    fn unified_output_layout(seed in any::<u64>()) {
        for_each_curve!(unified_is_concatenation, seed);
    }
}

// NIST CAVS ECC CDH, P-256, COUNT = 0
#[test]
fn test_cdh_vector_feeds_key_derivation() {
    let d = PrivateKey::<NistP256>::from_be_bytes(&hex!(
        "7d7dc5f71eb29ddaf80d6214632eeae03d9058af1fb6d22ed80badb62bc1a534"
    ))
    .unwrap();
    let mut encoded = vec![0x04];
    encoded.extend_from_slice(&hex!(
        "700c48f77f56584c5cc632ca65640db91b6bacce3a4df6b42ce7cc838833d287"
    ));
    encoded.extend_from_slice(&hex!(
        "db71e509e3fd9b060ddb20ba5c51dcc5948d46fbf640dfe0441782cab85fa4ac"
    ));
    let peer = PublicKey::<NistP256>::from_sec1(&encoded).unwrap();

    let z: SecretVec = agree(&d, &peer).unwrap();
    assert_eq!(
        z.as_slice(),
        &hex!("46fc62106420ff012e54a434fbdd2d25ccc5852060561e68040dd7778997bd7b")
    );

    let nonce = hex!("a1a2a3a4");
    let mut kdf = CounterKdf::<Sha256>::new();
    kdf.init(CounterParameters::new(z.as_slice(), Some(&nonce[..]), 1).into())
        .unwrap();
    let mut key = [0u8; 48];
    kdf.generate_bytes(&mut key, 0, 48).unwrap();

    let block = |counter: u32| {
        Sha256::new()
            .chain_update(z.as_slice())
            .chain_update(counter.to_be_bytes())
            .chain_update(nonce)
            .finalize()
    };
    assert_eq!(&key[..32], block(1).as_slice());
    assert_eq!(&key[32..], &block(2)[..16]);
}
