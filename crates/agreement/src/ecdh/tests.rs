use super::*;
use eccore_algorithms::ec::dev::Toy17;
use eccore_algorithms::ec::p256::NistP256;
use eccore_algorithms::{generate_keypair, AffinePoint};
use hex_literal::hex;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn toy_key(d: u8) -> PrivateKey<Toy17> {
    PrivateKey::from_be_bytes(&[d]).unwrap()
}

#[test]
fn test_toy_agreement_is_x_of_shared_point() {
    // 7·(3·G) = 21·G = 2·G = (6, 3)
    let peer = toy_key(3).public_key();
    let secret = agree(&toy_key(7), &peer).unwrap();
    assert_eq!(secret.as_slice(), &[6]);
}

#[test]
fn test_nist_cdh_vector() {
    let d = PrivateKey::<NistP256>::from_be_bytes(&hex!(
        "7d7dc5f71eb29ddaf80d6214632eeae03d9058af1fb6d22ed80badb62bc1a534"
    ))
    .unwrap();
    let mut peer = vec![0x04];
    peer.extend_from_slice(&hex!(
        "700c48f77f56584c5cc632ca65640db91b6bacce3a4df6b42ce7cc838833d287"
    ));
    peer.extend_from_slice(&hex!(
        "db71e509e3fd9b060ddb20ba5c51dcc5948d46fbf640dfe0441782cab85fa4ac"
    ));
    let peer = PublicKey::<NistP256>::from_sec1(&peer).unwrap();

    let mut agreement = EcdhBasicAgreement::<NistP256>::new();
    agreement.init(&KeyParameters::Private(d.clone())).unwrap();
    let mut out = [0u8; 32];
    agreement
        .calculate_agreement(&KeyParameters::Public(peer), &mut out, 0)
        .unwrap();
    assert_eq!(
        out,
        hex!("46fc62106420ff012e54a434fbdd2d25ccc5852060561e68040dd7778997bd7b")
    );

    let own = d.public_key().to_sec1(false);
    assert_eq!(
        &own[1..33],
        &hex!("ead218590119e8876b29146ff89ca61770c4edbbf97d38ce385ed281d8a6b230")
    );
}

#[test]
fn test_agreement_is_symmetric() {
    let mut rng = ChaCha20Rng::seed_from_u64(256);
    let (a, a_pub) = generate_keypair::<NistP256, _>(&mut rng);
    let (b, b_pub) = generate_keypair::<NistP256, _>(&mut rng);
    assert_eq!(agree(&a, &b_pub).unwrap(), agree(&b, &a_pub).unwrap());
}

#[test]
fn test_uninitialised_agreement_fails() {
    let mut agreement = EcdhBasicAgreement::<Toy17>::new();
    let mut out = [0u8; 1];
    let err = agreement
        .calculate_agreement(&toy_key(2).public_key().into(), &mut out, 0)
        .unwrap_err();
    assert!(matches!(err, Error::Uninitialized { .. }));
}

#[test]
fn test_wrong_parameter_kinds_are_rejected() {
    let mut agreement = EcdhBasicAgreement::<Toy17>::new();
    let public: KeyParameters<Toy17> = toy_key(2).public_key().into();
    assert!(matches!(
        agreement.init(&public),
        Err(Error::ParameterTypeMismatch { .. })
    ));

    agreement.init(&toy_key(5).into()).unwrap();
    let mut out = [0u8; 1];
    assert!(matches!(
        agreement.calculate_agreement(&toy_key(2).into(), &mut out, 0),
        Err(Error::ParameterTypeMismatch { .. })
    ));
}

#[test]
fn test_output_capacity_is_checked() {
    let mut agreement = EcdhBasicAgreement::<Toy17>::new();
    agreement.init(&toy_key(5).into()).unwrap();
    assert_eq!(agreement.agreement_size(), 1);

    let peer: KeyParameters<Toy17> = toy_key(2).public_key().into();
    let mut out = [0xffu8; 3];
    assert!(matches!(
        agreement.calculate_agreement(&peer, &mut out, 3),
        Err(Error::BufferTooSmall { .. })
    ));
    assert_eq!(out, [0xff; 3]);

    // 5·2·G = 10·G = (7, 11)
    agreement.calculate_agreement(&peer, &mut out, 2).unwrap();
    assert_eq!(out, [0xff, 0xff, 7]);
}

#[test]
fn test_identity_peer_cannot_be_constructed() {
    assert!(PublicKey::<Toy17>::from_affine(AffinePoint::identity()).is_err());
}

#[test]
fn test_reset_drops_private_key() {
    let mut agreement = EcdhBasicAgreement::<Toy17>::new();
    agreement.init(&toy_key(7).into()).unwrap();
    let peer: KeyParameters<Toy17> = toy_key(3).public_key().into();
    let mut out = [0u8; 1];
    agreement.calculate_agreement(&peer, &mut out, 0).unwrap();
    assert_eq!(out, [6]);

    agreement.reset();
    assert!(agreement.key.is_none());
    assert!(matches!(
        agreement.calculate_agreement(&peer, &mut out, 0),
        Err(Error::Uninitialized { .. })
    ));
}
