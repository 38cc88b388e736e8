//! Benchmarks for raw and unified ECDH agreement

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eccore_agreement::{agree, EcdhBasicAgreement, KeyParameters, RawAgreement, UnifiedAgreement};
use eccore_algorithms::ec::k256::Secp256k1;
use eccore_algorithms::ec::p224::NistP224;
use eccore_algorithms::ec::p256::NistP256;
use eccore_algorithms::ec::sm2::Sm2P256;
use eccore_algorithms::{generate_keypair, Curve};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_raw<C: Curve>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("ECDH-{}", C::NAME));
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let (sk, _) = generate_keypair::<C, _>(&mut rng);
    let (_, peer) = generate_keypair::<C, _>(&mut rng);

    group.bench_function("keypair", |b| {
        b.iter(|| black_box(generate_keypair::<C, _>(&mut rng)))
    });

    group.bench_function("agree", |b| b.iter(|| black_box(agree(&sk, &peer))));

    let mut agreement = EcdhBasicAgreement::<C>::new();
    let _ = agreement.init(&KeyParameters::Private(sk.clone()));
    let public = KeyParameters::Public(peer);
    let mut out = vec![0u8; agreement.agreement_size()];
    group.bench_function("calculate_agreement", |b| {
        b.iter(|| black_box(agreement.calculate_agreement(&public, &mut out, 0)))
    });

    group.finish();
}

fn bench_unified(c: &mut Criterion) {
    let mut group = c.benchmark_group("ECDH-unified-P-256");
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let (eph, _) = generate_keypair::<NistP256, _>(&mut rng);
    let (st, _) = generate_keypair::<NistP256, _>(&mut rng);
    let (_, peer_eph) = generate_keypair::<NistP256, _>(&mut rng);
    let (_, peer_st) = generate_keypair::<NistP256, _>(&mut rng);

    let mut unified = UnifiedAgreement::<NistP256>::new();
    let _ = unified.init(&KeyParameters::UnifiedPrivate {
        ephemeral: eph,
        static_key: st,
    });
    let public = KeyParameters::UnifiedPublic {
        ephemeral: peer_eph,
        static_key: peer_st,
    };
    let mut out = vec![0u8; unified.agreement_size()];
    group.bench_function("calculate_agreement", |b| {
        b.iter(|| black_box(unified.calculate_agreement(&public, &mut out, 0)))
    });

    group.finish();
}

fn bench_curves(c: &mut Criterion) {
    bench_raw::<NistP224>(c);
    bench_raw::<NistP256>(c);
    bench_raw::<Sm2P256>(c);
    bench_raw::<Secp256k1>(c);
}

criterion_group!(benches, bench_curves, bench_unified);
criterion_main!(benches);
