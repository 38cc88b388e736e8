//! Counter-mode derivation: determinism and block continuity

use eccore_algorithms::{CounterKdf, CounterParameters, Kdf2Parameters};
use eccore_api::DerivationFunction;
use proptest::prelude::*;
use sha2::{Sha256, Sha512};

fn counter_kdf(z: &[u8], nonce: &Option<Vec<u8>>, start: u32) -> CounterKdf<Sha256> {
    let mut kdf = CounterKdf::new();
    kdf.init(CounterParameters::new(z, nonce.as_deref(), start).into())
        .unwrap();
    kdf
}

proptest! {
    #[test]
    fn identical_inputs_give_identical_output(
        z in prop::collection::vec(any::<u8>(), 1..64),
        nonce in prop::option::of(prop::collection::vec(any::<u8>(), 0..16)),
        start in 0u32..1_000_000,
        len in 0usize..200,
    ) {
        let mut a = counter_kdf(&z, &nonce, start);
        let mut b = counter_kdf(&z, &nonce, start);
        let mut out_a = vec![0u8; len];
        let mut out_b = vec![0u8; len];
        a.generate_bytes(&mut out_a, 0, len).unwrap();
        b.generate_bytes(&mut out_b, 0, len).unwrap();
        prop_assert_eq!(out_a, out_b);
    }

    #[test]
    fn sequential_calls_continue_the_stream(
        z in prop::collection::vec(any::<u8>(), 1..64),
        nonce in prop::option::of(prop::collection::vec(any::<u8>(), 0..16)),
        start in 0u32..1_000_000,
        blocks in 1usize..6,
    ) {
        // whole blocks per call, so the split is invisible
        let mut one_shot = counter_kdf(&z, &nonce, start);
        let mut whole = vec![0u8; 32 * blocks];
        one_shot.generate_bytes(&mut whole, 0, 32 * blocks).unwrap();

        let mut stepped = counter_kdf(&z, &nonce, start);
        let mut pieces = vec![0u8; 32 * blocks];
        for i in 0..blocks {
            stepped.generate_bytes(&mut pieces, 32 * i, 32).unwrap();
        }
        prop_assert_eq!(&whole, &pieces);

        // no block repeats within the stream
        let chunks: Vec<&[u8]> = whole.chunks(32).collect();
        for i in 0..chunks.len() {
            for j in i + 1..chunks.len() {
                prop_assert_ne!(chunks[i], chunks[j]);
            }
        }
    }

    #[test]
    fn kdf2_is_a_prefix_stream(
        z in prop::collection::vec(any::<u8>(), 1..64),
        info in prop::collection::vec(any::<u8>(), 0..32),
        short in 1usize..64,
        extra in 0usize..128,
    ) {
        let mut kdf = CounterKdf::<Sha512>::new();
        kdf.init(Kdf2Parameters::new(&z, &info).into()).unwrap();
        let mut a = vec![0u8; short];
        let mut b = vec![0u8; short + extra];
        kdf.generate_bytes(&mut a, 0, short).unwrap();
        kdf.generate_bytes(&mut b, 0, short + extra).unwrap();
        prop_assert_eq!(&a[..], &b[..short]);
    }
}
