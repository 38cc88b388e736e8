use super::*;
use crate::error::Error;
use eccore_api::DerivationFunction;
use sha2::{Digest, Sha256};

fn reference_block(z: &[u8], counter: u32, suffix: &[u8]) -> Vec<u8> {
    let mut h = Sha256::new();
    h.update(z);
    h.update(counter.to_be_bytes());
    h.update(suffix);
    h.finalize().to_vec()
}

fn counter_kdf(z: &[u8], nonce: Option<&[u8]>, start: u32) -> CounterKdf<Sha256> {
    let mut kdf = CounterKdf::<Sha256>::new();
    kdf.init(CounterParameters::new(z, nonce, start).into()).unwrap();
    kdf
}

#[test]
fn test_counter_mode_matches_block_definition() {
    let z = [0x11u8; 32];
    let nonce = b"nonce";
    let mut kdf = counter_kdf(&z, Some(nonce), 7);

    let mut out = [0u8; 40];
    assert_eq!(kdf.generate_bytes(&mut out, 0, 40).unwrap(), 40);

    let mut expected = reference_block(&z, 7, nonce);
    expected.extend(reference_block(&z, 8, nonce));
    assert_eq!(&out[..], &expected[..40]);
    assert_eq!(kdf.next_counter(), Some(9));
}

#[test]
fn test_counter_mode_without_nonce_still_advances() {
    let z = [0x22u8; 16];
    let mut kdf = counter_kdf(&z, None, 1);

    let mut first = [0u8; 32];
    let mut second = [0u8; 32];
    kdf.generate_bytes(&mut first, 0, 32).unwrap();
    kdf.generate_bytes(&mut second, 0, 32).unwrap();

    assert_eq!(first.to_vec(), reference_block(&z, 1, &[]));
    assert_eq!(second.to_vec(), reference_block(&z, 2, &[]));
    assert_ne!(first, second);
}

#[test]
fn test_counter_mode_is_deterministic() {
    let z = [0x33u8; 32];
    let mut a = counter_kdf(&z, Some(b"r"), 3);
    let mut b = counter_kdf(&z, Some(b"r"), 3);
    let mut out_a = [0u8; 100];
    let mut out_b = [0u8; 100];
    a.generate_bytes(&mut out_a, 0, 100).unwrap();
    b.generate_bytes(&mut out_b, 0, 100).unwrap();
    assert_eq!(out_a, out_b);
}

#[test]
fn test_kdf2_restarts_each_call() {
    let z = b"shared secret";
    let info = b"context";
    let mut kdf = CounterKdf::<Sha256>::new();
    kdf.init(Kdf2Parameters::new(z, info).into()).unwrap();

    let mut out = [0u8; 48];
    kdf.generate_bytes(&mut out, 0, 48).unwrap();
    let mut expected = reference_block(z, 1, info);
    expected.extend(reference_block(z, 2, info));
    assert_eq!(&out[..], &expected[..48]);

    let mut again = [0u8; 48];
    kdf.generate_bytes(&mut again, 0, 48).unwrap();
    assert_eq!(out, again);
    assert_eq!(kdf.next_counter(), None);
}

#[test]
fn test_offset_writes_only_requested_range() {
    let z = [0x44u8; 32];
    let mut kdf = counter_kdf(&z, None, 0);
    let mut out = [0xaau8; 20];
    kdf.generate_bytes(&mut out, 4, 10).unwrap();

    assert_eq!(&out[..4], &[0xaa; 4]);
    assert_eq!(&out[4..14], &reference_block(&z, 0, &[])[..10]);
    assert_eq!(&out[14..], &[0xaa; 6]);
}

#[test]
fn test_short_buffer_is_rejected_untouched() {
    let mut kdf = counter_kdf(&[1u8; 32], None, 1);
    let mut out = [0u8; 16];
    let err = kdf.generate_bytes(&mut out, 8, 9).unwrap_err();
    assert!(matches!(
        err,
        Error::BufferTooSmall {
            needed: 17,
            available: 16,
            ..
        }
    ));
    assert_eq!(out, [0u8; 16]);
    // counter did not move
    assert_eq!(kdf.next_counter(), Some(1));

    assert!(matches!(
        kdf.generate_bytes(&mut out, usize::MAX, 2),
        Err(Error::BufferTooSmall { .. })
    ));
}

#[test]
fn test_counter_exhaustion() {
    let mut kdf = counter_kdf(&[5u8; 32], None, u32::MAX);
    let mut out = [0u8; 64];
    assert!(matches!(
        kdf.generate_bytes(&mut out, 0, 33),
        Err(Error::CounterExhausted { .. })
    ));
    assert_eq!(out, [0u8; 64]);

    // the final counter value is still usable once
    kdf.generate_bytes(&mut out, 0, 32).unwrap();
    assert!(matches!(
        kdf.generate_bytes(&mut out, 0, 1),
        Err(Error::CounterExhausted { .. })
    ));
    assert_eq!(kdf.generate_bytes(&mut out, 0, 0).unwrap(), 0);
}

#[test]
fn test_uninitialised_and_reset() {
    let mut kdf = CounterKdf::<Sha256>::default();
    let mut out = [0u8; 8];
    assert!(matches!(
        kdf.generate_bytes(&mut out, 0, 8),
        Err(Error::Uninitialized { .. })
    ));

    kdf.init(CounterParameters::new(&[9u8; 32], None, 1).into()).unwrap();
    kdf.generate_bytes(&mut out, 0, 8).unwrap();
    kdf.reset();
    assert!(matches!(
        kdf.generate_bytes(&mut out, 0, 8),
        Err(Error::Uninitialized { .. })
    ));
    assert_eq!(CounterKdf::<Sha256>::block_size(), 32);
}

#[test]
fn test_parameters_debug_hides_secret() {
    let params = CounterParameters::new(&[0x5au8; 4], Some(b"abc"), 2);
    let shown = format!("{:?}", params);
    assert!(shown.contains("REDACTED"));
    assert!(!shown.contains("90"));
}
