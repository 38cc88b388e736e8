//! secp256k1 unit tests

use super::*;
use crate::ec::tests::{check_field_axioms, check_group_law};
use crate::ec::{AffinePoint, Curve, Field, PointMap};
use hex_literal::hex;

#[test]
fn test_field_arithmetic() {
    check_field_axioms::<FieldElement>(0x256_1);

    // 2²⁵⁶ ≡ 2³² + 977: square of 2¹²⁸ exercises the fold
    let mut two_128 = [0u8; 32];
    two_128[15] = 1;
    let x = FieldElement::from_be_bytes(&two_128).unwrap();
    assert_eq!(x.square(), FieldElement::from_u64((1 << 32) + 977));
}

#[test]
fn test_generator_multiples() {
    let two_g = AffinePoint::<Secp256k1>::from_coordinates(
        FieldElement::from_be_bytes(&hex!(
            "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"
        ))
        .unwrap(),
        FieldElement::from_be_bytes(&hex!(
            "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a"
        ))
        .unwrap(),
    )
    .unwrap();
    let three_g_x = hex!("f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9");

    let g = Point::generator();
    assert_eq!(g.double().to_affine(), two_g);
    let three_g = Point::mul_generator(&Scalar::from_u64(3).unwrap()).to_affine();
    assert_eq!(three_g.x().to_be_bytes(), three_g_x.to_vec());
}

#[test]
fn test_a_is_zero() {
    assert!(bool::from(Secp256k1::A.is_zero()));
    assert_eq!(Secp256k1::B, FieldElement::from_u64(7));
}

#[test]
fn test_group_law() {
    check_group_law::<Secp256k1>(0x6b);
}

#[test]
fn test_negated_endomorphism() {
    let map = Secp256k1::negated_endomorphism();
    let g = AffinePoint::<Secp256k1>::generator();
    let image = map.map(&g).unwrap();

    let lambda = Scalar::from_be_bytes(&Secp256k1::LAMBDA).unwrap();
    assert_eq!(image, Point::mul_generator(&lambda).negate().to_affine());

    // β³ = 1, so three applications only flip y
    let thrice = map.map(&map.map(&image).unwrap()).unwrap();
    assert_eq!(thrice, g.negate());
    assert_eq!(map.scale().mul(map.scale()).mul(map.scale()), FieldElement::ONE);
}
