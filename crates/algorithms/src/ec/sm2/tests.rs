//! SM2 curve unit tests

use super::*;
use crate::ec::tests::{check_field_axioms, check_group_law};
use crate::ec::{Curve, Field};

#[test]
fn test_field_arithmetic() {
    check_field_axioms::<FieldElement>(0x5a2);

    // a = p - 3
    assert_eq!(Sm2P256::A, FieldElement::from_u64(3).negate());
}

#[test]
fn test_reduction_of_extreme_products() {
    let top = FieldElement::ONE.negate();
    let mut acc = top;
    for _ in 0..16 {
        acc = acc.mul(&top).square();
    }
    // (-1)^even = 1
    assert_eq!(acc, FieldElement::ONE);
}

#[test]
fn test_group_law() {
    check_group_law::<Sm2P256>(0x5a2);
}
