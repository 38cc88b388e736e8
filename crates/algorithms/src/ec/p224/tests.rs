//! P-224 unit tests

use super::*;
use crate::ec::tests::{check_field_axioms, check_group_law};
use crate::ec::{CombMultiplier, Curve, Field};

#[test]
fn test_field_arithmetic() {
    check_field_axioms::<FieldElement>(224);
    assert!(FieldElement::from_be_bytes(&[0xff; P224_FIELD_ELEMENT_SIZE]).is_err());
}

#[test]
fn test_square_roots_need_tonelli_shanks() {
    // p ≡ 1 mod 4, so the loop runs for real here
    let two = FieldElement::from_u64(2);
    for k in 1..32u64 {
        let a = FieldElement::from_u64(k);
        let sq = a.square();
        let r = sq.sqrt().unwrap();
        assert_eq!(r.square(), sq);
    }
    // a residue times a non-residue is a non-residue
    let non_residue = (1..64u64)
        .map(FieldElement::from_u64)
        .find(|c| c.sqrt().is_none())
        .unwrap();
    assert!(non_residue.mul(&two.square()).sqrt().is_none());
}

#[test]
fn test_group_law() {
    check_group_law::<NistP224>(0x224);
}

#[test]
fn test_comb_sizing() {
    let comb = CombMultiplier::<NistP224>::for_generator();
    assert_eq!(comb.width(), 5);
    assert_eq!(comb.spacing(), 45);
    assert_eq!(NistP224::scalar_bytes(), P224_SCALAR_SIZE);
}
