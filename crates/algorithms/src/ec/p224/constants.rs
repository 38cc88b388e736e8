//! Shared constants for P-224 operations

/// Size of a P-224 scalar in bytes (28 bytes = 224 bits)
pub const P224_SCALAR_SIZE: usize = 28;

/// Size of a P-224 field element in bytes (28 bytes = 224 bits)
pub const P224_FIELD_ELEMENT_SIZE: usize = 28;

/// Size of an uncompressed P-224 point in bytes: 0x04 || x || y
pub const P224_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * P224_FIELD_ELEMENT_SIZE;

/// Size of a compressed P-224 point in bytes: 0x02/0x03 || x
pub const P224_POINT_COMPRESSED_SIZE: usize = 1 + P224_FIELD_ELEMENT_SIZE;

pub(crate) const P224_MODULUS_HEX: &str =
    "ffffffffffffffffffffffffffffffff000000000000000000000001";
pub(crate) const P224_A_HEX: &str =
    "fffffffffffffffffffffffffffffffefffffffffffffffffffffffe";
pub(crate) const P224_B_HEX: &str =
    "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4";
pub(crate) const P224_GX_HEX: &str =
    "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21";
pub(crate) const P224_GY_HEX: &str =
    "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34";
