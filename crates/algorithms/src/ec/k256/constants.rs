//! Shared constants for secp256k1 operations

/// Size of a secp256k1 scalar in bytes (32 bytes = 256 bits)
pub const K256_SCALAR_SIZE: usize = 32;

/// Size of a secp256k1 field element in bytes (32 bytes = 256 bits)
pub const K256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an uncompressed secp256k1 point in bytes: 0x04 || x || y
pub const K256_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * K256_FIELD_ELEMENT_SIZE;

/// Size of a compressed secp256k1 point in bytes: 0x02/0x03 || x
pub const K256_POINT_COMPRESSED_SIZE: usize = 1 + K256_FIELD_ELEMENT_SIZE;

pub(crate) const K256_MODULUS_HEX: &str =
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";
pub(crate) const K256_B_HEX: &str =
    "0000000000000000000000000000000000000000000000000000000000000007";
/// Non-trivial cube root of unity in F_p, paired with `Secp256k1::LAMBDA`
pub(crate) const K256_BETA_HEX: &str =
    "7ae96a2b657c07106e64479eac3434e99cf0497512f58995c1396c28719501ee";
pub(crate) const K256_GX_HEX: &str =
    "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
pub(crate) const K256_GY_HEX: &str =
    "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";
