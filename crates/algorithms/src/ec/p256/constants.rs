//! Shared constants for P-256 operations

/// Size of a P-256 scalar in bytes (32 bytes = 256 bits)
pub const P256_SCALAR_SIZE: usize = 32;

/// Size of a P-256 field element in bytes (32 bytes = 256 bits)
pub const P256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an uncompressed P-256 point in bytes: 0x04 || x || y
pub const P256_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * P256_FIELD_ELEMENT_SIZE;

/// Size of a compressed P-256 point in bytes: 0x02/0x03 || x
pub const P256_POINT_COMPRESSED_SIZE: usize = 1 + P256_FIELD_ELEMENT_SIZE;

pub(crate) const P256_MODULUS_HEX: &str =
    "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";
pub(crate) const P256_A_HEX: &str =
    "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc";
pub(crate) const P256_B_HEX: &str =
    "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b";
pub(crate) const P256_GX_HEX: &str =
    "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";
pub(crate) const P256_GY_HEX: &str =
    "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";
