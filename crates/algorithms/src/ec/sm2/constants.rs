//! Shared constants for SM2 operations (GB/T 32918.5)

/// Size of an SM2 scalar in bytes
pub const SM2_SCALAR_SIZE: usize = 32;

/// Size of an SM2 field element in bytes
pub const SM2_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an uncompressed SM2 point in bytes: 0x04 || x || y
pub const SM2_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * SM2_FIELD_ELEMENT_SIZE;

/// Size of a compressed SM2 point in bytes: 0x02/0x03 || x
pub const SM2_POINT_COMPRESSED_SIZE: usize = 1 + SM2_FIELD_ELEMENT_SIZE;

pub(crate) const SM2_MODULUS_HEX: &str =
    "fffffffeffffffffffffffffffffffffffffffff00000000ffffffffffffffff";
pub(crate) const SM2_A_HEX: &str =
    "fffffffeffffffffffffffffffffffffffffffff00000000fffffffffffffffc";
pub(crate) const SM2_B_HEX: &str =
    "28e9fa9e9d9f5e344d5a9e4bcf6509a7f39789f515ab8f92ddbcbd414d940e93";
pub(crate) const SM2_GX_HEX: &str =
    "32c4ae2c1f1981195f9904466a39c9948fe30bbff2660be1715a4589334c74c7";
pub(crate) const SM2_GY_HEX: &str =
    "bc3736a2f4f6779c59bdcee36b692153d0a9877cc62a474002df32e52139f0a0";
