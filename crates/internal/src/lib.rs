//! Internal utilities for the eccore library

pub mod constant_time;

pub use constant_time::{ct_eq, ct_lt_be};
