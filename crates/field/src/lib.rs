// Copyright 2023-2025 Irreducible Inc.

//! Arithmetic in the AES field.
//!
//! The AES field is $GF(2^8)$ represented as $GF(2)[X] / (X^8 + X^4 + X^3 + X + 1)$, the byte
//! field in which Rijndael's MixColumns and SubBytes steps are defined. The core of this crate
//! is [`multiply`], an eight-round shift-and-xor multiplier over plain bytes. [`AESField8b`]
//! wraps it in a field element type, and [`reference`] and [`verify`] provide independent
//! implementations and an exhaustive cross-check.

pub mod aes_field;
pub mod arch;
pub mod arithmetic_traits;
pub mod error;
pub mod field;
pub mod multiply;
pub mod reference;
#[cfg(test)]
mod tests;
mod tracing;
pub mod verify;

pub use aes_field::*;
pub use error::*;
pub use field::{BinaryField, Field};
pub use multiply::{
	multiply, multiply_truncated, xtime, AES_REDUCTION_BYTE, AES_REDUCTION_POLYNOMIAL,
};
pub use verify::{verify_exhaustive, VerifyMode, VerifyReport};
