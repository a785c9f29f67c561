// Copyright 2024-2025 Irreducible Inc.

//! Independent implementations of AES field arithmetic.
//!
//! These do not share code with [`crate::multiply`] beyond [`xtime`], which is only used to
//! build the exponent table, and serve as oracles for it.

use std::array;

use crate::multiply::{multiply, xtime, AES_REDUCTION_POLYNOMIAL};

/// `EXP_TABLE[i]` is $3^i$, where `0x03` generates the multiplicative group.
///
/// The group has order 255, so `EXP_TABLE[255]` wraps around to `EXP_TABLE[0]`.
pub const EXP_TABLE: [u8; 256] = generate_exp_table();

/// `LOG_TABLE[x]` is the discrete logarithm of `x` to the base `0x03`.
///
/// `LOG_TABLE[0]` is zero and never read by the functions in this module.
pub const LOG_TABLE: [u8; 256] = generate_log_table(&EXP_TABLE);

const fn generate_exp_table() -> [u8; 256] {
	let mut table = [0u8; 256];
	let mut value = 1u8;
	let mut i = 0;
	while i < 256 {
		table[i] = value;
		// value * 0x03 = value * 0x02 + value
		value ^= xtime(value);
		i += 1;
	}
	table
}

const fn generate_log_table(exp: &[u8; 256]) -> [u8; 256] {
	let mut table = [0u8; 256];
	let mut i = 0;
	while i < 255 {
		table[exp[i] as usize] = i as u8;
		i += 1;
	}
	table
}

/// Multiplies two field elements through the log/exp tables.
#[inline]
pub fn mul_log_table(lhs: u8, rhs: u8) -> u8 {
	if lhs == 0 || rhs == 0 {
		return 0;
	}

	let log_sum = LOG_TABLE[lhs as usize] as usize + LOG_TABLE[rhs as usize] as usize;
	let log_sum = if log_sum > 254 {
		log_sum - 255
	} else {
		log_sum
	};
	EXP_TABLE[log_sum]
}

/// Multiplies two field elements as polynomials over GF(2) and reduces the 15-bit product
/// modulo [`AES_REDUCTION_POLYNOMIAL`] by long division.
#[inline]
pub const fn mul_carryless(lhs: u8, rhs: u8) -> u8 {
	let mut product = 0u16;
	let mut i = 0;
	while i < 8 {
		if (rhs >> i) & 1 == 1 {
			product ^= (lhs as u16) << i;
		}
		i += 1;
	}

	let mut degree = 14;
	while degree >= 8 {
		if (product >> degree) & 1 == 1 {
			product ^= AES_REDUCTION_POLYNOMIAL << (degree - 8);
		}
		degree -= 1;
	}

	product as u8
}

/// Returns the multiplicative inverse of `value`, or zero when `value` is zero.
#[inline]
pub fn invert_or_zero(value: u8) -> u8 {
	if value == 0 {
		return 0;
	}

	EXP_TABLE[(255 - LOG_TABLE[value as usize] as usize) % 255]
}

/// Products of `coefficient` with every field element, indexed by the other factor.
pub fn constant_mul_table(coefficient: u8) -> [u8; 256] {
	array::from_fn(|rhs| multiply(coefficient, rhs as u8))
}

/// The complete multiplication table, `table[lhs][rhs] = lhs * rhs`.
pub fn product_table() -> Box<[[u8; 256]; 256]> {
	let mut table = Box::new([[0u8; 256]; 256]);
	for (lhs, row) in table.iter_mut().enumerate() {
		*row = constant_mul_table(lhs as u8);
	}
	table
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_exp_table_prefix() {
		assert_eq!(&EXP_TABLE[..8], &[0x01, 0x03, 0x05, 0x0f, 0x11, 0x33, 0x55, 0xff]);
		assert_eq!(EXP_TABLE[254], 0xf6);
		assert_eq!(EXP_TABLE[255], 0x01);
	}

	#[test]
	fn test_log_table_inverts_exp_table() {
		for i in 0..255 {
			assert_eq!(LOG_TABLE[EXP_TABLE[i] as usize] as usize, i);
		}
		assert_eq!(LOG_TABLE[0x03], 0x01);
		assert_eq!(LOG_TABLE[0x02], 0x19);
	}

	#[test]
	fn test_exp_table_covers_nonzero_elements() {
		let mut seen = [false; 256];
		for &value in &EXP_TABLE[..255] {
			assert!(!seen[value as usize]);
			seen[value as usize] = true;
		}
		assert!(!seen[0]);
	}

	#[test]
	fn test_references_agree_exhaustively() {
		for lhs in 0..=u8::MAX {
			for rhs in 0..=u8::MAX {
				assert_eq!(
					mul_log_table(lhs, rhs),
					mul_carryless(lhs, rhs),
					"{lhs:#04x} * {rhs:#04x}"
				);
			}
		}
	}

	#[test]
	fn test_invert_or_zero() {
		assert_eq!(invert_or_zero(0), 0);
		assert_eq!(invert_or_zero(1), 1);
		assert_eq!(invert_or_zero(0x53), 0xCA);
		for value in 1..=u8::MAX {
			assert_eq!(mul_carryless(value, invert_or_zero(value)), 1);
		}
	}

	#[test]
	fn test_product_table_rows() {
		let table = product_table();
		assert_eq!(table[0x57][0x83], 0xC1);
		assert_eq!(table[0x02][0x87], 0x15);
		assert_eq!(table[0], [0u8; 256]);
		assert!(table[1].iter().enumerate().all(|(i, &v)| v as usize == i));
	}

	proptest! {
		#[test]
		fn test_constant_mul_table(coefficient in any::<u8>(), rhs in any::<u8>()) {
			let row = constant_mul_table(coefficient);
			assert_eq!(row[rhs as usize], mul_carryless(coefficient, rhs));
		}
	}
}
