// Copyright 2024-2025 Irreducible Inc.

use proptest::prelude::*;

use crate::{
	multiply,
	reference::{mul_carryless, mul_log_table, product_table},
	AESField8b, BinaryField, Field,
};

fn all_bytes() -> impl Iterator<Item = u8> + Clone {
	0..=u8::MAX
}

#[test]
fn test_identity() {
	for x in all_bytes() {
		assert_eq!(multiply(x, 1), x);
		assert_eq!(multiply(1, x), x);
	}
}

#[test]
fn test_absorption() {
	for x in all_bytes() {
		assert_eq!(multiply(x, 0), 0);
		assert_eq!(multiply(0, x), 0);
	}
}

#[test]
fn test_commutativity_exhaustive() {
	for a in all_bytes() {
		for b in all_bytes() {
			assert_eq!(multiply(a, b), multiply(b, a), "{a:#04x} * {b:#04x}");
		}
	}
}

#[test]
fn test_equivalence_with_references_exhaustive() {
	let table = product_table();
	for a in all_bytes() {
		for b in all_bytes() {
			let product = multiply(a, b);
			assert_eq!(product, mul_carryless(a, b), "{a:#04x} * {b:#04x}");
			assert_eq!(product, mul_log_table(a, b), "{a:#04x} * {b:#04x}");
			assert_eq!(product, table[a as usize][b as usize]);
		}
	}
}

#[test]
fn test_distributivity_over_single_bits() {
	// Every `c` is a sum of single bits, so linearity in each bit covers the general case.
	for a in all_bytes() {
		for b in all_bytes() {
			for bit in 0..8 {
				let c = 1u8 << bit;
				assert_eq!(multiply(a, b ^ c), multiply(a, b) ^ multiply(a, c));
			}
		}
	}
}

#[test]
fn test_every_nonzero_element_is_invertible() {
	for a in all_bytes().skip(1) {
		let inverses = all_bytes().filter(|&b| multiply(a, b) == 1).count();
		assert_eq!(inverses, 1, "{a:#04x}");
	}
}

#[test]
fn test_multiplicative_generator() {
	let generator = AESField8b::MULTIPLICATIVE_GENERATOR;
	let mut power = AESField8b::ONE;
	let mut seen = [false; 256];
	for _ in 0..255 {
		assert!(!seen[power.val() as usize]);
		seen[power.val() as usize] = true;
		power *= generator;
	}
	assert_eq!(power, AESField8b::ONE);
	assert_eq!(AESField8b::N_BITS, 8);
}

proptest! {
	#[test]
	fn test_distributivity(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
		assert_eq!(multiply(a, b ^ c), multiply(a, b) ^ multiply(a, c));
	}

	#[test]
	fn test_associativity(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
		assert_eq!(multiply(multiply(a, b), c), multiply(a, multiply(b, c)));
	}

	#[test]
	fn test_field_mul_matches_kernel(a in any::<u8>(), b in any::<u8>()) {
		assert_eq!((AESField8b::new(a) * AESField8b::new(b)).val(), multiply(a, b));
	}
}
