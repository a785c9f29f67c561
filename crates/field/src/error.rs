// Copyright 2023-2025 Irreducible Inc.

/// Error thrown when a field operation fails.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	/// Thrown when trying to initialize a field element with a value bigger than what fits
	/// in the field.
	#[error("value {value:#x} is not in the field")]
	NotInField { value: u32 },
	#[error(
		"multiplier disagrees with oracle at {lhs:#04x} * {rhs:#04x}: expected {expected:#04x}, got {actual:#04x}"
	)]
	ProductMismatch {
		lhs: u8,
		rhs: u8,
		expected: u8,
		actual: u8,
	},
}
