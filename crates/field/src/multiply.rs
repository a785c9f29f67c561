// Copyright 2024-2025 Irreducible Inc.

//! Bitwise multiplication in the AES field $GF(2^8) = GF(2)[X] / (X^8 + X^4 + X^3 + X + 1)$.

/// The AES reduction polynomial $X^8 + X^4 + X^3 + X + 1$.
pub const AES_REDUCTION_POLYNOMIAL: u16 = 0x11B;

/// Low byte of [`AES_REDUCTION_POLYNOMIAL`]. This is the value of $X^8$ in the field.
pub const AES_REDUCTION_BYTE: u8 = 0x1B;

/// Multiplies `value` by $X$ (`0x02`).
///
/// The degree-7 coefficient is sampled before the shift; when it was set the shifted-out
/// $X^8$ term is folded back in by xoring [`AES_REDUCTION_BYTE`].
#[inline]
pub const fn xtime(value: u8) -> u8 {
	let overflow = value & 0x80 == 0x80;
	let shifted = value << 1;
	if overflow {
		shifted ^ AES_REDUCTION_BYTE
	} else {
		shifted
	}
}

/// Multiplies two elements of the AES field.
///
/// This is shift-and-xor ("peasant") multiplication, run for exactly eight rounds regardless
/// of the operand values. `lhs` is the multiplicand: it is doubled with [`xtime`] every round.
/// `rhs` is the multiplier: its bits are consumed from the least significant end, and each
/// set bit xors the current multiplicand into the product.
///
/// The function is total over `u8 × u8` and commutative even though the two operands play
/// different roles.
#[inline]
pub const fn multiply(lhs: u8, rhs: u8) -> u8 {
	let mut product = 0u8;
	let mut multiplicand = lhs;
	let mut multiplier = rhs;

	// All three registers are `u8`, so every shift truncates to the field width.
	let mut round = 0;
	while round < 8 {
		if multiplier & 1 == 1 {
			product ^= multiplicand;
		}
		multiplicand = xtime(multiplicand);
		multiplier >>= 1;
		round += 1;
	}

	product
}

/// Multiplies the low bytes of two wider integers in the AES field.
///
/// Bits above position 7 are discarded before multiplying, so this never fails.
#[inline]
pub const fn multiply_truncated(lhs: u32, rhs: u32) -> u8 {
	multiply(lhs as u8, rhs as u8)
}
