// Copyright 2024-2025 Irreducible Inc.

use super::{CarrylessStrategy, LogTableStrategy, PeasantStrategy};
use crate::{arithmetic_traits::TaggedMul, multiply::multiply, reference, AESField8b};

impl TaggedMul<PeasantStrategy> for AESField8b {
	#[inline]
	fn mul(self, rhs: Self) -> Self {
		Self::new(multiply(self.val(), rhs.val()))
	}
}

impl TaggedMul<LogTableStrategy> for AESField8b {
	#[inline]
	fn mul(self, rhs: Self) -> Self {
		Self::new(reference::mul_log_table(self.val(), rhs.val()))
	}
}

impl TaggedMul<CarrylessStrategy> for AESField8b {
	#[inline]
	fn mul(self, rhs: Self) -> Self {
		Self::new(reference::mul_carryless(self.val(), rhs.val()))
	}
}
