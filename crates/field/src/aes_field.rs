// Copyright 2024-2025 Irreducible Inc.

// AES field GF(2^8) = GF(2)[X] / (X^8 + X^4 + X^3 + X + 1), the field used by the
// MixColumns and SubBytes steps of Rijndael. Elements are bytes whose bit `i` is the
// coefficient of X^i.

use std::{
	fmt::{Debug, Display, Formatter},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use bytemuck::{Pod, Zeroable};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::{
	arch::PeasantStrategy,
	arithmetic_traits::{impl_mul_with, InvertOrZero, Square, TaggedMul},
	field::{BinaryField, Field},
	reference, Error,
};

/// An element of the AES field.
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable)]
#[repr(transparent)]
pub struct AESField8b(pub(crate) u8);

unsafe impl Pod for AESField8b {}

impl AESField8b {
	pub const fn new(value: u8) -> Self {
		Self(value)
	}

	pub const fn val(self) -> u8 {
		self.0
	}

	/// Multiplies using the algorithm selected by `Strategy` instead of the default one.
	#[inline]
	pub fn mul_with<Strategy>(self, rhs: Self) -> Self
	where
		Self: TaggedMul<Strategy>,
	{
		TaggedMul::<Strategy>::mul(self, rhs)
	}

	/// Reinterprets a byte slice as field elements without copying.
	pub fn from_bytes(bytes: &[u8]) -> &[Self] {
		bytemuck::must_cast_slice(bytes)
	}

	/// Reinterprets field elements as their byte encoding without copying.
	pub fn as_bytes(elems: &[Self]) -> &[u8] {
		bytemuck::must_cast_slice(elems)
	}
}

impl_mul_with!(AESField8b @ PeasantStrategy);

impl Neg for AESField8b {
	type Output = Self;

	fn neg(self) -> Self::Output {
		self
	}
}

impl Add<Self> for AESField8b {
	type Output = Self;

	#[allow(clippy::suspicious_arithmetic_impl)]
	fn add(self, rhs: Self) -> Self::Output {
		Self(self.0 ^ rhs.0)
	}
}

impl Add<&Self> for AESField8b {
	type Output = Self;

	fn add(self, rhs: &Self) -> Self::Output {
		self + *rhs
	}
}

impl Sub<Self> for AESField8b {
	type Output = Self;

	#[allow(clippy::suspicious_arithmetic_impl)]
	fn sub(self, rhs: Self) -> Self::Output {
		Self(self.0 ^ rhs.0)
	}
}

impl Sub<&Self> for AESField8b {
	type Output = Self;

	fn sub(self, rhs: &Self) -> Self::Output {
		self - *rhs
	}
}

impl Mul<&Self> for AESField8b {
	type Output = Self;

	fn mul(self, rhs: &Self) -> Self::Output {
		self * *rhs
	}
}

impl AddAssign<Self> for AESField8b {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl AddAssign<&Self> for AESField8b {
	fn add_assign(&mut self, rhs: &Self) {
		*self = *self + *rhs;
	}
}

impl SubAssign<Self> for AESField8b {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl SubAssign<&Self> for AESField8b {
	fn sub_assign(&mut self, rhs: &Self) {
		*self = *self - *rhs;
	}
}

impl MulAssign<Self> for AESField8b {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl MulAssign<&Self> for AESField8b {
	fn mul_assign(&mut self, rhs: &Self) {
		*self = *self * *rhs;
	}
}

impl Sum<Self> for AESField8b {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl<'a> Sum<&'a Self> for AESField8b {
	fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl Product<Self> for AESField8b {
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

impl<'a> Product<&'a Self> for AESField8b {
	fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

impl Square for AESField8b {
	#[inline]
	fn square(self) -> Self {
		crate::tracing::trace_multiplication!(PeasantStrategy, self, self);

		self * self
	}
}

impl InvertOrZero for AESField8b {
	#[inline]
	fn invert_or_zero(self) -> Self {
		Self(reference::invert_or_zero(self.0))
	}
}

impl ConstantTimeEq for AESField8b {
	fn ct_eq(&self, other: &Self) -> Choice {
		self.0.ct_eq(&other.0)
	}
}

impl ConditionallySelectable for AESField8b {
	fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
		Self(ConditionallySelectable::conditional_select(&a.0, &b.0, choice))
	}
}

impl Field for AESField8b {
	const ZERO: Self = Self(0);
	const ONE: Self = Self(1);
	const CHARACTERISTIC: usize = 2;

	fn random(mut rng: impl RngCore) -> Self {
		Self(rng.next_u32() as u8)
	}

	fn double(&self) -> Self {
		Self::ZERO
	}
}

impl BinaryField for AESField8b {
	const N_BITS: usize = 8;
	const MULTIPLICATIVE_GENERATOR: Self = Self(0x03);
}

impl Display for AESField8b {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "0x{:02x}", self.0)
	}
}

impl Debug for AESField8b {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "AESField8b({self})")
	}
}

impl From<u8> for AESField8b {
	fn from(val: u8) -> Self {
		Self(val)
	}
}

impl From<AESField8b> for u8 {
	fn from(val: AESField8b) -> Self {
		val.0
	}
}

impl TryFrom<u32> for AESField8b {
	type Error = Error;

	fn try_from(value: u32) -> Result<Self, Self::Error> {
		u8::try_from(value)
			.map(Self)
			.map_err(|_| Error::NotInField { value })
	}
}

impl TryFrom<u16> for AESField8b {
	type Error = Error;

	fn try_from(value: u16) -> Result<Self, Self::Error> {
		Self::try_from(u32::from(value))
	}
}
