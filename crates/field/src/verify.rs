// Copyright 2024-2025 Irreducible Inc.

//! Exhaustive comparison of [`multiply`] against an oracle over all $256^2$ operand pairs.

use cfg_if::cfg_if;
use tracing::instrument;

use crate::{multiply::multiply, Error};

/// Number of operand pairs in `u8 × u8`.
pub const PAIR_COUNT: usize = 1 << 16;

/// A reference multiplication to compare against.
pub type Oracle = fn(u8, u8) -> u8;

/// How [`verify_exhaustive`] schedules the rows of the multiplication table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VerifyMode {
	Sequential,
	/// Rows are checked on the rayon thread pool. Falls back to sequential when the crate
	/// is built without the `rayon` feature.
	#[default]
	Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyReport {
	pub pairs_checked: usize,
}

/// Checks that [`multiply`] agrees with `oracle` on every operand pair.
///
/// ## Throws
///
/// * `Error::ProductMismatch` for the disagreement with the smallest `lhs`, and among those
///   the smallest `rhs`. The result is the same for both modes.
#[instrument(skip(oracle), level = "debug")]
pub fn verify_exhaustive(oracle: Oracle, mode: VerifyMode) -> Result<VerifyReport, Error> {
	let mismatch = match mode {
		VerifyMode::Sequential => (0..=u8::MAX).find_map(|lhs| check_row(oracle, lhs)),
		VerifyMode::Parallel => find_first_mismatch_par(oracle),
	};

	if let Some(err) = mismatch {
		tracing::warn!(%err, "exhaustive verification failed");
		return Err(err);
	}

	let report = VerifyReport {
		pairs_checked: PAIR_COUNT,
	};
	tracing::info!(pairs_checked = report.pairs_checked, ?mode, "multiplier matches oracle");
	Ok(report)
}

fn check_row(oracle: Oracle, lhs: u8) -> Option<Error> {
	(0..=u8::MAX).find_map(|rhs| {
		let expected = oracle(lhs, rhs);
		let actual = multiply(lhs, rhs);
		(expected != actual).then_some(Error::ProductMismatch {
			lhs,
			rhs,
			expected,
			actual,
		})
	})
}

cfg_if! {
	if #[cfg(feature = "rayon")] {
		fn find_first_mismatch_par(oracle: Oracle) -> Option<Error> {
			use rayon::prelude::*;

			(0..=u8::MAX)
				.into_par_iter()
				.find_map_first(|lhs| check_row(oracle, lhs))
		}
	} else {
		fn find_first_mismatch_par(oracle: Oracle) -> Option<Error> {
			(0..=u8::MAX).find_map(|lhs| check_row(oracle, lhs))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::reference::{mul_carryless, mul_log_table};

	fn broken_oracle(lhs: u8, rhs: u8) -> u8 {
		let product = mul_carryless(lhs, rhs);
		if lhs >= 0x80 && rhs == 0x02 {
			product ^ 1
		} else {
			product
		}
	}

	#[test]
	fn test_matches_references() {
		for mode in [VerifyMode::Sequential, VerifyMode::Parallel] {
			let report = verify_exhaustive(mul_log_table, mode).unwrap();
			assert_eq!(report.pairs_checked, PAIR_COUNT);
			assert!(verify_exhaustive(mul_carryless, mode).is_ok());
		}
	}

	#[test]
	fn test_reports_first_mismatch() {
		let expected = Error::ProductMismatch {
			lhs: 0x80,
			rhs: 0x02,
			expected: 0x1a,
			actual: 0x1b,
		};
		assert_eq!(verify_exhaustive(broken_oracle, VerifyMode::Sequential), Err(expected.clone()));
		assert_eq!(verify_exhaustive(broken_oracle, VerifyMode::Parallel), Err(expected));
	}

	#[test]
	fn test_default_mode_is_parallel() {
		assert_eq!(VerifyMode::default(), VerifyMode::Parallel);
	}
}
