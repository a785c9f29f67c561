// Copyright 2024-2025 Irreducible Inc.
use cfg_if::cfg_if;

cfg_if! {
	if #[cfg(feature = "trace_multiplications")] {
		use std::cell::Cell;

		thread_local! {
			static IS_IN_MULT_FUNCTION: Cell<bool> = const { Cell::new(false) };
		}

		/// Emits one event per outermost field multiplication. Multiplications performed
		/// while a guard is alive on the same thread (e.g. inside `square`) are not reported.
		pub(crate) struct TraceGuard(bool);

		impl TraceGuard {
			pub fn new(strategy: &'static str, lhs: u8, rhs: u8) -> Self {
				let val = IS_IN_MULT_FUNCTION.with(|v| {
					if !v.get() {
						v.set(true);
						tracing::event!(name: "mul", tracing::Level::TRACE, {strategy, lhs, rhs});

						true
					} else {
						false
					}
				});
				Self(val)
			}
		}

		impl Drop for TraceGuard {
			fn drop(&mut self) {
				if self.0 {
					IS_IN_MULT_FUNCTION.with(|v| {
						v.set(false);
					});
				};
			}
		}

		macro_rules! trace_multiplication {
			($strategy: ty, $lhs: expr, $rhs: expr) => {
				let _guard = $crate::tracing::TraceGuard::new(
					stringify!($strategy),
					$crate::AESField8b::val($lhs),
					$crate::AESField8b::val($rhs),
				);
			};
		}
	} else {
		macro_rules! trace_multiplication {
			($strategy: ty, $lhs: expr, $rhs: expr) => {};
		}
	}
}

pub(crate) use trace_multiplication;
