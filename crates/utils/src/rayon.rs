// Copyright 2024-2025 Irreducible Inc.

use std::{env, sync::OnceLock};

/// Runs rayon on the calling thread when `RAYON_NUM_THREADS` is `1`, so that single-threaded
/// runs behave like plain loops and produce clean traces.
///
/// Rayon allows configuring the global pool only once, before first use. Call this at the
/// beginning of `main`. Subsequent calls return the cached outcome of the first one; the
/// result is a reference because `ThreadPoolBuildError` is not `Clone`.
pub fn adjust_thread_pool() -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| {
		// `rayon::current_num_threads` would initialize the global pool, so read the variable.
		match env::var("RAYON_NUM_THREADS") {
			Ok(v) if v.trim() == "1" => rayon::ThreadPoolBuilder::new()
				.num_threads(1)
				.use_current_thread()
				.build_global(),
			_ => Ok(()),
		}
	})
}
