// Copyright 2023-2025 Irreducible Inc.

use tracing_subscriber::{
	filter::{EnvFilter, LevelFilter},
	layer::SubscriberExt,
	util::{SubscriberInitExt, TryInitError},
};

/// Installs a global subscriber that prints events to stderr.
///
/// The level is taken from `RUST_LOG` and defaults to `info`. Fails when a global subscriber
/// is already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
	let filter = EnvFilter::builder()
		.with_default_directive(LevelFilter::INFO.into())
		.from_env_lossy();

	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.try_init()
}
