// Copyright 2024-2025 Irreducible Inc.

use anyhow::Result;
use clap::Parser;
use gf256_field::{
	arch::{CarrylessStrategy, LogTableStrategy},
	multiply, reference, verify_exhaustive, AESField8b, VerifyMode,
};
use gf256_utils::{env::boolean_env_flag_set, rayon::adjust_thread_pool, tracing::init_tracing};

const SEQUENTIAL_ENV_FLAG: &str = "GF256_VERIFY_SEQUENTIAL";

#[derive(Debug, Parser)]
struct Args {
	/// Check rows one after another instead of on the rayon thread pool.
	/// Also enabled by setting GF256_VERIFY_SEQUENTIAL.
	#[arg(long)]
	sequential: bool,
	/// Left operand, decimal or 0x-prefixed hex.
	#[arg(value_parser = parse_byte, requires = "rhs")]
	lhs: Option<u8>,
	/// Right operand, decimal or 0x-prefixed hex.
	#[arg(value_parser = parse_byte)]
	rhs: Option<u8>,
}

fn parse_byte(arg: &str) -> Result<u8, String> {
	let parsed = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
		Some(hex) => u8::from_str_radix(hex, 16),
		None => arg.parse::<u8>(),
	};
	parsed.map_err(|err| format!("{arg:?} is not a byte: {err}"))
}

fn main() -> Result<()> {
	adjust_thread_pool()
		.as_ref()
		.expect("failed to init thread pool");

	let args = Args::parse();

	init_tracing()?;

	let mode = if args.sequential || boolean_env_flag_set(SEQUENTIAL_ENV_FLAG) {
		VerifyMode::Sequential
	} else {
		VerifyMode::Parallel
	};

	let report = verify_exhaustive(reference::mul_carryless, mode)?;
	println!("Verified {} products against polynomial reduction", report.pairs_checked);
	let report = verify_exhaustive(reference::mul_log_table, mode)?;
	println!("Verified {} products against log/exp tables", report.pairs_checked);

	if let (Some(lhs), Some(rhs)) = (args.lhs, args.rhs) {
		let product = multiply(lhs, rhs);
		let (a, b) = (AESField8b::new(lhs), AESField8b::new(rhs));
		tracing::debug!(
			log_table = %a.mul_with::<LogTableStrategy>(b),
			carryless = %a.mul_with::<CarrylessStrategy>(b),
			"cross-checked product"
		);
		println!("{a} * {b} = {}", AESField8b::new(product));
	}

	Ok(())
}
