// Copyright 2024-2025 Irreducible Inc.

const TRUE_VALUES: [&str; 7] = ["1", "on", "ON", "true", "TRUE", "yes", "YES"];

/// Read boolean flag from the environment variable. Unset or unrecognized values are `false`.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	std::env::var(flag).is_ok_and(|val| parse_flag(&val))
}

fn parse_flag(val: &str) -> bool {
	TRUE_VALUES.contains(&val.trim())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_flag() {
		for val in ["1", "on", "TRUE", " yes "] {
			assert!(parse_flag(val), "{val:?}");
		}
		for val in ["", "0", "off", "false", "True", "y"] {
			assert!(!parse_flag(val), "{val:?}");
		}
	}

	#[test]
	fn test_unset_flag() {
		assert!(!boolean_env_flag_set("GF256_UTILS_TEST_FLAG_THAT_IS_NEVER_SET"));
	}
}
