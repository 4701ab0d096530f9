//! Environment lookup helpers shared by the settings loaders.
//!
//! Settings are read once at process start and owned as plain structs
//! afterwards; these helpers only exist to keep the parsing uniform.

use std::env;
use std::str::FromStr;

/// Returns the variable's value, or `default` when unset or blank.
pub fn string(name: &str, default: &str) -> String {
	match env::var(name) {
		Ok(value) if !value.trim().is_empty() => value,
		_ => default.to_string(),
	}
}

/// Parses the variable with `FromStr`, falling back to `default` when unset
/// or unparsable.
pub fn parsed<T: FromStr>(name: &str, default: T) -> T {
	env::var(name).ok().and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

/// Reads a boolean flag; accepts true/false, 1/0, yes/no case-insensitively.
pub fn flag(name: &str, default: bool) -> bool {
	match env::var(name) {
		Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
			"true" | "1" | "yes" => true,
			"false" | "0" | "no" => false,
			_ => default,
		},
		Err(_) => default,
	}
}
