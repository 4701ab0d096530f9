//! Process-wide settings shared by both platform variants.

use std::path::PathBuf;

use crate::env;

/// Settings read from the environment once at startup and treated as
/// immutable afterwards. Construct in the entry point and pass down;
/// there is no global instance.
#[derive(Debug, Clone)]
pub struct Settings {
	/// Log level for the stderr layer (`TAF_LOG_LEVEL`, default `info`).
	pub log_level: String,
	/// Root directory for reports and screenshots (`TAF_REPORT_DIR`,
	/// default `reports`).
	pub report_dir: PathBuf,
	/// Capture a screenshot when a test body fails
	/// (`TAF_SCREENSHOT_ON_FAILURE`, default true).
	pub screenshot_on_failure: bool,
}

impl Settings {
	pub fn from_env() -> Self {
		Self {
			log_level: env::string("TAF_LOG_LEVEL", "info"),
			report_dir: PathBuf::from(env::string("TAF_REPORT_DIR", "reports")),
			screenshot_on_failure: env::flag("TAF_SCREENSHOT_ON_FAILURE", true),
		}
	}
}
