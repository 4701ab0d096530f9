//! Web-variant settings.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

use taf_core::{Error, env};

use crate::backend::{LaunchOptions, Viewport};

/// Browser engine selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
	#[default]
	Chromium,
	Firefox,
	Webkit,
}

impl fmt::Display for BrowserKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BrowserKind::Chromium => write!(f, "chromium"),
			BrowserKind::Firefox => write!(f, "firefox"),
			BrowserKind::Webkit => write!(f, "webkit"),
		}
	}
}

impl FromStr for BrowserKind {
	type Err = Error;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"chromium" => Ok(BrowserKind::Chromium),
			"firefox" => Ok(BrowserKind::Firefox),
			"webkit" => Ok(BrowserKind::Webkit),
			other => Err(Error::InvalidSpec(format!("unknown browser kind: {other}"))),
		}
	}
}

/// Connection and target-app settings for the web variant, read from the
/// environment once at startup.
#[derive(Debug, Clone)]
pub struct WebSettings {
	/// Application under test (`BASE_URL`).
	pub base_url: String,
	/// Browser engine (`BROWSER_KIND`, default chromium).
	pub browser: BrowserKind,
	/// Headless mode (`BROWSER_HEADLESS`, default true).
	pub headless: bool,
	/// Per-operation slowdown for debugging (`BROWSER_SLOWMO_MS`).
	pub slow_mo: Duration,
	/// Default wait timeout (`BROWSER_TIMEOUT_MS`, default 30s).
	pub timeout: Duration,
	pub viewport_width: u32,
	pub viewport_height: u32,
}

impl WebSettings {
	pub fn from_env() -> Self {
		Self {
			base_url: env::string("BASE_URL", "https://demo.swapy.dev"),
			browser: env::parsed("BROWSER_KIND", BrowserKind::Chromium),
			headless: env::flag("BROWSER_HEADLESS", true),
			slow_mo: Duration::from_millis(env::parsed("BROWSER_SLOWMO_MS", 0)),
			timeout: Duration::from_millis(env::parsed("BROWSER_TIMEOUT_MS", 30_000)),
			viewport_width: env::parsed("VIEWPORT_WIDTH", 1280),
			viewport_height: env::parsed("VIEWPORT_HEIGHT", 720),
		}
	}

	/// Launch options handed to the backend at session creation.
	pub fn launch_options(&self) -> LaunchOptions {
		LaunchOptions {
			browser: self.browser,
			headless: self.headless,
			slow_mo: self.slow_mo,
			viewport: Viewport {
				width: self.viewport_width,
				height: self.viewport_height,
			},
			ignore_https_errors: true,
		}
	}
}
