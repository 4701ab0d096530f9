//! Automation-backend seam for the web variant.
//!
//! A backend only has to launch a page from options, answer selector
//! queries and interactions, and close; the wire protocol underneath is
//! out of scope. Selectors are opaque data all the way down.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Serialize, Serializer};

use taf_core::Result;

use crate::settings::BrowserKind;

/// Opaque CSS or XPath selector string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector(String);

impl Selector {
	pub fn new(selector: impl Into<String>) -> Self {
		Self(selector.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Selector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for Selector {
	fn from(selector: &str) -> Self {
		Self::new(selector)
	}
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Viewport {
	pub width: u32,
	pub height: u32,
}

/// Options handed to the backend when launching a page.
///
/// Serializes in the camelCase shape browser-automation servers expect on
/// the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchOptions {
	pub browser: BrowserKind,
	pub headless: bool,
	/// Per-operation slowdown; wire format is milliseconds.
	#[serde(serialize_with = "duration_millis")]
	pub slow_mo: Duration,
	pub viewport: Viewport,
	pub ignore_https_errors: bool,
}

fn duration_millis<S: Serializer>(value: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
	serializer.serialize_u64(value.as_millis() as u64)
}

/// One live page within a browser-automation backend.
///
/// Contract: `exists` and `is_visible` answer `Ok(false)` for absent
/// elements; `inner_text`, `click`, and `fill` on an element that is not
/// observable yet return [`taf_core::Error::NotFound`] (transient); any
/// operation after `close` returns [`taf_core::Error::SessionClosed`].
#[async_trait]
pub trait BrowserPage: Send + Sync + 'static {
	async fn goto(&self, url: &str) -> Result<()>;
	async fn exists(&self, selector: &Selector) -> Result<bool>;
	async fn is_visible(&self, selector: &Selector) -> Result<bool>;
	async fn is_enabled(&self, selector: &Selector) -> Result<bool>;
	async fn inner_text(&self, selector: &Selector) -> Result<String>;
	async fn click(&self, selector: &Selector) -> Result<()>;
	async fn fill(&self, selector: &Selector, value: &str) -> Result<()>;
	async fn screenshot_png(&self) -> Result<Vec<u8>>;
	async fn close(&self) -> Result<()>;
}

/// Launches browser pages from options.
#[async_trait]
pub trait BrowserBackend {
	type Page: BrowserPage;

	/// Launches the browser and opens a page. Launch failures and rejected
	/// options surface as [`taf_core::Error::Connection`] and must
	/// propagate to the caller unmodified.
	async fn launch(&self, options: &LaunchOptions) -> Result<Self::Page>;
}
