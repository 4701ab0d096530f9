//! Thin interaction layer page objects build on.
//!
//! Concrete page objects live with the test suites; they hold selector
//! tables and compose these interactions, borrowing (never owning) the
//! page.

use std::time::Duration;

use tracing::{debug, info};

use taf_core::Result;

use crate::backend::{BrowserPage, Selector};
use crate::settings::WebSettings;
use crate::wait::WaitHandler;

/// Page plus wait handler, borrowed by a page object for one screen.
pub struct PageSession<'a, P: BrowserPage> {
	page: &'a P,
	wait: WaitHandler<'a, P>,
}

impl<'a, P: BrowserPage> PageSession<'a, P> {
	pub fn new(page: &'a P, settings: &WebSettings) -> Result<Self> {
		Ok(Self {
			page,
			wait: WaitHandler::new(page, settings)?,
		})
	}

	pub fn wait(&self) -> &WaitHandler<'a, P> {
		&self.wait
	}

	/// Waits for the selector to be clickable, then clicks it.
	pub async fn click(&self, selector: &Selector) -> Result<()> {
		info!(target = "taf.page", %selector, "click");
		self.wait.selector_clickable(selector, None).await?;
		self.page.click(selector).await
	}

	/// Waits for visibility, then fills the element.
	pub async fn fill(&self, selector: &Selector, value: &str) -> Result<()> {
		info!(target = "taf.page", %selector, "fill");
		self.wait.selector_visible(selector, None).await?;
		self.page.fill(selector, value).await
	}

	/// Waits for visibility, then reads the element's text.
	pub async fn read_text(&self, selector: &Selector) -> Result<String> {
		self.wait.selector_visible(selector, None).await?;
		let text = self.page.inner_text(selector).await?;
		debug!(target = "taf.page", %selector, text = %text, "read text");
		Ok(text)
	}

	/// Non-waiting visibility check.
	pub async fn is_visible(&self, selector: &Selector) -> Result<bool> {
		self.page.is_visible(selector).await
	}

	/// Waits until `selector` is visible; page objects call this from
	/// their load checks.
	pub async fn wait_ready(&self, selector: &Selector, timeout: Option<Duration>) -> Result<()> {
		self.wait.selector_visible(selector, timeout).await
	}
}
