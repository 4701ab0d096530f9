//! Thin interaction layer page objects build on.
//!
//! Concrete page objects live with the test suites; they hold locator
//! tables and compose these interactions, borrowing (never owning) the
//! session.

use std::time::Duration;

use tracing::{debug, info};

use taf_core::Result;

use crate::backend::{DeviceSession, Locator};
use crate::wait::WaitHandler;

/// Session plus wait handler, borrowed by a page object for one screen.
pub struct PageSession<'a, S: DeviceSession> {
	session: &'a S,
	wait: WaitHandler<'a, S>,
}

impl<'a, S: DeviceSession> PageSession<'a, S> {
	pub fn new(session: &'a S) -> Self {
		Self {
			session,
			wait: WaitHandler::new(session),
		}
	}

	pub fn wait(&self) -> &WaitHandler<'a, S> {
		&self.wait
	}

	/// Waits for the element to be clickable, then taps it.
	pub fn tap(&self, locator: &Locator) -> Result<()> {
		info!(target = "taf.page", %locator, "tap");
		let element = self.wait.element_clickable(locator, None)?;
		self.session.tap(&element)
	}

	/// Waits for visibility, then types into the element.
	pub fn type_text(&self, locator: &Locator, text: &str) -> Result<()> {
		info!(target = "taf.page", %locator, "type text");
		let element = self.wait.element_visible(locator, None)?;
		self.session.type_text(&element, text)
	}

	/// Waits for visibility, then reads the element's text.
	pub fn read_text(&self, locator: &Locator) -> Result<String> {
		let element = self.wait.element_visible(locator, None)?;
		let text = self.session.text(&element)?;
		debug!(target = "taf.page", %locator, text = %text, "read text");
		Ok(text)
	}

	/// Non-waiting visibility check; a transiently missing element reads as
	/// not displayed rather than as a failure.
	pub fn is_displayed(&self, locator: &Locator) -> Result<bool> {
		match self.session.find(locator).and_then(|element| self.session.is_displayed(&element)) {
			Ok(displayed) => Ok(displayed),
			Err(err) if err.is_transient() => Ok(false),
			Err(err) => Err(err),
		}
	}

	/// Waits until `locator` is visible; page objects call this from their
	/// load checks.
	pub fn wait_ready(&self, locator: &Locator, timeout: Option<Duration>) -> Result<()> {
		self.wait.element_visible(locator, timeout).map(|_| ())
	}
}
