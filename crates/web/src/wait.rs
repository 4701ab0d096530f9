//! Wait presets for the web variant.
//!
//! Visibility, hiddenness, presence, and text containment are predicate
//! presets over [`taf_core::wait::wait_until`], not independent
//! mechanisms.

use std::future::Future;
use std::time::Duration;

use taf_core::wait::{self, WaitSpec};
use taf_core::{Error, Result};

use crate::backend::{BrowserPage, Selector};
use crate::settings::WebSettings;

/// Wait presets evaluated against one borrowed page.
pub struct WaitHandler<'a, P: BrowserPage> {
	page: &'a P,
	spec: WaitSpec,
}

impl<'a, P: BrowserPage> WaitHandler<'a, P> {
	pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

	/// Creates a handler from the settings' default timeout with a 250ms
	/// poll cadence (clamped to the timeout).
	pub fn new(page: &'a P, settings: &WebSettings) -> Result<Self> {
		let spec = WaitSpec::new(settings.timeout, Self::DEFAULT_POLL_INTERVAL.min(settings.timeout))?;
		Ok(Self { page, spec })
	}

	pub fn with_spec(page: &'a P, spec: WaitSpec) -> Self {
		Self { page, spec }
	}

	pub fn spec(&self) -> &WaitSpec {
		&self.spec
	}

	fn spec_for(&self, timeout: Option<Duration>) -> Result<WaitSpec> {
		match timeout {
			Some(timeout) => self.spec.with_timeout(timeout),
			None => Ok(self.spec),
		}
	}

	/// Waits until the selector matches a visible element.
	pub async fn selector_visible(&self, selector: &Selector, timeout: Option<Duration>) -> Result<()> {
		let spec = self.spec_for(timeout)?;
		let page = self.page;
		wait::wait_until(&spec, &format!("selector visible: {selector}"), move || async move {
			if page.is_visible(selector).await? {
				Ok(())
			} else {
				Err(Error::NotFound(format!("{selector} not visible")))
			}
		})
		.await
	}

	/// Waits until the selector matches no visible element.
	pub async fn selector_hidden(&self, selector: &Selector, timeout: Option<Duration>) -> Result<()> {
		let spec = self.spec_for(timeout)?;
		let page = self.page;
		wait::wait_until(&spec, &format!("selector hidden: {selector}"), move || async move {
			if page.is_visible(selector).await? {
				Err(Error::NotFound(format!("{selector} still visible")))
			} else {
				Ok(())
			}
		})
		.await
	}

	/// Waits until the selector matches an element, visible or not.
	pub async fn selector_present(&self, selector: &Selector, timeout: Option<Duration>) -> Result<()> {
		let spec = self.spec_for(timeout)?;
		let page = self.page;
		wait::wait_until(&spec, &format!("selector present: {selector}"), move || async move {
			if page.exists(selector).await? {
				Ok(())
			} else {
				Err(Error::NotFound(format!("{selector} not in the document")))
			}
		})
		.await
	}

	/// Waits until the selector is visible and enabled.
	pub async fn selector_clickable(&self, selector: &Selector, timeout: Option<Duration>) -> Result<()> {
		let spec = self.spec_for(timeout)?;
		let page = self.page;
		wait::wait_until(&spec, &format!("selector clickable: {selector}"), move || async move {
			if !page.is_visible(selector).await? {
				return Err(Error::NotFound(format!("{selector} not visible")));
			}
			if !page.is_enabled(selector).await? {
				return Err(Error::NotFound(format!("{selector} visible but not enabled")));
			}
			Ok(())
		})
		.await
	}

	/// Waits until the element's text contains `needle`.
	///
	/// The needle is compared as plain data against the fetched text; it is
	/// never spliced into a generated page expression.
	pub async fn text_in_selector(&self, selector: &Selector, needle: &str, timeout: Option<Duration>) -> Result<()> {
		let spec = self.spec_for(timeout)?;
		let page = self.page;
		wait::wait_until(&spec, &format!("text {needle:?} in {selector}"), move || async move {
			let text = page.inner_text(selector).await?;
			if text.contains(needle) {
				Ok(())
			} else {
				Err(Error::NotFound(format!("{selector} text {text:?} does not contain {needle:?}")))
			}
		})
		.await
	}

	/// Waits on an arbitrary predicate; the caller captures the page.
	pub async fn until<T, F, Fut>(&self, condition: &str, timeout: Option<Duration>, predicate: F) -> Result<T>
	where
		F: FnMut() -> Fut,
		Fut: Future<Output = Result<T>>,
	{
		let spec = self.spec_for(timeout)?;
		wait::wait_until(&spec, condition, predicate).await
	}
}
