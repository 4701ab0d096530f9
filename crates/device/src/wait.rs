//! Wait presets for the device variant.
//!
//! Visibility, clickability, presence, and text containment are predicate
//! presets over [`taf_core::wait::wait_until_blocking`], not independent
//! mechanisms.

use std::time::Duration;

use taf_core::wait::{self, WaitSpec};
use taf_core::{Error, Result};

use crate::backend::{DeviceSession, Element, Locator};

/// Wait presets evaluated against one borrowed session.
pub struct WaitHandler<'a, S: DeviceSession> {
	session: &'a S,
	spec: WaitSpec,
}

impl<'a, S: DeviceSession> WaitHandler<'a, S> {
	/// Creates a handler with the default 10s / 500ms cadence.
	pub fn new(session: &'a S) -> Self {
		Self {
			session,
			spec: WaitSpec::default(),
		}
	}

	pub fn with_spec(session: &'a S, spec: WaitSpec) -> Self {
		Self { session, spec }
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

	/// Waits until the element is present and displayed.
	pub fn element_visible(&self, locator: &Locator, timeout: Option<Duration>) -> Result<Element> {
		let spec = self.spec_for(timeout)?;
		wait::wait_until_blocking(&spec, &format!("element visible: {locator}"), || {
			let element = self.session.find(locator)?;
			if self.session.is_displayed(&element)? {
				Ok(element)
			} else {
				Err(Error::NotFound(format!("{locator} found but not displayed")))
			}
		})
	}

	/// Waits until the element is displayed and enabled.
	pub fn element_clickable(&self, locator: &Locator, timeout: Option<Duration>) -> Result<Element> {
		let spec = self.spec_for(timeout)?;
		wait::wait_until_blocking(&spec, &format!("element clickable: {locator}"), || {
			let element = self.session.find(locator)?;
			if !self.session.is_displayed(&element)? {
				return Err(Error::NotFound(format!("{locator} found but not displayed")));
			}
			if !self.session.is_enabled(&element)? {
				return Err(Error::NotFound(format!("{locator} displayed but not enabled")));
			}
			Ok(element)
		})
	}

	/// Waits until the element exists in the UI tree, visible or not.
	pub fn element_present(&self, locator: &Locator, timeout: Option<Duration>) -> Result<Element> {
		let spec = self.spec_for(timeout)?;
		wait::wait_until_blocking(&spec, &format!("element present: {locator}"), || self.session.find(locator))
	}

	/// Waits until the element's text contains `needle`.
	///
	/// The needle is compared as plain data against the fetched text; it is
	/// never spliced into a backend expression.
	pub fn text_in_element(&self, locator: &Locator, needle: &str, timeout: Option<Duration>) -> Result<Element> {
		let spec = self.spec_for(timeout)?;
		wait::wait_until_blocking(&spec, &format!("text {needle:?} in {locator}"), || {
			let element = self.session.find(locator)?;
			let text = self.session.text(&element)?;
			if text.contains(needle) {
				Ok(element)
			} else {
				Err(Error::NotFound(format!("{locator} text {text:?} does not contain {needle:?}")))
			}
		})
	}

	/// Waits on an arbitrary predicate against the session.
	pub fn until<T, F>(&self, condition: &str, timeout: Option<Duration>, mut predicate: F) -> Result<T>
	where
		F: FnMut(&S) -> Result<T>,
	{
		let spec = self.spec_for(timeout)?;
		wait::wait_until_blocking(&spec, condition, || predicate(self.session))
	}
}
