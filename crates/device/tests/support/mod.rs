//! Mock device backend shared by the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use parking_lot::Mutex;

use taf_core::{Error, Result};
use taf_device::backend::{Capabilities, DeviceBackend, DeviceSession, Element, Locator};

/// Scripted element state inside a [`MockSession`].
#[derive(Debug, Clone)]
pub struct MockElement {
	/// Number of failed `find` calls before the element becomes observable.
	pub appears_after: u32,
	pub displayed: bool,
	pub enabled: bool,
	pub text: String,
}

impl MockElement {
	pub fn visible(text: &str) -> Self {
		Self {
			appears_after: 0,
			displayed: true,
			enabled: true,
			text: text.to_string(),
		}
	}

	pub fn after(mut self, polls: u32) -> Self {
		self.appears_after = polls;
		self
	}

	pub fn hidden(mut self) -> Self {
		self.displayed = false;
		self
	}

	pub fn disabled(mut self) -> Self {
		self.enabled = false;
		self
	}
}

#[derive(Debug)]
pub struct MockSession {
	closed: AtomicBool,
	close_fails: bool,
	elements: HashMap<String, MockElement>,
	find_counts: Mutex<HashMap<String, u32>>,
	pub taps: Mutex<Vec<String>>,
	pub typed: Mutex<Vec<(String, String)>>,
}

impl MockSession {
	pub fn is_closed(&self) -> bool {
		self.closed.load(Ordering::SeqCst)
	}

	pub fn find_count(&self, locator: &Locator) -> u32 {
		self.find_counts.lock().get(&locator.to_string()).copied().unwrap_or(0)
	}

	fn guard(&self) -> Result<()> {
		if self.is_closed() { Err(Error::SessionClosed) } else { Ok(()) }
	}

	fn element(&self, element: &Element) -> Result<&MockElement> {
		self.elements.get(&element.0).ok_or_else(|| Error::NotFound(format!("stale element: {}", element.0)))
	}
}

impl DeviceSession for MockSession {
	fn find(&self, locator: &Locator) -> Result<Element> {
		self.guard()?;
		let key = locator.to_string();
		let spec = self.elements.get(&key).ok_or_else(|| Error::NotFound(format!("no such element: {key}")))?;

		let mut counts = self.find_counts.lock();
		let count = counts.entry(key.clone()).or_insert(0);
		*count += 1;
		if *count <= spec.appears_after {
			return Err(Error::NotFound(format!("not rendered yet: {key}")));
		}
		Ok(Element(key))
	}

	fn is_displayed(&self, element: &Element) -> Result<bool> {
		self.guard()?;
		Ok(self.element(element)?.displayed)
	}

	fn is_enabled(&self, element: &Element) -> Result<bool> {
		self.guard()?;
		Ok(self.element(element)?.enabled)
	}

	fn text(&self, element: &Element) -> Result<String> {
		self.guard()?;
		Ok(self.element(element)?.text.clone())
	}

	fn tap(&self, element: &Element) -> Result<()> {
		self.guard()?;
		self.element(element)?;
		self.taps.lock().push(element.0.clone());
		Ok(())
	}

	fn type_text(&self, element: &Element, text: &str) -> Result<()> {
		self.guard()?;
		self.element(element)?;
		self.typed.lock().push((element.0.clone(), text.to_string()));
		Ok(())
	}

	fn screenshot_png(&self) -> Result<Vec<u8>> {
		self.guard()?;
		Ok(b"\x89PNG mock".to_vec())
	}

	fn close(&self) -> Result<()> {
		self.closed.store(true, Ordering::SeqCst);
		if self.close_fails {
			return Err(Error::Backend(anyhow::anyhow!("automation server hung up during close")));
		}
		Ok(())
	}
}

#[derive(Default)]
struct BackendInner {
	connects: AtomicU32,
	fail_next_connects: AtomicU32,
	close_fails: AtomicBool,
	elements: Mutex<HashMap<String, MockElement>>,
	last_capabilities: Mutex<Option<Capabilities>>,
}

/// Clonable scripted backend; clones share state so tests can keep a probe
/// handle after moving one clone into the manager.
#[derive(Clone, Default)]
pub struct MockBackend {
	inner: Arc<BackendInner>,
}

impl MockBackend {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_element(self, locator: &Locator, element: MockElement) -> Self {
		self.inner.elements.lock().insert(locator.to_string(), element);
		self
	}

	pub fn fail_next_connects(&self, count: u32) {
		self.inner.fail_next_connects.store(count, Ordering::SeqCst);
	}

	pub fn set_close_fails(&self, fails: bool) {
		self.inner.close_fails.store(fails, Ordering::SeqCst);
	}

	pub fn connects(&self) -> u32 {
		self.inner.connects.load(Ordering::SeqCst)
	}

	pub fn last_capabilities(&self) -> Option<Capabilities> {
		self.inner.last_capabilities.lock().clone()
	}
}

impl DeviceBackend for MockBackend {
	type Session = MockSession;

	fn connect(&self, capabilities: &Capabilities) -> Result<Self::Session> {
		self.inner.connects.fetch_add(1, Ordering::SeqCst);
		*self.inner.last_capabilities.lock() = Some(capabilities.clone());

		let remaining = self.inner.fail_next_connects.load(Ordering::SeqCst);
		if remaining > 0 {
			self.inner.fail_next_connects.store(remaining - 1, Ordering::SeqCst);
			return Err(Error::Connection("connection refused".into()));
		}

		Ok(MockSession {
			closed: AtomicBool::new(false),
			close_fails: self.inner.close_fails.load(Ordering::SeqCst),
			elements: self.inner.elements.lock().clone(),
			find_counts: Mutex::new(HashMap::new()),
			taps: Mutex::new(Vec::new()),
			typed: Mutex::new(Vec::new()),
		})
	}
}
