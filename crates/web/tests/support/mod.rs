//! Mock browser backend shared by the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use taf_core::{Error, Result};
use taf_web::backend::{BrowserBackend, BrowserPage, LaunchOptions, Selector};

/// Scripted element state inside a [`MockPage`].
#[derive(Debug, Clone)]
pub struct MockElement {
	/// Number of queries before the element becomes observable.
	pub appears_after: u32,
	pub visible: bool,
	pub enabled: bool,
	pub text: String,
}

impl MockElement {
	pub fn visible(text: &str) -> Self {
		Self {
			appears_after: 0,
			visible: true,
			enabled: true,
			text: text.to_string(),
		}
	}

	pub fn after(mut self, polls: u32) -> Self {
		self.appears_after = polls;
		self
	}

	pub fn hidden(mut self) -> Self {
		self.visible = false;
		self
	}

	pub fn disabled(mut self) -> Self {
		self.enabled = false;
		self
	}
}

#[derive(Debug)]
pub struct MockPage {
	closed: AtomicBool,
	close_fails: bool,
	goto_fails: bool,
	elements: HashMap<String, MockElement>,
	query_counts: Mutex<HashMap<String, u32>>,
	pub visits: Mutex<Vec<String>>,
	pub clicks: Mutex<Vec<String>>,
	pub fills: Mutex<Vec<(String, String)>>,
}

impl MockPage {
	pub fn is_closed(&self) -> bool {
		self.closed.load(Ordering::SeqCst)
	}

	pub fn query_count(&self, selector: &Selector) -> u32 {
		self.query_counts.lock().get(selector.as_str()).copied().unwrap_or(0)
	}

	fn guard(&self) -> Result<()> {
		if self.is_closed() { Err(Error::SessionClosed) } else { Ok(()) }
	}

	/// Returns the element when it has become observable, bumping the
	/// selector's query count.
	fn observe(&self, selector: &Selector) -> Result<Option<&MockElement>> {
		self.guard()?;
		let Some(element) = self.elements.get(selector.as_str()) else {
			return Ok(None);
		};

		let mut counts = self.query_counts.lock();
		let count = counts.entry(selector.as_str().to_string()).or_insert(0);
		*count += 1;
		if *count <= element.appears_after {
			return Ok(None);
		}
		Ok(Some(element))
	}
}

#[async_trait]
impl BrowserPage for MockPage {
	async fn goto(&self, url: &str) -> Result<()> {
		self.guard()?;
		if self.goto_fails {
			return Err(Error::Connection(format!("navigation to {url} refused")));
		}
		self.visits.lock().push(url.to_string());
		Ok(())
	}

	async fn exists(&self, selector: &Selector) -> Result<bool> {
		Ok(self.observe(selector)?.is_some())
	}

	async fn is_visible(&self, selector: &Selector) -> Result<bool> {
		Ok(self.observe(selector)?.is_some_and(|element| element.visible))
	}

	async fn is_enabled(&self, selector: &Selector) -> Result<bool> {
		Ok(self.observe(selector)?.is_some_and(|element| element.enabled))
	}

	async fn inner_text(&self, selector: &Selector) -> Result<String> {
		match self.observe(selector)? {
			Some(element) => Ok(element.text.clone()),
			None => Err(Error::NotFound(format!("no element matches {selector}"))),
		}
	}

	async fn click(&self, selector: &Selector) -> Result<()> {
		match self.observe(selector)? {
			Some(_) => {
				self.clicks.lock().push(selector.as_str().to_string());
				Ok(())
			}
			None => Err(Error::NotFound(format!("no element matches {selector}"))),
		}
	}

	async fn fill(&self, selector: &Selector, value: &str) -> Result<()> {
		match self.observe(selector)? {
			Some(_) => {
				self.fills.lock().push((selector.as_str().to_string(), value.to_string()));
				Ok(())
			}
			None => Err(Error::NotFound(format!("no element matches {selector}"))),
		}
	}

	async fn screenshot_png(&self) -> Result<Vec<u8>> {
		self.guard()?;
		Ok(b"\x89PNG mock".to_vec())
	}

	async fn close(&self) -> Result<()> {
		self.closed.store(true, Ordering::SeqCst);
		if self.close_fails {
			return Err(Error::Backend(anyhow::anyhow!("browser process hung up during close")));
		}
		Ok(())
	}
}

#[derive(Default)]
struct BackendInner {
	launches: AtomicU32,
	fail_next_launches: AtomicU32,
	close_fails: AtomicBool,
	goto_fails: AtomicBool,
	elements: Mutex<HashMap<String, MockElement>>,
	last_options: Mutex<Option<LaunchOptions>>,
}

/// Clonable scripted backend; clones share state so tests can keep a probe
/// handle after moving one clone into the manager.
#[derive(Clone, Default)]
pub struct MockBrowser {
	inner: Arc<BackendInner>,
}

impl MockBrowser {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_element(self, selector: &Selector, element: MockElement) -> Self {
		self.inner.elements.lock().insert(selector.as_str().to_string(), element);
		self
	}

	pub fn fail_next_launches(&self, count: u32) {
		self.inner.fail_next_launches.store(count, Ordering::SeqCst);
	}

	pub fn set_close_fails(&self, fails: bool) {
		self.inner.close_fails.store(fails, Ordering::SeqCst);
	}

	pub fn set_goto_fails(&self, fails: bool) {
		self.inner.goto_fails.store(fails, Ordering::SeqCst);
	}

	pub fn launches(&self) -> u32 {
		self.inner.launches.load(Ordering::SeqCst)
	}

	pub fn last_options(&self) -> Option<LaunchOptions> {
		self.inner.last_options.lock().clone()
	}
}

#[async_trait]
impl BrowserBackend for MockBrowser {
	type Page = MockPage;

	async fn launch(&self, options: &LaunchOptions) -> Result<Self::Page> {
		self.inner.launches.fetch_add(1, Ordering::SeqCst);
		*self.inner.last_options.lock() = Some(options.clone());

		let remaining = self.inner.fail_next_launches.load(Ordering::SeqCst);
		if remaining > 0 {
			self.inner.fail_next_launches.store(remaining - 1, Ordering::SeqCst);
			return Err(Error::Connection("browser engine failed to start".into()));
		}

		Ok(MockPage {
			closed: AtomicBool::new(false),
			close_fails: self.inner.close_fails.load(Ordering::SeqCst),
			goto_fails: self.inner.goto_fails.load(Ordering::SeqCst),
			elements: self.inner.elements.lock().clone(),
			query_counts: Mutex::new(HashMap::new()),
			visits: Mutex::new(Vec::new()),
			clicks: Mutex::new(Vec::new()),
			fills: Mutex::new(Vec::new()),
		})
	}
}
