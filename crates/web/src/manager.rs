//! Session lifecycle for the web variant.

use std::sync::Arc;

use tracing::{info, warn};

use taf_core::{Error, Result};

use crate::backend::{BrowserBackend, BrowserPage};
use crate::settings::WebSettings;

enum State<P> {
	Uninitialized,
	Active(Arc<P>),
	Closed,
}

/// Owns at most one live browser page and its acquire/release contract.
///
/// One manager per test context: construct it in setup, pass it down
/// explicitly, drop it in teardown. Sharing a manager across unrelated
/// tests couples them through lifecycle state.
pub struct BrowserManager<B: BrowserBackend> {
	backend: B,
	settings: WebSettings,
	state: State<B::Page>,
}

impl<B: BrowserBackend> BrowserManager<B> {
	pub fn new(backend: B, settings: WebSettings) -> Self {
		Self {
			backend,
			settings,
			state: State::Uninitialized,
		}
	}

	/// Returns the active page, launching a fresh session when none exists.
	///
	/// A fresh session is navigated to the configured base URL before it is
	/// handed out. Idempotent: a second call without an intervening
	/// [`release`] returns the same handle and launches no second browser.
	/// Launch failures propagate unmodified; compose with
	/// [`taf_core::RetryPolicy`] when retries are wanted.
	///
	/// [`release`]: BrowserManager::release
	pub async fn acquire(&mut self) -> Result<Arc<B::Page>> {
		if let State::Active(page) = &self.state {
			warn!(target = "taf.session", "session already active, reusing");
			return Ok(Arc::clone(page));
		}

		info!(
			target = "taf.session",
			browser = %self.settings.browser,
			headless = self.settings.headless,
			"launching browser session"
		);
		let page = Arc::new(self.backend.launch(&self.settings.launch_options()).await?);

		if let Err(err) = page.goto(&self.settings.base_url).await {
			// don't leak the freshly launched browser behind the error
			if let Err(close_err) = page.close().await {
				warn!(target = "taf.session", error = %close_err, "error closing session after failed navigation");
			}
			return Err(err);
		}
		info!(target = "taf.session", url = %self.settings.base_url, "navigated to base url");

		self.state = State::Active(Arc::clone(&page));
		Ok(page)
	}

	/// Returns the active page without side effects.
	pub fn current(&self) -> Result<Arc<B::Page>> {
		match &self.state {
			State::Active(page) => Ok(Arc::clone(page)),
			_ => Err(Error::NotInitialized),
		}
	}

	/// Closes the active session, if any.
	///
	/// Never fails the caller: close errors are logged and swallowed so
	/// teardown proceeds unconditionally. Safe to call repeatedly; a later
	/// [`acquire`] starts fresh.
	///
	/// [`acquire`]: BrowserManager::acquire
	pub async fn release(&mut self) {
		match std::mem::replace(&mut self.state, State::Closed) {
			State::Active(page) => {
				info!(target = "taf.session", "closing browser session");
				if let Err(err) = page.close().await {
					warn!(target = "taf.session", error = %err, "error closing session");
				}
			}
			State::Uninitialized => {
				self.state = State::Uninitialized;
			}
			State::Closed => {}
		}
	}

	/// Forgets all lifecycle state without touching the backend.
	///
	/// Used between isolated runs so no state bleeds across them. Does not
	/// close an active session; call [`release`] first when one exists.
	/// Afterwards [`current`] fails with [`Error::NotInitialized`].
	///
	/// [`release`]: BrowserManager::release
	/// [`current`]: BrowserManager::current
	pub fn reset(&mut self) {
		info!(target = "taf.session", "resetting session lifecycle state");
		self.state = State::Uninitialized;
	}

	pub fn settings(&self) -> &WebSettings {
		&self.settings
	}
}
